//! Token lifecycle scenarios against the simulated API.

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stratus_sdk::prelude::*;

#[tokio::test]
async fn token_is_refreshed_once_and_reused_while_valid() {
    let server = MockServer::start().await;
    mount_token(&server, 3600, 1).await;
    mount_items(&server).await;

    let client = client_for(&server);
    client.items().page(1).await.unwrap();
    client.items().page(2).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn expired_token_triggers_exactly_one_refresh_per_request() {
    let server = MockServer::start().await;
    // expires_in equals the safety margin, so the token is expired on arrival
    // and every request must refresh first.
    mount_token(&server, 60, 2).await;
    mount_items(&server).await;

    let client = client_for(&server);
    client.items().page(1).await.unwrap();
    client.items().page(1).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn single_401_forces_one_refresh_then_succeeds() {
    let server = MockServer::start().await;
    // Initial refresh + one forced refresh after the 401.
    mount_token(&server, 3600, 2).await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.items().page(1).await.unwrap();
    assert_eq!(page.items.len(), 2);

    server.verify().await;
}

#[tokio::test]
async fn token_endpoint_failure_surfaces_as_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "invalid_client",
            })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.items().page(1).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Auth(AuthError::TokenEndpoint { status: 401, .. })
    ));
}

#[tokio::test]
async fn persistent_401_is_bounded_by_the_attempt_budget() {
    let server = MockServer::start().await;
    // One refresh per attempt: the initial one plus one forced per 401.
    mount_token(&server, 3600, 4).await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(401))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.items().page(1).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::MaxRetriesExceeded { attempts: 3, .. })
    ));

    server.verify().await;
}
