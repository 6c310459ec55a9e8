//! Simulated Stratus API for integration tests.
//!
//! Mirrors the real provider surface on a `wiremock` server: the OAuth2 token
//! endpoint plus a five-item listing paginated two per page.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stratus_sdk::error::SecretError;
use stratus_sdk::prelude::*;
use stratus_sdk::secrets;

pub const CLIENT_ID: &str = "testclient";
pub const CLIENT_SECRET: &str = "testsecret";
pub const TOKEN: &str = "simtoken";

pub const PAGE_SIZE: usize = 2;
pub const TOTAL_ITEMS: usize = 5;
pub const TOTAL_PAGES: u32 = 3;

/// Fixed credentials, so tests never touch the process environment.
pub struct StaticCredentials;

#[async_trait::async_trait]
impl CredentialSource for StaticCredentials {
    async fn get(&self, name: &str) -> Result<String, SecretError> {
        match name {
            secrets::CLIENT_ID => Ok(CLIENT_ID.to_string()),
            secrets::CLIENT_SECRET => Ok(CLIENT_SECRET.to_string()),
            _ => Err(SecretError::NotFound {
                name: name.to_string(),
                backend: "static",
            }),
        }
    }
}

/// A client wired to the mock server, with fast backoff so retry tests finish
/// quickly.
pub fn client_for(server: &MockServer) -> StratusClient {
    StratusClient::builder()
        .base_url(&server.uri())
        .retry(RetryConfig {
            max_retries: 3,
            backoff_factor: Duration::from_millis(10),
            max_delay: Duration::from_millis(100),
        })
        .credentials(Arc::new(StaticCredentials))
        .build()
        .unwrap()
}

pub fn token_response(expires_in: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": TOKEN,
        "token_type": "Bearer",
        "expires_in": expires_in,
    }))
}

/// Token endpoint accepting the client-credentials grant. `expected_hits`
/// asserts how many refreshes the scenario performs.
pub async fn mount_token(server: &MockServer, expires_in: u64, expected_hits: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=testclient"))
        .respond_with(token_response(expires_in))
        .expect(expected_hits)
        .mount(server)
        .await;
}

pub fn item_json(id: usize) -> Value {
    json!({"id": id, "name": format!("Item {id}"), "value": id as f64 * 1.5})
}

pub fn page_json(page: u32) -> Value {
    let start = (page as usize - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(TOTAL_ITEMS);
    let items: Vec<Value> = (start + 1..=end).map(item_json).collect();
    json!({
        "items": items,
        "page": page,
        "total_pages": TOTAL_PAGES,
        "next_page": if page < TOTAL_PAGES { Some(page + 1) } else { None },
    })
}

/// Mount the full five-item listing (three pages).
pub async fn mount_items(server: &MockServer) {
    for page in 1..=TOTAL_PAGES {
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(page)))
            .mount(server)
            .await;
    }
}

/// A one-page empty listing, for retry scenarios.
pub fn empty_listing() -> Value {
    json!({"items": [], "page": 1, "total_pages": 1, "next_page": null})
}
