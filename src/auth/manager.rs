//! `TokenManager` — owns the bearer token and its expiry.
//!
//! One async mutex guards the whole check-then-refresh sequence, which gives
//! the single-flight guarantee: when several callers hit a near-simultaneous
//! expiry, exactly one network refresh happens and every caller observes the
//! fresh token. Retry/backoff is deliberately absent here; a failed refresh is
//! terminal for the attempt and the executor decides what happens next.

use std::sync::Arc;
use std::time::Instant;

use async_lock::Mutex;
use reqwest::Client;

use crate::auth::{TokenResponse, EXPIRY_MARGIN};
use crate::error::AuthError;
use crate::network::TOKEN_ENDPOINT;
use crate::secrets::{CredentialSource, CLIENT_ID, CLIENT_SECRET};

/// A fully-formed token; mutated only inside the manager's mutex.
#[derive(Debug, Clone)]
struct TokenState {
    value: String,
    expires_at: Instant,
}

/// Owns the OAuth2 bearer token for one client instance.
pub struct TokenManager {
    client: Client,
    token_url: String,
    credentials: Arc<dyn CredentialSource>,
    state: Mutex<Option<TokenState>>,
}

impl TokenManager {
    pub fn new(client: Client, base_url: &str, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            client,
            token_url: format!("{}{}", base_url.trim_end_matches('/'), TOKEN_ENDPOINT),
            credentials,
            state: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, refreshing first if none exists or the
    /// cached one has reached its (margin-adjusted) expiry.
    pub async fn bearer(&self) -> Result<String, AuthError> {
        let mut state = self.state.lock().await;
        match state.as_ref() {
            Some(token) if Instant::now() < token.expires_at => Ok(token.value.clone()),
            _ => {
                let token = self.refresh_locked().await?;
                let value = token.value.clone();
                *state = Some(token);
                Ok(value)
            }
        }
    }

    /// Refresh unconditionally, bypassing the expiry check.
    ///
    /// Used by the executor after a 401, to recover from a token invalidated
    /// server-side before its declared expiry.
    pub async fn force_refresh(&self) -> Result<(), AuthError> {
        let mut state = self.state.lock().await;
        *state = Some(self.refresh_locked().await?);
        Ok(())
    }

    /// Issue the credential-grant request. Caller must hold the state lock.
    async fn refresh_locked(&self) -> Result<TokenState, AuthError> {
        let client_id = self.credentials.get(CLIENT_ID).await?;
        let client_secret = self.credentials.get(CLIENT_SECRET).await?;

        tracing::debug!(url = %self.token_url, "Refreshing OAuth2 token");
        let resp = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = resp.json().await?;
        tracing::info!(expires_in = token.expires_in, "Obtained new bearer token");

        let lifetime =
            std::time::Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN);
        Ok(TokenState {
            value: token.access_token,
            expires_at: Instant::now() + lifetime,
        })
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token value intentionally omitted.
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}
