//! Authentication — OAuth2 client-credentials token management.
//!
//! ## Security Model
//!
//! - The bearer token lives inside [`TokenManager`] and is handed to the HTTP
//!   executor per request. It is never exposed via the public API and never
//!   appears in logs (the executor redacts the `Authorization` header before
//!   any debug line).
//! - The client id/secret are resolved from the configured
//!   [`CredentialSource`](crate::secrets::CredentialSource) at refresh time and
//!   exist only for the duration of the token request.

pub mod manager;

pub use manager::TokenManager;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Safety margin subtracted from the server-declared token lifetime, so a
/// token is never attached to a request it could expire mid-flight.
pub const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Response from `POST /oauth2/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Declared lifetime in seconds.
    pub expires_in: u64,
}
