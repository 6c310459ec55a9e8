//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Secret error: {0}")]
    Secret(#[from] SecretError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unknown connector: {0:?}")]
    UnknownConnector(String),

    #[error("Unknown operation {operation:?} for connector {connector:?}")]
    UnknownOperation {
        connector: &'static str,
        operation: String,
    },
}

/// HTTP-layer errors surfaced by the request executor.
///
/// 429 and 5xx responses are retried internally and never surface directly;
/// once the attempt budget runs out they appear as
/// [`HttpError::MaxRetriesExceeded`].
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-retryable client error (4xx other than 401/404/429).
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The token endpoint answered with a non-success status.
    #[error("Token endpoint failed ({status}): {body}")]
    TokenEndpoint { status: u16, body: String },

    /// The token request itself could not be completed.
    #[error("Token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Credential lookup failed: {0}")]
    Credential(#[from] SecretError),
}

/// Settings-loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Credential-source errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Secret {name:?} not found in {backend} backend")]
    NotFound { name: String, backend: &'static str },

    #[error("Failed to read secret {name:?}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
