//! Credential source — where the OAuth2 client id/secret come from.
//!
//! Two backends behind one capability trait, selected at construction time by
//! [`Settings::secret_backend`](crate::config::Settings):
//!
//! - [`EnvCredentials`] reads process environment variables.
//! - [`FileCredentials`] reads one secret per file under a base directory,
//!   matching Docker/compose secrets mounted at `/run/secrets/<name>`.
//!
//! Values are never logged; the token manager consumes them directly.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{SecretBackend, Settings};
use crate::error::SecretError;

/// Environment variable / file name holding the OAuth2 client id.
pub const CLIENT_ID: &str = "STRATUS_CLIENT_ID";

/// Environment variable / file name holding the OAuth2 client secret.
pub const CLIENT_SECRET: &str = "STRATUS_CLIENT_SECRET";

/// A named-secret lookup capability.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn get(&self, name: &str) -> Result<String, SecretError>;
}

/// Reads secrets from process environment variables.
#[derive(Debug, Default)]
pub struct EnvCredentials;

#[async_trait]
impl CredentialSource for EnvCredentials {
    async fn get(&self, name: &str) -> Result<String, SecretError> {
        std::env::var(name).map_err(|_| SecretError::NotFound {
            name: name.to_string(),
            backend: "env",
        })
    }
}

/// Reads secrets from one file per name under a base directory.
#[derive(Debug)]
pub struct FileCredentials {
    base: PathBuf,
}

impl FileCredentials {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl CredentialSource for FileCredentials {
    async fn get(&self, name: &str) -> Result<String, SecretError> {
        let path = self.base.join(name);
        if !path.exists() {
            return Err(SecretError::NotFound {
                name: name.to_string(),
                backend: "file",
            });
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| SecretError::Io {
            name: name.to_string(),
            source,
        })?;
        Ok(raw.trim().to_string())
    }
}

/// Build the credential source selected by the settings.
pub fn credential_source(settings: &Settings) -> Arc<dyn CredentialSource> {
    match settings.secret_backend {
        SecretBackend::Env => Arc::new(EnvCredentials),
        SecretBackend::File => Arc::new(FileCredentials::new(settings.secrets_dir.clone())),
    }
}
