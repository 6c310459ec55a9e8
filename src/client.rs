//! High-level client — `StratusClient` with sub-client accessors.
//!
//! There is no process-wide singleton: the caller constructs one handle and
//! passes it (or cheap clones of it — shared state lives behind `Arc`s) into
//! whatever needs it.

use std::sync::Arc;
use std::time::Duration;

use crate::anomaly::AnomalyDetector;
use crate::auth::TokenManager;
use crate::config::Settings;
use crate::connector::{registry, Connector};
use crate::domain::item::client::Items;
use crate::error::SdkError;
use crate::http::{RetryConfig, StratusHttp};
use crate::secrets::{self, CredentialSource};

/// The primary entry point for the Stratus SDK.
#[derive(Clone)]
pub struct StratusClient {
    pub(crate) http: StratusHttp,
    pub(crate) concurrency_limit: usize,
    provider: String,
}

impl StratusClient {
    pub fn builder() -> StratusClientBuilder {
        StratusClientBuilder::default()
    }

    /// Build a client from the environment configuration surface.
    pub fn from_env() -> Result<Self, SdkError> {
        let settings = Settings::from_env()?;
        StratusClientBuilder::from_settings(settings).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }

    /// Construct the connector configured as the provider.
    pub fn connector(&self) -> Result<Box<dyn Connector>, SdkError> {
        registry::connector(&self.provider, self.clone())
    }

    /// The low-level request executor, for callers issuing raw operations.
    pub fn http(&self) -> &StratusHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StratusClientBuilder {
    settings: Settings,
    credentials: Option<Arc<dyn CredentialSource>>,
    retry: Option<RetryConfig>,
}

impl Default for StratusClientBuilder {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            credentials: None,
            retry: None,
        }
    }
}

impl StratusClientBuilder {
    /// Start from pre-loaded settings instead of the defaults.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            credentials: None,
            retry: None,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.settings.base_url = url.to_string();
        self
    }

    /// Override the retry policy derived from the settings.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn concurrency_limit(mut self, limit: usize) -> Self {
        self.settings.concurrency_limit = limit;
        self
    }

    pub fn rate_threshold(mut self, threshold: usize) -> Self {
        self.settings.rate_threshold_per_minute = threshold;
        self
    }

    pub fn provider(mut self, name: &str) -> Self {
        self.settings.provider = name.to_string();
        self
    }

    /// Use an explicit credential source instead of the configured backend.
    pub fn credentials(mut self, source: Arc<dyn CredentialSource>) -> Self {
        self.credentials = Some(source);
        self
    }

    pub fn build(self) -> Result<StratusClient, SdkError> {
        let settings = self.settings;
        let pool = StratusHttp::build_pool();

        let credentials = self
            .credentials
            .unwrap_or_else(|| secrets::credential_source(&settings));
        let tokens = Arc::new(TokenManager::new(
            pool.clone(),
            &settings.base_url,
            credentials,
        ));
        let detector = Arc::new(AnomalyDetector::new(settings.rate_threshold_per_minute));
        let retry = self.retry.unwrap_or(RetryConfig {
            max_retries: settings.max_retries,
            backoff_factor: Duration::from_secs_f64(settings.backoff_factor.max(0.0)),
            ..RetryConfig::default()
        });

        Ok(StratusClient {
            http: StratusHttp::new(&settings.base_url, pool, tokens, detector, retry),
            concurrency_limit: settings.concurrency_limit,
            provider: settings.provider,
        })
    }
}
