//! Low-level request executor — `StratusHttp`.
//!
//! Every logical call runs the same bounded loop: record the attempt, attach a
//! valid bearer token, send, then classify the outcome. Transport errors, 429
//! and 5xx share one exponential-backoff policy; 401 forces a token refresh and
//! retries immediately; 404 and other 4xx fail without retry. Sub-clients wrap
//! this — nothing above this layer re-implements retry.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::anomaly::AnomalyDetector;
use crate::auth::TokenManager;
use crate::error::{HttpError, SdkError};
use crate::http::retry::RetryConfig;

/// Fixed per-call transport timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Headers replaced with `***` before any log line.
const SENSITIVE_HEADERS: [&str; 4] = ["authorization", "api-key", "cookie", "set-cookie"];

/// Per-request options carried from sub-clients and connectors.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Authenticated HTTP executor for the Stratus REST API.
#[derive(Clone)]
pub struct StratusHttp {
    base_url: String,
    client: Client,
    tokens: Arc<TokenManager>,
    detector: Arc<AnomalyDetector>,
    retry: RetryConfig,
}

impl StratusHttp {
    pub(crate) fn new(
        base_url: &str,
        client: Client,
        tokens: Arc<TokenManager>,
        detector: Arc<AnomalyDetector>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            tokens,
            detector,
            retry,
        }
    }

    /// Build the shared connection pool used by the executor and the token
    /// manager.
    pub(crate) fn build_pool() -> Client {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authenticated request with classified-outcome retry.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, SdkError> {
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        };

        let mut last_error: Option<String> = None;

        for attempt in 1..=self.retry.max_retries {
            self.detector.record_request().await;
            let token = self.tokens.bearer().await?;

            let mut builder = self
                .client
                .request(method.clone(), &url)
                .header(AUTHORIZATION, format!("Bearer {}", token));
            if !options.query.is_empty() {
                builder = builder.query(&options.query);
            }
            if let Some(body) = &options.body {
                builder = builder.json(body);
            }

            let request = builder.build().map_err(HttpError::Transport)?;
            tracing::debug!(
                %method,
                %url,
                attempt,
                headers = ?redact_headers(request.headers()),
                "Request"
            );

            match self.client.execute(request).await {
                Err(e) => {
                    tracing::warn!(
                        %url,
                        attempt,
                        max = self.retry.max_retries,
                        error = %e,
                        "Network error"
                    );
                    last_error = Some(e.to_string());
                    if attempt == self.retry.max_retries {
                        break;
                    }
                    self.backoff(attempt).await;
                }
                Ok(resp) => {
                    let status = resp.status();
                    if status.as_u16() < 400 {
                        tracing::debug!(status = status.as_u16(), %url, "Response");
                        return Ok(resp);
                    }
                    match status.as_u16() {
                        401 => {
                            // Token may have been invalidated server-side —
                            // refresh and retry without consuming a backoff
                            // delay. A failed refresh is terminal.
                            self.detector.record_auth_failure();
                            self.tokens.force_refresh().await?;
                            last_error = Some("HTTP 401 Unauthorized".to_string());
                        }
                        404 => {
                            return Err(HttpError::NotFound(path.to_string()).into());
                        }
                        429 => {
                            tracing::warn!(%url, attempt, "429 Too Many Requests — backing off");
                            last_error = Some("HTTP 429 Too Many Requests".to_string());
                            if attempt < self.retry.max_retries {
                                self.backoff(attempt).await;
                            }
                        }
                        500..=599 => {
                            tracing::warn!(status = status.as_u16(), %url, attempt, "Server error");
                            last_error = Some(format!("HTTP {}", status.as_u16()));
                            if attempt < self.retry.max_retries {
                                self.backoff(attempt).await;
                            }
                        }
                        _ => {
                            let body = resp.text().await.unwrap_or_default();
                            return Err(HttpError::Status {
                                status: status.as_u16(),
                                body,
                            }
                            .into());
                        }
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: self.retry.max_retries,
            last_error: last_error.unwrap_or_else(|| "request failed after retries".to_string()),
        }
        .into())
    }

    /// `execute` + JSON body deserialization.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, SdkError> {
        let resp = self.execute(Method::GET, path, options).await?;
        Ok(resp.json().await.map_err(HttpError::Transport)?)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, SdkError> {
        let resp = self.execute(Method::POST, path, options).await?;
        Ok(resp.json().await.map_err(HttpError::Transport)?)
    }

    async fn backoff(&self, attempt: u32) {
        let delay = self.retry.delay_for_attempt(attempt);
        tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "Backing off");
        futures_timer::Delay::new(delay).await;
    }
}

/// Copy of a header map with sensitive values masked, for logging.
fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let masked = if SENSITIVE_HEADERS.contains(&name.as_str()) {
                "***".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str().to_string(), masked)
        })
        .collect()
}
