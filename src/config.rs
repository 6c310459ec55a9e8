//! Settings loaded once at startup from the environment.
//!
//! Every knob has a `STRATUS_`-prefixed variable and a default, so a bare
//! environment yields a working configuration pointed at the production API.
//! A `.env` file is honored via `dotenvy` when present.

use crate::error::ConfigError;
use crate::network::DEFAULT_API_URL;

/// Which backend the credential source reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretBackend {
    /// Process environment variables.
    #[default]
    Env,
    /// One secret per file under a base directory (Docker-style secrets).
    File,
}

/// Client configuration surface.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    /// Total attempt budget per logical request (initial try included).
    pub max_retries: u32,
    /// Base backoff delay in seconds; retry N sleeps `backoff * 2^(N-1)`.
    pub backoff_factor: f64,
    /// Admission gate for concurrent page fetches.
    pub concurrency_limit: usize,
    /// Requests per minute above which the anomaly detector warns.
    pub rate_threshold_per_minute: usize,
    pub secret_backend: SecretBackend,
    /// Base directory for the file secret backend.
    pub secrets_dir: String,
    /// Connector registry entry to use.
    pub provider: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            max_retries: 3,
            backoff_factor: 1.0,
            concurrency_limit: 10,
            rate_threshold_per_minute: 100,
            secret_backend: SecretBackend::Env,
            secrets_dir: "/run/secrets".to_string(),
            provider: "sim".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(url) = lookup("STRATUS_BASE_URL") {
            settings.base_url = url;
        }
        if let Some(raw) = lookup("STRATUS_MAX_RETRIES") {
            settings.max_retries = parse(raw, "STRATUS_MAX_RETRIES")?;
        }
        if let Some(raw) = lookup("STRATUS_BACKOFF_FACTOR") {
            settings.backoff_factor = parse(raw, "STRATUS_BACKOFF_FACTOR")?;
        }
        if let Some(raw) = lookup("STRATUS_CONCURRENCY_LIMIT") {
            settings.concurrency_limit = parse(raw, "STRATUS_CONCURRENCY_LIMIT")?;
        }
        if let Some(raw) = lookup("STRATUS_RATE_THRESHOLD_PER_MINUTE") {
            settings.rate_threshold_per_minute =
                parse(raw, "STRATUS_RATE_THRESHOLD_PER_MINUTE")?;
        }
        if let Some(raw) = lookup("STRATUS_SECRET_BACKEND") {
            settings.secret_backend = match raw.as_str() {
                "env" => SecretBackend::Env,
                "file" => SecretBackend::File,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "STRATUS_SECRET_BACKEND",
                        value: raw,
                        reason: "expected \"env\" or \"file\"".to_string(),
                    })
                }
            };
        }
        if let Some(dir) = lookup("STRATUS_SECRETS_DIR") {
            settings.secrets_dir = dir;
        }
        if let Some(provider) = lookup("STRATUS_PROVIDER") {
            settings.provider = provider;
        }

        Ok(settings)
    }
}

fn parse<T: std::str::FromStr>(raw: String, var: &'static str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |var| map.get(var).map(|v| v.to_string())
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.base_url, DEFAULT_API_URL);
        assert_eq!(settings.max_retries, 3);
        assert_eq!(settings.concurrency_limit, 10);
        assert_eq!(settings.rate_threshold_per_minute, 100);
        assert_eq!(settings.secret_backend, SecretBackend::Env);
        assert_eq!(settings.provider, "sim");
    }

    #[test]
    fn overrides_are_parsed() {
        let vars = [
            ("STRATUS_BASE_URL", "http://localhost:8080"),
            ("STRATUS_MAX_RETRIES", "5"),
            ("STRATUS_BACKOFF_FACTOR", "0.25"),
            ("STRATUS_SECRET_BACKEND", "file"),
            ("STRATUS_SECRETS_DIR", "/tmp/secrets"),
        ];
        let settings = Settings::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.max_retries, 5);
        assert_eq!(settings.backoff_factor, 0.25);
        assert_eq!(settings.secret_backend, SecretBackend::File);
        assert_eq!(settings.secrets_dir, "/tmp/secrets");
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let vars = [("STRATUS_MAX_RETRIES", "lots")];
        let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "STRATUS_MAX_RETRIES",
                ..
            }
        ));
    }

    #[test]
    fn unknown_secret_backend_is_rejected() {
        let vars = [("STRATUS_SECRET_BACKEND", "vault")];
        let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
