//! # Stratus SDK
//!
//! An authenticated async client for the Stratus provider REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Error taxonomy, settings, credential sources, domain types
//! 2. **Auth** — OAuth2 client-credentials `TokenManager` with single-flight refresh
//! 3. **HTTP** — `StratusHttp` request executor with classified-outcome retry
//! 4. **Fan-out** — Pagination orchestrator with a bounded admission gate
//! 5. **High-Level Client** — `StratusClient` with sub-clients and connectors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stratus_sdk::prelude::*;
//!
//! let client = StratusClient::from_env()?;
//! let items = client.items().list_all(true).await?;
//!
//! let connector = client.connector()?;
//! let entities = connector.list_principal_entities().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Settings loaded from the environment.
pub mod config;

/// Credential sources (env / file backends).
pub mod secrets;

/// Domain modules (vertical slices).
pub mod domain;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// OAuth2 token management.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Request executor with retry.
pub mod http;

/// Request-rate anomaly detection.
pub mod anomaly;

// ── Layer 4: Fan-out ─────────────────────────────────────────────────────────

/// Pagination orchestrator.
pub mod pagination;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `StratusClient` — the primary entry point.
pub mod client;

/// Connector contract and registry.
pub mod connector;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::item::wire::ItemPage;
    pub use crate::domain::item::Item;
    pub use crate::pagination::Page;

    // Errors
    pub use crate::error::{AuthError, ConfigError, HttpError, SdkError, SecretError};

    // Configuration + credentials
    pub use crate::config::{SecretBackend, Settings};
    pub use crate::secrets::{CredentialSource, EnvCredentials, FileCredentials};

    // Auth
    pub use crate::auth::{TokenManager, TokenResponse};

    // HTTP executor
    pub use crate::http::{RequestOptions, RetryConfig, StratusHttp};

    // Anomaly detection
    pub use crate::anomaly::AnomalyDetector;

    // High-level client + connectors
    pub use crate::client::{StratusClient, StratusClientBuilder};
    pub use crate::connector::{registry, Connector, Operation, OperationTable};

    // Network
    pub use crate::network::DEFAULT_API_URL;
}
