//! Network constants for the Stratus SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.stratus.example.com";

/// Token endpoint path, relative to the base URL.
pub const TOKEN_ENDPOINT: &str = "/oauth2/token";
