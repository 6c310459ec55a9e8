//! HTTP executor layer — `StratusHttp` with classified-outcome retry.

pub mod client;
pub mod retry;

pub use client::{RequestOptions, StratusHttp};
pub use retry::RetryConfig;
