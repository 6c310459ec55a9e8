//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — domain types
//! - `wire.rs` — raw serde structs matching API responses
//! - `client.rs` — sub-client with HTTP methods

pub mod item;
