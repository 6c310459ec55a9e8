//! Items — the provider's principal entities.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// An opaque provider record. Immutable value type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub value: f64,
}
