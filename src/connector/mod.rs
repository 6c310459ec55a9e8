//! Connector contract — logical operation names mapped to HTTP endpoints.
//!
//! A connector declares an [`OperationTable`] (name → method + path template)
//! and gets `invoke` for free: template resolution, placeholder substitution,
//! and delegation to the request executor. Every connector implements the
//! canonical `list_principal_entities` operation on top.

pub mod registry;
pub mod sim;

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Method;

use crate::client::StratusClient;
use crate::domain::item::Item;
use crate::error::{HttpError, SdkError};
use crate::http::RequestOptions;

/// HTTP method + path template for one logical operation.
///
/// Templates use `{name}` placeholders, e.g. `/items/{id}`.
#[derive(Debug, Clone)]
pub struct Operation {
    pub method: Method,
    pub path: &'static str,
}

/// Mapping from logical operation names to endpoints.
#[derive(Debug, Default)]
pub struct OperationTable {
    ops: HashMap<&'static str, Operation>,
}

impl OperationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, name: &'static str, method: Method, path: &'static str) -> Self {
        self.ops.insert(name, Operation { method, path });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.ops.get(name)
    }
}

/// A provider connector built atop the request executor.
#[async_trait]
pub trait Connector: Send + Sync {
    fn name(&self) -> &'static str;

    fn operations(&self) -> &OperationTable;

    fn client(&self) -> &StratusClient;

    /// Resolve a logical operation, substitute path placeholders, and execute.
    async fn invoke(
        &self,
        operation: &str,
        path_params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<serde_json::Value, SdkError> {
        let op = self
            .operations()
            .get(operation)
            .ok_or_else(|| SdkError::UnknownOperation {
                connector: self.name(),
                operation: operation.to_string(),
            })?;
        let path = resolve_template(op.path, path_params);
        let resp = self
            .client()
            .http
            .execute(op.method.clone(), &path, &options)
            .await?;
        Ok(resp.json().await.map_err(HttpError::Transport)?)
    }

    /// Canonical operation every connector provides.
    async fn list_principal_entities(&self) -> Result<Vec<Item>, SdkError>;
}

impl std::fmt::Debug for dyn Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector").field("name", &self.name()).finish()
    }
}

fn resolve_template(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (key, value) in params {
        path = path.replace(&format!("{{{key}}}"), value);
    }
    path
}
