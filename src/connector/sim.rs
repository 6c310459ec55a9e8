//! Connector for the simulated provider API.

use async_trait::async_trait;
use reqwest::Method;

use crate::client::StratusClient;
use crate::connector::{Connector, OperationTable};
use crate::domain::item::Item;
use crate::error::SdkError;
use crate::http::RequestOptions;

pub struct SimConnector {
    client: StratusClient,
    operations: OperationTable,
}

impl SimConnector {
    pub const NAME: &'static str = "sim";

    pub fn new(client: StratusClient) -> Self {
        let operations = OperationTable::new()
            .register("list_principal_entities", Method::GET, "/items")
            .register("get_entity", Method::GET, "/items/{id}");
        Self { client, operations }
    }

    /// Fetch a single entity by id via the operation table.
    pub async fn get_entity(&self, id: i64) -> Result<Item, SdkError> {
        let id = id.to_string();
        let value = self
            .invoke("get_entity", &[("id", id.as_str())], RequestOptions::default())
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl Connector for SimConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn operations(&self) -> &OperationTable {
        &self.operations
    }

    fn client(&self) -> &StratusClient {
        &self.client
    }

    async fn list_principal_entities(&self) -> Result<Vec<Item>, SdkError> {
        self.client.items().list_all(true).await
    }
}
