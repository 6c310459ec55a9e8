//! Items sub-client — single-page fetch and full listing fan-out.

use crate::client::StratusClient;
use crate::domain::item::wire::ItemPage;
use crate::domain::item::Item;
use crate::error::SdkError;
use crate::http::RequestOptions;
use crate::pagination;

/// Sub-client for item operations.
pub struct Items<'a> {
    pub(crate) client: &'a StratusClient,
}

impl<'a> Items<'a> {
    /// Fetch one page of the item listing.
    pub async fn page(&self, page: u32) -> Result<ItemPage, SdkError> {
        let options = RequestOptions::default().with_query("page", page);
        self.client.http.get("/items", &options).await
    }

    /// Fetch every item across all pages.
    ///
    /// With `concurrent` set, pages after the first are fetched behind the
    /// client's admission gate; the result preserves page order either way.
    pub async fn list_all(&self, concurrent: bool) -> Result<Vec<Item>, SdkError> {
        let concurrency = concurrent.then_some(self.client.concurrency_limit);
        pagination::fetch_all(|page| self.page(page), concurrency).await
    }
}
