//! Pagination fan-out — drive the executor across every page of a listing.
//!
//! Page 1 is fetched first to learn `total_pages`; the remainder is fetched
//! either strictly sequentially or concurrently behind a counting admission
//! gate. Results are always reassembled in ascending page order, never in
//! completion order.

use std::future::Future;

use async_lock::Semaphore;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// One page of a paginated listing, as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub next_page: Option<u32>,
}

/// Fetch every item across all pages of a listing.
///
/// `concurrency` of `None` fetches pages strictly in order; `Some(k)` allows at
/// most `k` page fetches in flight at a time. On failure the first error (in
/// page order) propagates with no partial results. Once a concurrent batch is
/// dispatched nothing is cancelled — outstanding fetches run to completion and
/// failures other than the first surfaced one are dropped, a documented
/// limitation.
pub async fn fetch_all<T, F, Fut>(
    fetch_page: F,
    concurrency: Option<usize>,
) -> Result<Vec<T>, SdkError>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, SdkError>>,
{
    let first = fetch_page(1).await?;
    let total_pages = first.total_pages;
    let mut items = first.items;
    if total_pages <= 1 {
        return Ok(items);
    }

    match concurrency {
        None => {
            for page in 2..=total_pages {
                items.extend(fetch_page(page).await?.items);
            }
        }
        Some(limit) => {
            let gate = Semaphore::new(limit.max(1));
            let fetches = (2..=total_pages).map(|page| {
                let gate = &gate;
                let fetch_page = &fetch_page;
                async move {
                    let _slot = gate.acquire().await;
                    fetch_page(page).await
                }
            });
            // join_all keeps results in input order, so pages come back keyed
            // by page number regardless of completion order.
            for page in join_all(fetches).await {
                items.extend(page?.items);
            }
        }
    }

    Ok(items)
}
