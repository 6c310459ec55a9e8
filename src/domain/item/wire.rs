//! Wire types for item listings (REST).

use crate::domain::item::Item;
use crate::pagination::Page;

/// REST response for `GET /items?page=N`.
pub type ItemPage = Page<Item>;
