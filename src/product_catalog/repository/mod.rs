pub mod client;
pub mod dto;

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::product_catalog::model::ProductRow;

pub use client::{TableClient, PRODUCTS_TABLE};
pub use dto::StoreError;

/// Read access to the hosted product table. Controllers depend on this
/// seam rather than on the concrete REST client.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ProductRow>, StoreError>;
}

/// Process-scoped source handed to Rocket's managed state at startup.
pub type SharedSource = Arc<dyn ProductSource>;
