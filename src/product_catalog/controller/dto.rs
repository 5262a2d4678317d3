use serde::{Deserialize, Serialize};

use crate::product_catalog::model::ProductRow;

/// Success envelope for `GET /api/products`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub count: usize,
    pub products: Vec<ProductRow>,
}

/// Error envelope shared by the API endpoint and the 500 catcher.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// Template context for the root page.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageData {
    pub allproducts: Vec<ProductRow>,
}
