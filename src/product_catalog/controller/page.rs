use autometrics::autometrics;
use rocket::serde::json::Json;
use rocket::{get, routes, Route, State};

use crate::product_catalog::repository::{ProductSource, SharedSource};

use super::dto::PageData;

/// Builds the root page's template context from one read-all query.
///
/// A failed query renders as an empty catalog: the caller cannot tell an
/// outage from an empty table. The warn log is the only trace of the
/// difference.
pub async fn load_page_data(source: &dyn ProductSource) -> PageData {
    let allproducts = match source.fetch_all().await {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("product query failed, rendering empty catalog: {}", e);
            Vec::new()
        }
    };

    PageData { allproducts }
}

#[autometrics]
#[get("/")]
pub async fn index(source: &State<SharedSource>) -> Json<PageData> {
    Json(load_page_data(source.inner().as_ref()).await)
}

pub fn routes() -> Vec<Route> {
    routes![index]
}
