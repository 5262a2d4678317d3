use autometrics::autometrics;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, routes, Route, State};

use crate::product_catalog::repository::{SharedSource, StoreError};

use super::dto::{ErrorResponse, ProductListResponse};

#[autometrics]
#[get("/products")]
pub async fn list_products(
    source: &State<SharedSource>,
) -> Result<Json<ProductListResponse>, (Status, Json<ErrorResponse>)> {
    match source.fetch_all().await {
        Ok(products) => Ok(Json(ProductListResponse {
            success: true,
            count: products.len(),
            products,
        })),
        Err(e @ StoreError::Query { .. }) => {
            log::error!("product query failed: {}", e);
            Err((
                Status::InternalServerError,
                Json(ErrorResponse {
                    error: "Failed to fetch products".to_string(),
                    details: e.details(),
                }),
            ))
        }
        Err(e) => {
            log::error!("product fetch fault: {}", e);
            Err((
                Status::InternalServerError,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                    details: e.details(),
                }),
            ))
        }
    }
}

pub fn routes() -> Vec<Route> {
    routes![list_products]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};

    use crate::product_catalog::model::ProductRow;
    use crate::product_catalog::repository::MockProductSource;

    fn row(value: Value) -> ProductRow {
        value.as_object().cloned().expect("object literal")
    }

    async fn setup_rocket_client(source: MockProductSource) -> Client {
        let source: SharedSource = Arc::new(source);
        let rocket = rocket::build()
            .manage(source)
            .mount("/api", routes![list_products]);

        Client::tracked(rocket).await.expect("Valid rocket instance")
    }

    #[tokio::test]
    async fn test_list_products_with_data() {
        let rows = vec![
            row(json!({"id": 1, "name": "Widget", "price": 4.5})),
            row(json!({"id": 2, "name": "Gadget", "description": null})),
            row(json!({"id": 3, "name": "Café Grinder ™"})),
        ];
        let expected = rows.clone();

        let mut source = MockProductSource::new();
        source
            .expect_fetch_all()
            .returning(move || Ok(rows.clone()));

        let client = setup_rocket_client(source).await;
        let response = client.get("/api/products").dispatch().await;

        assert_eq!(response.status(), rocket::http::Status::Ok);

        let response_body: ProductListResponse = response
            .into_json()
            .await
            .expect("Valid JSON response");

        assert!(response_body.success);
        assert_eq!(response_body.count, 3);
        assert_eq!(response_body.count, response_body.products.len());
        // Rows pass through untransformed
        assert_eq!(response_body.products, expected);
    }

    #[tokio::test]
    async fn test_list_products_empty_table() {
        let mut source = MockProductSource::new();
        source.expect_fetch_all().returning(|| Ok(Vec::new()));

        let client = setup_rocket_client(source).await;
        let response = client.get("/api/products").dispatch().await;

        assert_eq!(response.status(), rocket::http::Status::Ok);

        let response_body: ProductListResponse = response
            .into_json()
            .await
            .expect("Valid JSON response");

        assert!(response_body.success);
        assert_eq!(response_body.count, 0);
        assert!(response_body.products.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_query_error() {
        let mut source = MockProductSource::new();
        source.expect_fetch_all().returning(|| {
            Err(StoreError::Query {
                message: "relation \"public.allproducts\" does not exist".to_string(),
            })
        });

        let client = setup_rocket_client(source).await;
        let response = client.get("/api/products").dispatch().await;

        assert_eq!(response.status(), rocket::http::Status::InternalServerError);

        let response_body: ErrorResponse = response
            .into_json()
            .await
            .expect("Valid JSON response");

        assert_eq!(response_body.error, "Failed to fetch products");
        assert!(!response_body.details.is_empty());
        assert_eq!(
            response_body.details,
            "relation \"public.allproducts\" does not exist"
        );
    }

    #[tokio::test]
    async fn test_list_products_unexpected_fault() {
        let mut source = MockProductSource::new();
        source.expect_fetch_all().returning(|| {
            Err(StoreError::Other(
                "error sending request: connection refused".to_string(),
            ))
        });

        let client = setup_rocket_client(source).await;
        let response = client.get("/api/products").dispatch().await;

        assert_eq!(response.status(), rocket::http::Status::InternalServerError);

        let response_body: ErrorResponse = response
            .into_json()
            .await
            .expect("Valid JSON response");

        assert_eq!(response_body.error, "Internal server error");
        assert!(!response_body.details.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_single_row_scenario() {
        let mut source = MockProductSource::new();
        source
            .expect_fetch_all()
            .returning(|| Ok(vec![row(json!({"id": 1, "name": "Widget"}))]));

        let client = setup_rocket_client(source).await;
        let response = client.get("/api/products").dispatch().await;

        assert_eq!(response.status(), rocket::http::Status::Ok);

        let response_body: Value = response
            .into_json()
            .await
            .expect("Valid JSON response");

        assert_eq!(
            response_body,
            json!({
                "success": true,
                "count": 1,
                "products": [{"id": 1, "name": "Widget"}]
            })
        );
    }
}
