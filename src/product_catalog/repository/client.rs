use async_trait::async_trait;
use reqwest::{header, Url};
use serde_json::Value;

use crate::config::AppConfig;
use crate::product_catalog::model::ProductRow;

use super::dto::{rows_from_value, ErrorBody, StoreError};
use super::ProductSource;

/// Table holding the product catalog on the hosted database.
pub const PRODUCTS_TABLE: &str = "allproducts";

/// REST client for the hosted database's table endpoint. Built once at
/// startup from public configuration and shared across requests.
pub struct TableClient {
    rest_url: Url,
    anon_key: String,
    http: reqwest::Client,
}

impl TableClient {
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        let rest_url = Url::parse(&config.supabase_url)
            .and_then(|base| base.join("rest/v1/"))
            .map_err(|e| StoreError::Other(format!("invalid database URL: {}", e)))?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            rest_url,
            anon_key: config.supabase_anon_key.clone(),
            http,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.rest_url
            .join(table)
            .map_err(|e| StoreError::Other(format!("invalid table name {:?}: {}", table, e)))
    }

    /// `select *` against one table. A non-success response from the REST
    /// layer becomes `StoreError::Query` carrying the service's message;
    /// anything that prevents a decoded response surfaces as a transport
    /// fault.
    pub async fn select_all(&self, table: &str) -> Result<Vec<ProductRow>, StoreError> {
        let response = self
            .http
            .get(self.table_url(table)?)
            .query(&[("select", "*")])
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.into_message(status.as_u16()),
                Err(_) => format!("table query failed with HTTP status {}", status.as_u16()),
            };
            return Err(StoreError::Query { message });
        }

        let body: Value = response.json().await?;
        rows_from_value(body)
    }
}

#[async_trait]
impl ProductSource for TableClient {
    async fn fetch_all(&self) -> Result<Vec<ProductRow>, StoreError> {
        self.select_all(PRODUCTS_TABLE).await
    }
}
