use std::error::Error as StdError;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::product_catalog::model::ProductRow;

// Error types
#[derive(Debug)]
pub enum StoreError {
    /// The hosted REST layer answered the query with an error response.
    Query { message: String },
    /// The request never produced a usable response (connectivity,
    /// malformed body, TLS, ...).
    Transport(reqwest::Error),
    Other(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Query { message } => write!(f, "Query error: {}", message),
            StoreError::Transport(e) => write!(f, "Transport error: {}", e),
            StoreError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl StdError for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        StoreError::Transport(error)
    }
}

impl StoreError {
    /// Message forwarded to clients in the error envelope's `details` field.
    pub fn details(&self) -> String {
        match self {
            StoreError::Query { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

// Error body returned by the hosted REST layer on a failed query.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    message: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self, http_status: u16) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("table query failed with HTTP status {}", http_status))
    }
}

// Convert a decoded response body to rows. The hosted service answers a
// select with either a JSON array of objects or `null`; `null` means no rows.
pub(crate) fn rows_from_value(body: Value) -> Result<Vec<ProductRow>, StoreError> {
    match body {
        Value::Null => Ok(Vec::new()),
        other => serde_json::from_value(other).map_err(|e| {
            StoreError::Other(format!("unexpected response shape from product table: {}", e))
        }),
    }
}
