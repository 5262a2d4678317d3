// A row from the hosted `allproducts` table.
//
// The table's schema is owned by the external database service and is not
// declared here: handlers pass rows through without reading any column, so
// a row is just a mapping of column name to JSON value.

pub type ProductRow = serde_json::Map<String, serde_json::Value>;
