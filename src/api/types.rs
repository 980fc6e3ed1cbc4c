//! Request/response types for the query service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /query`.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
}

/// Body of a successful `POST /query` response.
///
/// Only `result` is guaranteed; `dsl` is the backend's opaque query plan,
/// kept around for display only and never interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dsl: Option<Value>,
    pub result: Value,
}
