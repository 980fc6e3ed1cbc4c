//! HTTP client for the indexing and query services.

mod client;
mod types;

pub use client::{ApiError, BackendClient, Endpoints};
pub use types::{QueryRequest, QueryResponse};
