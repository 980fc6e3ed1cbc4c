//! Client for the indexing and query services.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{QueryRequest, QueryResponse};

/// Errors from the service boundary. Rendering itself never fails; these
/// are always recoverable by the user resubmitting.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error ({0})")]
    Status(u16),
    #[error("{0}")]
    Rejected(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("cannot connect to {0}")]
    Connection(String),
    #[error("failed to read {0}: {1}")]
    File(String, std::io::Error),
}

/// Service base URLs. Passed in at construction; nothing in this module
/// falls back to a compiled-in address.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub query_url: String,
    pub ingest_url: String,
}

/// HTTP client for both backend services.
pub struct BackendClient {
    client: Client,
    endpoints: Endpoints,
}

impl BackendClient {
    /// Create a new client. Query requests run an LLM-backed planner on the
    /// server side, so the request timeout is generous.
    pub fn new(endpoints: Endpoints) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self { client, endpoints })
    }

    /// Submit a natural-language question to the query service.
    pub async fn ask(&self, question: &str) -> Result<QueryResponse, ApiError> {
        let url = join_url(&self.endpoints.query_url, "query");
        debug!(%url, "submitting question");

        let response = self
            .client
            .post(&url)
            .json(&QueryRequest { question })
            .send()
            .await
            .map_err(|e| classify_send_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "query rejected");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Upload a CSV file to the indexing service as a multipart form with a
    /// single `file` field. The success body is whatever JSON the service
    /// answers with, displayed verbatim as confirmation.
    pub async fn ingest_csv(&self, path: &Path) -> Result<serde_json::Value, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::File(path.display().to_string(), e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .map_err(ApiError::Http)?;
        let form = Form::new().part("file", part);

        let url = join_url(&self.endpoints.ingest_url, "ingest_csv");
        debug!(%url, path = %path.display(), "uploading csv");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| classify_send_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            // The indexing service puts the failure reason in the body.
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "upload rejected");
            if body.trim().is_empty() {
                return Err(ApiError::Status(status.as_u16()));
            }
            return Err(ApiError::Rejected(body));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Probe the query service's health endpoint.
    pub async fn health(&self) -> bool {
        let url = join_url(&self.endpoints.query_url, "health");
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

}

fn classify_send_error(error: reqwest::Error, url: &str) -> ApiError {
    if error.is_connect() {
        ApiError::Connection(url.to_string())
    } else {
        ApiError::Http(error)
    }
}

/// Join a base URL and a path segment without doubling slashes.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_trailing_slashes() {
        assert_eq!(join_url("http://localhost:8004", "query"), "http://localhost:8004/query");
        assert_eq!(join_url("http://localhost:8004/", "query"), "http://localhost:8004/query");
    }

    #[test]
    fn client_builds_from_endpoints() {
        let client = BackendClient::new(Endpoints {
            query_url: "http://127.0.0.1:8004".into(),
            ingest_url: "http://127.0.0.1:8001".into(),
        });
        assert!(client.is_ok());
    }

    #[test]
    fn missing_file_surfaces_the_path_in_the_error() {
        let client = BackendClient::new(Endpoints {
            query_url: "http://127.0.0.1:1".into(),
            ingest_url: "http://127.0.0.1:1".into(),
        })
        .unwrap();

        let err = tokio_test::block_on(
            client.ingest_csv(Path::new("/definitely/not/here.csv")),
        )
        .unwrap_err();

        match err {
            ApiError::File(path, _) => assert!(path.contains("not/here.csv")),
            other => panic!("expected a file error, got {other}"),
        }
    }
}
