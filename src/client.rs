//! Query client for the metrics backend.
//!
//! Issues the fixed instant query against a Prometheus-compatible endpoint
//! and parses the response into a [`MetricSnapshot`]. The query expression
//! is a compile-time constant; this viewer is not a configurable dashboard.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::data::{MetricSnapshot, QueryResponse};

/// The fixed query expression this viewer displays.
pub const QUERY_EXPR: &str = "bigip_cpu_usage";

/// Instant query path on the backend.
const QUERY_PATH: &str = "/api/v1/query";

/// Errors that can occur during one poll.
///
/// All variants are handled identically by the poller (logged, display state
/// unchanged); the classification exists for the operational log.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Request reached the backend but the status was not a success.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Body was not JSON or lacked the expected `data.result` path.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Could not connect to the backend.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for a response.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QueryError::Timeout
        } else if err.is_connect() {
            QueryError::Connection(err.to_string())
        } else {
            QueryError::Http(err.to_string())
        }
    }
}

/// A backend that can execute the fixed instant query.
///
/// [`QueryClient`] is the real implementation; tests substitute fakes to
/// drive the poller without a network.
pub trait InstantQuery: Send + Sync + 'static {
    /// Execute one query and return the full snapshot.
    fn fetch(&self) -> impl Future<Output = Result<MetricSnapshot, QueryError>> + Send;

    /// Human-readable target description for the status bar.
    fn target(&self) -> String;
}

/// HTTP client for the query endpoint.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: Client,
    endpoint: String,
}

impl QueryClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> QueryClientBuilder {
        QueryClientBuilder::default()
    }

    /// The full query URL (without the query-string parameter).
    fn query_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), QUERY_PATH)
    }

    /// Execute one instant query and parse `data.result`.
    pub async fn fetch_snapshot(&self) -> Result<MetricSnapshot, QueryError> {
        let response = self
            .client
            .get(self.query_url())
            .query(&[("query", QUERY_EXPR)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QueryError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let body: QueryResponse =
            serde_json::from_str(&text).map_err(|e| QueryError::Parse(e.to_string()))?;

        Ok(body.data.result)
    }
}

impl InstantQuery for QueryClient {
    fn fetch(&self) -> impl Future<Output = Result<MetricSnapshot, QueryError>> + Send {
        self.fetch_snapshot()
    }

    fn target(&self) -> String {
        format!("{}?query={}", self.query_url(), QUERY_EXPR)
    }
}

/// Builder for [`QueryClient`].
#[derive(Debug, Default)]
pub struct QueryClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl QueryClientBuilder {
    /// Set the backend base URL (e.g. "http://prometheus:9090").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> QueryClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        QueryClient {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| crate::config::DEFAULT_ENDPOINT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = QueryClient::builder().build();
        assert_eq!(client.endpoint, "http://prometheus:9090");
    }

    #[test]
    fn test_query_url() {
        let client = QueryClient::builder()
            .endpoint("http://metrics.local:9090")
            .build();
        assert_eq!(client.query_url(), "http://metrics.local:9090/api/v1/query");
    }

    #[test]
    fn test_query_url_strips_trailing_slash() {
        let client = QueryClient::builder()
            .endpoint("http://metrics.local:9090/")
            .build();
        assert_eq!(client.query_url(), "http://metrics.local:9090/api/v1/query");
    }

    #[test]
    fn test_target_includes_fixed_expression() {
        let client = QueryClient::builder().build();
        assert_eq!(
            client.target(),
            "http://prometheus:9090/api/v1/query?query=bigip_cpu_usage"
        );
    }
}
