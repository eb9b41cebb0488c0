//! HTTP client creation and the transport seam used by the request executor

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::error::TransportError;

/// Creates an HTTP client with connection pooling and a per-request timeout.
///
/// # Features
/// * Configurable timeout for requests (default: 10 seconds, configurable via config/env)
/// * Connection pooling with centralized pool size configuration
/// * Retries for transport failures live in the executor, not here
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Status and body of a response that made it back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Only read for 200 responses; empty otherwise.
    pub body: String,
}

/// A single GET round trip. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout_seconds: u64) -> Result<Self, reqwest::Error> {
        create_http_client_with_timeout(timeout_seconds).map(Self::new)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(url, &e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(RawResponse {
                status,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(url, &e))?;

        Ok(RawResponse { status, body })
    }
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_transport_returns_body_on_200() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("X-Riot-Token", "RGAPI-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1,2]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(create_test_http_client());
        let mut headers = HeaderMap::new();
        headers.insert("X-Riot-Token", HeaderValue::from_static("RGAPI-test"));

        let response = transport
            .get(&format!("{}/ping", mock_server.uri()), &headers)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "[1,2]");
    }

    #[tokio::test]
    async fn test_transport_skips_body_on_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"status\":404}"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new(create_test_http_client());
        let response = transport
            .get(&format!("{}/missing", mock_server.uri()), &HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_transport_connection_refused_is_error() {
        // Bind and drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new(create_test_http_client());
        let result = transport
            .get(&format!("http://{addr}/anything"), &HeaderMap::new())
            .await;

        assert!(matches!(result, Err(TransportError::Connect { .. })));
    }
}
