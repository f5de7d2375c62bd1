//! HTTP transport underneath the gateway.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;

/// A fully prepared request, ready to leave the process.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,

    /// Path relative to the API base URL, e.g. `/products/3`.
    pub path: String,

    pub query: Vec<(String, String)>,

    pub headers: HeaderMap,

    pub body: Option<Value>,
}

/// Raw response as received from the backend.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("could not connect to backend")]
    Connect(#[source] reqwest::Error),

    #[error("http error")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else if error.is_connect() {
            Self::Connect(error)
        } else {
            Self::Http(error)
        }
    }
}

#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and return whatever the backend answered, success or
    /// not. Only failures to obtain a response are errors.
    async fn execute(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: Client,
}

impl HttpTransport {
    /// Build a transport for `config`, bounding every request by its timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::with_timeout(&config.base_url, config.timeout)
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialised.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, self.url(&request.path))
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    fn get(path: &str) -> OutgoingRequest {
        OutgoingRequest {
            method: Method::GET,
            path: path.to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[test]
    fn url_joins_base_and_path() -> TestResult {
        let transport =
            HttpTransport::with_timeout("http://localhost:8080/api/", Duration::from_secs(1))?;

        assert_eq!(transport.base_url(), "http://localhost:8080/api");
        assert_eq!(
            transport.url("/products/3"),
            "http://localhost:8080/api/products/3"
        );
        assert_eq!(transport.url("categories"), "http://localhost:8080/api/categories");

        Ok(())
    }

    #[tokio::test]
    async fn unresponsive_backend_times_out() -> TestResult {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Accept connections but never answer them.
        let server = tokio::spawn(async move {
            let mut held = Vec::new();

            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport =
            HttpTransport::with_timeout(&format!("http://{addr}"), Duration::from_millis(200))?;

        let result = transport.execute(get("/products")).await;

        server.abort();

        assert!(
            matches!(result, Err(TransportError::Timeout(_))),
            "expected a timeout, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn refused_connection_is_a_connect_error() -> TestResult {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        drop(listener);

        let transport =
            HttpTransport::with_timeout(&format!("http://{addr}"), Duration::from_secs(2))?;

        let result = transport.execute(get("/products")).await;

        assert!(
            matches!(result, Err(TransportError::Connect(_))),
            "expected a connect error, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_returned_not_raised() -> TestResult {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buffer = [0_u8; 1024];
                let _read = socket.read(&mut buffer).await;
                let body = r#"{"message":"boom"}"#;
                let response = format!(
                    "HTTP/1.1 500 Internal Server Error\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _written = socket.write_all(response.as_bytes()).await;
            }
        });

        let transport =
            HttpTransport::with_timeout(&format!("http://{addr}"), Duration::from_secs(2))?;

        let response = transport.execute(get("/orders")).await?;

        server.await?;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, br#"{"message":"boom"}"#);

        Ok(())
    }
}
