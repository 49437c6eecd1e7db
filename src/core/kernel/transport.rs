use crate::core::config::TransportConfig;
use crate::core::errors::{KudaError, NO_CONNECTION_MESSAGE, NO_RESPONSE_MESSAGE};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{instrument, trace};

/// A fully built request, ready to hand to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Look up a header value, ignoring name case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code and raw body returned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection refused, DNS failure, no route
    #[error("connect failed: {0}")]
    Connect(String),

    /// Connect or read timeout
    #[error("timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for KudaError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connect(detail) => {
                Self::Connection(format!("{} ({})", NO_CONNECTION_MESSAGE, detail))
            }
            TransportError::Timeout(detail) => {
                Self::Connection(format!("{} ({})", NO_RESPONSE_MESSAGE, detail))
            }
            TransportError::Other(detail) => Self::Transport(detail),
        }
    }
}

/// Non-blocking transport: suspends the calling task for the round trip
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError>;
}

/// Blocking transport: occupies the calling thread for the round trip
pub trait BlockingTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        (**self).send(request).await
    }
}

impl<T: BlockingTransport + ?Sized> BlockingTransport for Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        (**self).send(request)
    }
}

fn classify(err: &reqwest::Error) -> TransportError {
    // connect timeouts report both flags; they count as "no response"
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

fn encode_body(body: Option<&Value>) -> Result<Option<Vec<u8>>, TransportError> {
    body.map(|value| {
        serde_json::to_vec(value).map_err(|e| {
            TransportError::Other(format!("Failed to serialize request body: {}", e))
        })
    })
    .transpose()
}

/// `Transport` backed by an async `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, KudaError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| KudaError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = encode_body(request.body.as_ref())? {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| classify(&e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| classify(&e))?;

        trace!(status, bytes = body.len(), "response received");
        Ok(HttpReply::new(status, body.to_vec()))
    }
}

/// `BlockingTransport` backed by `reqwest::blocking::Client`.
///
/// Must not be created or dropped from inside an async runtime.
#[derive(Clone, Debug)]
pub struct ReqwestBlockingTransport {
    client: reqwest::blocking::Client,
    config: TransportConfig,
}

impl ReqwestBlockingTransport {
    pub fn new(config: TransportConfig) -> Result<Self, KudaError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| KudaError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl BlockingTransport for ReqwestBlockingTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = encode_body(request.body.as_ref())? {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(|e| classify(&e))?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| classify(&e))?;

        trace!(status, bytes = body.len(), "response received");
        Ok(HttpReply::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_timeout_collapse_to_connection_error() {
        let connect: KudaError = TransportError::Connect("dns error".to_string()).into();
        let timeout: KudaError = TransportError::Timeout("read timed out".to_string()).into();

        match (connect, timeout) {
            (KudaError::Connection(a), KudaError::Connection(b)) => {
                assert!(a.starts_with(NO_CONNECTION_MESSAGE));
                assert!(b.starts_with(NO_RESPONSE_MESSAGE));
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_other_failures_stay_transport_errors() {
        let err: KudaError = TransportError::Other("builder error".to_string()).into();
        assert!(matches!(err, KudaError::Transport(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::POST,
            url: "http://localhost".to_string(),
            headers: vec![("authorization".to_string(), "Bearer t".to_string())],
            body: None,
        };
        assert_eq!(request.header("Authorization"), Some("Bearer t"));
        assert_eq!(request.header("accept"), None);
    }

    #[test]
    fn test_reply_text_is_lossy() {
        let reply = HttpReply::new(200, b"abc123".to_vec());
        assert_eq!(reply.text(), "abc123");
    }
}
