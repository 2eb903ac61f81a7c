//! The network step behind a trait so the service can run against stubs.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use std::error::Error as _;
use std::time::Duration;

use crate::config::SearchConfig;

use super::error::TransportError;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET and returns whatever came back.
///
/// Implementations report network-level failures only. Status handling and
/// decoding belong to the caller.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport used by the binary.
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &SearchConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    fn classify(&self, url: &Url, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            TransportError::Connect {
                host: url.host_str().unwrap_or("unknown host").to_string(),
                reason: root_cause(&err),
            }
        } else {
            TransportError::Request(root_cause(&err))
        }
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status().as_u16();
        tracing::debug!(status, "HTTP status received");

        let body = response.bytes().await.map_err(|e| self.classify(url, e))?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

/// Innermost error message; reqwest's own `Display` only says which URL failed.
fn root_cause(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message = inner.to_string();
        source = inner.source();
    }
    message
}
