//! Error taxonomy for one search invocation.
//!
//! None of these reach the presentation layer as errors: the service turns
//! each into `SearchOutcome::Failed` carrying the `Display` text.

use reqwest::StatusCode;
use thiserror::Error;

use super::model::api_error_message;

/// Failures of the network step itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Request exceeded the configured timeout
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Could not open a connection
    #[error("could not connect to {host}: {reason}")]
    Connect { host: String, reason: String },

    /// Anything else: TLS, protocol, body read
    #[error("request failed: {0}")]
    Request(String),
}

/// Response body did not match the expected schema.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("duplicate result id {0}")]
    DuplicateId(u64),
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// Nothing to search for; mapped to `Idle`, never shown.
    #[error("empty query")]
    EmptyQuery,

    /// The query could not be made transport-safe
    #[error("invalid query")]
    Encoding,

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Server answered with a non-2xx status
    #[error("search failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode search response: {0}")]
    Decode(#[from] DecodeError),
}

impl SearchError {
    /// Builds a `Status` error, preferring the server's own message.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = api_error_message(body).unwrap_or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unexpected response")
                .to_string()
        });
        SearchError::Status { status, message }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "empty_query",
            SearchError::Encoding => "encoding",
            SearchError::Transport(_) => "transport",
            SearchError::Status { .. } => "status",
            SearchError::Decode(_) => "decode",
        }
    }
}
