//! Fetch-decode-publish cycle behind `search(raw)`.
//!
//! Every invocation takes a sequence number under the outcome channel's
//! lock. A completion only publishes if its number is still the latest, so
//! a slow response can never overwrite a newer one. Starting a new
//! invocation also aborts the previous task, dropping its request.

use parking_lot::Mutex;
use reqwest::Url;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::config::SearchConfig;

use super::error::{SearchError, TransportError};
use super::model::{decode_items, SearchResultItem};
use super::outcome::{OutcomeSubscription, SearchOutcome};
use super::query::{Normalized, QueryValidator, SearchQuery};
use super::transport::{HttpTransport, SearchTransport};

pub struct SearchService {
    transport: Arc<dyn SearchTransport>,
    endpoint: String,
    state: Arc<watch::Sender<SearchOutcome>>,
    latest: Arc<AtomicU64>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl SearchService {
    pub fn new(transport: Arc<dyn SearchTransport>, endpoint: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SearchOutcome::Idle);
        Self {
            transport,
            endpoint: endpoint.into(),
            state: Arc::new(state),
            latest: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Service backed by [`HttpTransport`] against the configured endpoint.
    pub fn from_config(config: &SearchConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), config.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn subscribe(&self) -> OutcomeSubscription {
        OutcomeSubscription::new(self.state.subscribe())
    }

    pub fn current(&self) -> SearchOutcome {
        self.state.borrow().clone()
    }

    /// Starts a search for `raw` without blocking the caller.
    ///
    /// Blank input publishes `Idle` and makes no request. Otherwise `Loading`
    /// is published before this returns, and the request runs on a spawned
    /// task. Must be called from within a Tokio runtime.
    pub fn search(&self, raw: &str) -> SearchTicket {
        let mut in_flight = self.in_flight.lock();
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let query = match QueryValidator::normalize(raw) {
            Normalized::Query(query) => query,
            Normalized::Empty => {
                let sequence = self.begin(SearchOutcome::Idle);
                tracing::debug!(sequence, "Empty query, outcome reset to idle");
                return SearchTicket::settled(sequence);
            }
        };

        let sequence = self.begin(SearchOutcome::Loading);
        tracing::info!(sequence, query = %query, "Search started");

        let url = match build_request_url(&self.endpoint, &query) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(sequence, endpoint = %self.endpoint, error = %err, "Could not build search URL");
                publish_if_current(&self.state, &self.latest, sequence, failed(&err));
                return SearchTicket::settled(sequence);
            }
        };

        let transport = Arc::clone(&self.transport);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.latest);

        let task = tokio::spawn(async move {
            tracing::debug!(sequence, url = %url, "Sending search request");
            let outcome = match fetch(transport.as_ref(), &url).await {
                Ok(items) => {
                    tracing::info!(sequence, count = items.len(), "Search completed");
                    SearchOutcome::Success { items }
                }
                Err(err) => {
                    tracing::warn!(sequence, kind = err.kind(), error = %err, "Search failed");
                    failed(&err)
                }
            };
            publish_if_current(&state, &latest, sequence, outcome);
        });

        *in_flight = Some(task.abort_handle());
        SearchTicket {
            sequence,
            task: Some(task),
        }
    }

    /// Issues the next sequence number and publishes `outcome` atomically.
    fn begin(&self, outcome: SearchOutcome) -> u64 {
        let mut sequence = 0;
        self.state.send_modify(|current| {
            sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *current = outcome;
        });
        sequence
    }
}

impl Drop for SearchService {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.lock().take() {
            task.abort();
        }
    }
}

/// Handle on one `search` invocation.
///
/// Dropping it does not cancel anything; awaiting it is only needed when the
/// caller wants to know the invocation has settled.
pub struct SearchTicket {
    sequence: u64,
    task: Option<JoinHandle<()>>,
}

impl SearchTicket {
    fn settled(sequence: u64) -> Self {
        Self {
            sequence,
            task: None,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Resolves once the invocation has published, been discarded as stale,
    /// or been cancelled by a newer one.
    pub async fn wait(self) {
        let Some(task) = self.task else {
            return;
        };
        if let Err(err) = task.await {
            if err.is_cancelled() {
                tracing::debug!(sequence = self.sequence, "Search superseded before completion");
            } else {
                tracing::error!(sequence = self.sequence, error = %err, "Search task panicked");
            }
        }
    }
}

/// Appends the query as a percent-encoded `q` parameter.
pub fn build_request_url(endpoint: &str, query: &SearchQuery) -> Result<Url, SearchError> {
    let url = Url::parse_with_params(endpoint, &[("q", query.as_str())])
        .map_err(|_| SearchError::Encoding)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SearchError::Encoding);
    }
    Ok(url)
}

async fn fetch(
    transport: &dyn SearchTransport,
    url: &Url,
) -> Result<Vec<SearchResultItem>, SearchError> {
    let response = transport.get(url).await?;
    tracing::debug!(
        status = response.status,
        bytes = response.body.len(),
        "Search response received"
    );

    if !response.is_success() {
        return Err(SearchError::from_status(response.status, &response.body));
    }

    Ok(decode_items(&response.body)?)
}

fn failed(err: &SearchError) -> SearchOutcome {
    SearchOutcome::Failed {
        message: err.to_string(),
    }
}

/// Writes `outcome` only if `sequence` is still the latest issued.
fn publish_if_current(
    state: &watch::Sender<SearchOutcome>,
    latest: &AtomicU64,
    sequence: u64,
    outcome: SearchOutcome,
) -> bool {
    let published = state.send_if_modified(|current| {
        if latest.load(Ordering::SeqCst) != sequence {
            return false;
        }
        *current = outcome;
        true
    });
    if !published {
        tracing::debug!(sequence, "Discarding stale search completion");
    }
    published
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> SearchQuery {
        SearchQuery::new(raw).unwrap()
    }

    #[test]
    fn url_encodes_reserved_characters() {
        let url = build_request_url("https://api.github.com/search/users", &query("a b&c")).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/search/users?q=a+b%26c");

        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "q");
        assert_eq!(value, "a b&c");
    }

    #[test]
    fn url_keeps_existing_parameters() {
        let url = build_request_url("http://localhost:9/search/users?per_page=5", &query("x"))
            .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("per_page".to_string(), "5".to_string()),
                ("q".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn unusable_endpoint_is_an_encoding_error() {
        assert!(matches!(
            build_request_url("not a url", &query("x")),
            Err(SearchError::Encoding)
        ));
        assert!(matches!(
            build_request_url("mailto:someone@example.com", &query("x")),
            Err(SearchError::Encoding)
        ));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let (state, _rx) = watch::channel(SearchOutcome::Loading);
        let latest = AtomicU64::new(2);

        let stale = publish_if_current(
            &state,
            &latest,
            1,
            SearchOutcome::Failed {
                message: "old".into(),
            },
        );
        assert!(!stale);
        assert_eq!(*state.borrow(), SearchOutcome::Loading);

        let current = publish_if_current(&state, &latest, 2, SearchOutcome::Success { items: vec![] });
        assert!(current);
        assert_eq!(*state.borrow(), SearchOutcome::Success { items: vec![] });
    }
}
