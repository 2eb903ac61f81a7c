//! Scripted in-process transport for driving `SearchService` without a socket.

#![allow(dead_code)]

use async_trait::async_trait;
use ghsearch::search::{OutcomeSubscription, SearchOutcome, SearchTransport, TransportError, TransportResponse};
use parking_lot::Mutex;
use reqwest::Url;
use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;
use tokio::sync::oneshot;

enum Reply {
    Response(TransportResponse),
    Error(TransportError),
}

struct Step {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Replies are queued per search term and consumed in order.
#[derive(Default)]
pub struct StubTransport {
    script: Mutex<HashMap<String, VecDeque<Step>>>,
    calls: Mutex<Vec<String>>,
    seen_during_call: Mutex<Vec<SearchOutcome>>,
    observer: OnceLock<OutcomeSubscription>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, term: &str, body: &str) {
        self.push(term, Reply::Response(TransportResponse::new(200, body)), None);
    }

    pub fn reply_status(&self, term: &str, status: u16, body: &str) {
        self.push(term, Reply::Response(TransportResponse::new(status, body)), None);
    }

    pub fn reply_error(&self, term: &str, err: TransportError) {
        self.push(term, Reply::Error(err), None);
    }

    /// Reply is held back until the returned sender fires (or is dropped).
    pub fn reply_json_gated(&self, term: &str, body: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(term, Reply::Response(TransportResponse::new(200, body)), Some(rx));
        tx
    }

    /// Record the published outcome at the moment each request is made.
    pub fn observe(&self, subscription: OutcomeSubscription) {
        let _ = self.observer.set(subscription);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn seen_during_call(&self) -> Vec<SearchOutcome> {
        self.seen_during_call.lock().clone()
    }

    fn push(&self, term: &str, reply: Reply, gate: Option<oneshot::Receiver<()>>) {
        self.script
            .lock()
            .entry(term.to_string())
            .or_default()
            .push_back(Step { reply, gate });
    }
}

#[async_trait]
impl SearchTransport for StubTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let term = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();

        self.calls.lock().push(term.clone());
        if let Some(observer) = self.observer.get() {
            self.seen_during_call.lock().push(observer.current());
        }

        let step = {
            let mut script = self.script.lock();
            script.get_mut(&term).and_then(|steps| steps.pop_front())
        };
        let Some(step) = step else {
            return Err(TransportError::Request(format!("no scripted reply for '{}'", term)));
        };

        if let Some(gate) = step.gate {
            let _ = gate.await;
        }

        match step.reply {
            Reply::Response(response) => Ok(response),
            Reply::Error(err) => Err(err),
        }
    }
}
