//! Published search state and the read-only handle on it.

use tokio::sync::watch;

use super::model::SearchResultItem;

/// The single current result of the latest search invocation.
///
/// Each transition replaces the previous value wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    /// Nothing searched yet, or the query was cleared.
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// Completed; may be empty, meaning no matches.
    Success { items: Vec<SearchResultItem> },

    /// Could not complete or decode.
    Failed { message: String },
}

impl SearchOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Result items, empty for every state but `Success`.
    pub fn items(&self) -> &[SearchResultItem] {
        match self {
            Self::Success { items } => items,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Short state name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success { .. } => "success",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Observer of the current [`SearchOutcome`].
///
/// Holds latest-value semantics: a slow reader sees the newest state, not
/// every intermediate one. Cloning gives an independent subscriber.
#[derive(Clone)]
pub struct OutcomeSubscription {
    rx: watch::Receiver<SearchOutcome>,
}

impl OutcomeSubscription {
    pub(crate) fn new(rx: watch::Receiver<SearchOutcome>) -> Self {
        Self { rx }
    }

    pub fn current(&self) -> SearchOutcome {
        self.rx.borrow().clone()
    }

    /// Waits for the next published outcome.
    ///
    /// Returns `None` once the owning service is gone.
    pub async fn changed(&mut self) -> Option<SearchOutcome> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
