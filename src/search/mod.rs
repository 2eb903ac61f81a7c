//! GitHub user search: validate, fetch, decode, publish.
//!
//! ```text
//! search(raw) ──→ QueryValidator ──→ Loading ──→ SearchTransport::get
//!                      │                               │
//!                      └──→ Idle          Success | Failed (latest only)
//! ```

mod error;
mod model;
mod outcome;
mod query;
mod service;
mod transport;

pub use error::{DecodeError, SearchError, TransportError};
pub use model::{decode_items, SearchResultItem};
pub use outcome::{OutcomeSubscription, SearchOutcome};
pub use query::{Normalized, QueryValidator, SearchQuery};
pub use service::{build_request_url, SearchService, SearchTicket};
pub use transport::{HttpTransport, SearchTransport, TransportResponse};
