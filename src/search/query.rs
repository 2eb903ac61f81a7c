//! Input normalization ahead of any network activity.

use std::fmt;

/// Trimmed, non-empty search text.
///
/// Only constructible through [`SearchQuery::new`] or
/// [`QueryValidator::normalize`], so holding one proves there is something
/// to search for. Transport-safe encoding is the request builder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` when `raw` is empty or whitespace only.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of normalizing raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Query(SearchQuery),
    /// Nothing to search for. A routine condition, not a failure.
    Empty,
}

pub struct QueryValidator;

impl QueryValidator {
    pub fn normalize(raw: &str) -> Normalized {
        match SearchQuery::new(raw) {
            Some(query) => Normalized::Query(query),
            None => Normalized::Empty,
        }
    }
}
