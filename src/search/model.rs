//! Response schema and the decode boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::DecodeError;

/// One matched user.
///
/// Wire names (`login`, `avatar_url`) are translated here; nothing past
/// this type sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    id: u64,
    #[serde(rename = "login")]
    handle: String,
    /// Not validated. May be malformed or unreachable.
    #[serde(rename = "avatar_url")]
    avatar_image_url: String,
}

impl SearchResultItem {
    pub fn new(id: u64, handle: impl Into<String>, avatar_image_url: impl Into<String>) -> Self {
        Self {
            id,
            handle: handle.into(),
            avatar_image_url: avatar_image_url.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn avatar_image_url(&self) -> &str {
        &self.avatar_image_url
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchResultItem>,
}

/// Error body GitHub returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Decodes a search response body into its items, in server order.
///
/// Extra fields are ignored. Ids must be unique within the payload.
pub fn decode_items(body: &[u8]) -> Result<Vec<SearchResultItem>, DecodeError> {
    let response: SearchResponse = serde_json::from_slice(body)?;

    let mut seen = HashSet::with_capacity(response.items.len());
    for item in &response.items {
        if !seen.insert(item.id) {
            return Err(DecodeError::DuplicateId(item.id));
        }
    }

    Ok(response.items)
}

/// Pulls the `message` field out of an error body, if it has one.
pub(crate) fn api_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
