//! State for the search screen.

use crate::search::SearchOutcome;
use crate::ui::mvi::UiState;

/// Shown before anything has been searched, or after clearing.
pub const IDLE_HINT: &str = "Search for GitHub users";

/// Shown when a search succeeded with zero items.
pub const NO_MATCHES_HINT: &str = "No users found";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchScreenState {
    /// Text in the search bar.
    pub input: String,
    /// Mirror of the last outcome the service published.
    pub outcome: SearchOutcome,
    /// Highlighted row in the result list.
    pub selected: usize,
    /// Spinner frame while loading.
    pub spinner_tick: u8,
}

impl UiState for SearchScreenState {}

impl SearchScreenState {
    /// Guidance text for the body when there is nothing else to show.
    ///
    /// `Idle` and an empty `Success` get different hints: the first means
    /// nothing was asked, the second that nothing matched.
    pub fn placeholder(&self) -> Option<&'static str> {
        match &self.outcome {
            SearchOutcome::Idle => Some(IDLE_HINT),
            SearchOutcome::Success { items } if items.is_empty() => Some(NO_MATCHES_HINT),
            _ => None,
        }
    }

    pub fn selected_item(&self) -> Option<&crate::search::SearchResultItem> {
        self.outcome.items().get(self.selected)
    }
}
