//! Intents for the search screen.

use crate::search::SearchOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchScreenIntent {
    /// Typed character appended to the input.
    InsertChar(char),
    /// Pasted text appended to the input; newlines are dropped.
    InsertText(String),
    Backspace,
    /// Empty the input. The runtime also asks the service to go idle.
    Clear,
    MoveUp,
    MoveDown,
    /// Spinner animation tick.
    Tick,
    /// The service published a new outcome.
    OutcomeChanged(SearchOutcome),
}

impl SearchScreenIntent {
    /// Whether the intent changes the input text (drives live search).
    pub fn edits_text(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::InsertText(_) | Self::Backspace | Self::Clear
        )
    }
}

impl Intent for SearchScreenIntent {}
