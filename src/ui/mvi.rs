//! Model-View-Intent primitives for the terminal screen.
//!
//! ```text
//! key / outcome ──→ Intent ──→ Reducer ──→ State ──→ draw
//! ```
//!
//! Reducers are pure. Side effects (starting a search) stay in the runtime,
//! which feeds published outcomes back in as intents.

/// Everything `draw` needs to paint one frame.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or a system event addressed to one screen.
pub trait Intent: Send + 'static {}

/// The only place screen state changes: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
