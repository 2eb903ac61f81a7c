//! The single search screen: input bar, result list, guidance text.

mod intent;
mod reducer;
mod state;

pub use intent::SearchScreenIntent;
pub use reducer::SearchScreenReducer;
pub use state::{SearchScreenState, IDLE_HINT, NO_MATCHES_HINT};
