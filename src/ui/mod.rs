//! Terminal presentation layer.
//!
//! Owns nothing but screen state. All search state comes from the
//! [`SearchService`](crate::search::SearchService) subscription.

pub mod events;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
