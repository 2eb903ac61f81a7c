//! Configuration for the search client and terminal UI.
//!
//! Loaded from TOML; every field has a default so a missing or partial
//! file is valid.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SearchConfig, UiConfig};
