pub mod args;
pub mod config;
pub mod logging;
pub mod search;
pub mod ui;
