use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the outbound search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint; the query is appended as the `q` parameter.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Sent as `User-Agent`. GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Terminal UI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Run a search on every text edit, not only on Enter.
    #[serde(default)]
    pub live_search: bool,
    /// Redraw interval for the loading spinner, in milliseconds (default: 100).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_endpoint() -> String {
    "https://api.github.com/search/users".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_agent() -> String {
    format!("ghsearch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate() -> u64 {
    100
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            live_search: false,
            tick_rate_ms: default_tick_rate(),
        }
    }
}
