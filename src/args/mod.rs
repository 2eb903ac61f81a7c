//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Parser)]
#[command(name = "ghsearch", version, about = "Search GitHub users from the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the search endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Search on every keystroke, not only on Enter
    #[arg(long)]
    pub live: bool,

    /// Run one search, print the result and exit
    #[arg(long, short, value_name = "TEXT")]
    pub query: Option<String>,

    /// With --query, print results as JSON
    #[arg(long, requires = "query")]
    pub json: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Flags win over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = endpoint.clone();
        }
        if self.live {
            config.ui.live_search = true;
        }
    }
}
