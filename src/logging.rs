//! Tracing subscriber setup.
//!
//! The interactive screen owns the terminal, so it logs to a file; one-shot
//! mode logs to stderr. Both honour `RUST_LOG` and default to `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .init();
}

pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// `<data dir>/ghsearch/ghsearch.log`, falling back to the current directory.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("ghsearch").join("ghsearch.log")
}
