//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive runs log to a file under the
//! user's data directory. CLI runs log to stderr.
//!
//! The filter comes from `RUST_LOG` when set, else from the config's
//! `log_level`.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file (TUI mode)
    File(PathBuf),
    /// Write to stderr (CLI mode)
    Stderr,
}

/// Default log file (~/.local/share/apod-gallery/apod-gallery.log)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("apod-gallery").join("apod-gallery.log"))
}

/// Build the filter: RUST_LOG wins over the configured level
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Open the log file for appending, creating its directory
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Install the global subscriber
///
/// Logging is optional: when the log file cannot be opened the app runs
/// without a subscriber. Only the first successful call takes effect.
pub fn init_logging(target: LogTarget, level: &str) {
    let filter = env_filter(level);

    match target {
        LogTarget::File(path) => {
            let Ok(file) = open_log_file(&path) else {
                return;
            };

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
