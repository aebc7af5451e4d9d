//! Configuration management for apod-gallery
//!
//! Handles config file loading. The file is edited by hand.
//! Config is stored at ~/.config/apod-gallery/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::FEED_URL;

/// Log filter used when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feed location override (mirrors, local testing)
    pub feed_url: Option<String>,
    /// tracing filter directive, e.g. "debug" or "apod_gallery=trace"
    pub log_level: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/apod-gallery/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("apod-gallery").join("config.toml"))
    }

    /// Load config from the default file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from `path`, or return default if missing or malformed
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Feed URL with fallback to the fixed endpoint
    pub fn feed_url(&self) -> &str {
        self.feed_url.as_deref().unwrap_or(FEED_URL)
    }

    /// Log filter with fallback to the default level
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
