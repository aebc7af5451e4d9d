//! Persisted user preferences
//!
//! A flat string key/value store, the terminal stand-in for browser local
//! storage. The only key in use is `darkMode`.
//! Stored at ~/.config/apod-gallery/preferences.toml

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Storage key for the theme preference
pub const DARK_MODE_KEY: &str = "darkMode";

/// Stored value selecting the dark theme
pub const DARK_MODE_ENABLED: &str = "enabled";

/// Stored value selecting the light theme
pub const DARK_MODE_DISABLED: &str = "disabled";

// =============================================================================
// Theme Mode
// =============================================================================

/// Light/dark theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Decode a stored value. Only `"enabled"` selects dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_MODE_ENABLED) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Value written back to storage
    pub fn stored_value(&self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_MODE_ENABLED,
            ThemeMode::Light => DARK_MODE_DISABLED,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Indicator glyph on the toggle control: sun while dark is active
    pub fn indicator(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀️",
            ThemeMode::Light => "🌙",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

// =============================================================================
// Preference Stores
// =============================================================================

/// Durable string key/value storage
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read the theme preference from a store
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeMode {
    ThemeMode::from_stored(store.get(DARK_MODE_KEY).as_deref())
}

/// Write the theme preference to a store
pub fn save_theme(store: &mut dyn PreferenceStore, mode: ThemeMode) -> Result<()> {
    store.set(DARK_MODE_KEY, mode.stored_value())
}

/// Preferences kept in a toml file, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Default location (~/.config/apod-gallery/preferences.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("apod-gallery").join("preferences.toml"))
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self> {
        let path = Self::default_path().context("Could not determine preferences path")?;
        Ok(Self::open(path))
    }

    /// Open a store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| match toml::from_str(&s) {
                Ok(values) => Some(values),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
                    None
                }
            })
            .unwrap_or_default();
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory store, used in tests and when no config directory exists
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one entry
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
