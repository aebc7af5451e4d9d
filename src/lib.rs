//! apod-gallery - terminal gallery for the daily astronomy picture feed
//!
//! Fetches a static JSON feed of astronomy items, shows them as cards,
//! opens a detail modal for image cards, and keeps a persisted light/dark
//! theme. A random space fact greets each session.
//!
//! # Modules
//!
//! - `models` - Feed item and media type
//! - `api` - Feed client
//! - `app` - State machine: gallery, modal, theme
//! - `controller` - Runs the state machine's effects
//! - `ui` - TUI components
//! - `prefs` - Persisted preferences (theme)
//! - `facts` - Random space facts

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod facts;
pub mod logging;
pub mod models;
pub mod prefs;
pub mod ui;

// Re-export commonly used types
pub use models::{FeedItem, MediaType};

pub use api::{FeedClient, FetchError};
pub use app::{App, ClickTarget, Effect, Event};
pub use controller::Controller;
pub use prefs::ThemeMode;
