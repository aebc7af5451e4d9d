//! CLI - Command Line Interface for apod-gallery
//!
//! Running without a subcommand opens the interactive gallery. Subcommands
//! cover the same operations for scripting; output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! apod-gallery fetch --limit 5 --json
//! apod-gallery fetch --media-type video
//! apod-gallery fact
//! apod-gallery theme toggle
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::MediaType;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments (clap parse errors also exit with 2)
    InvalidArgs = 2,
    /// Network error (transport, HTTP status or malformed feed)
    NetworkError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// apod-gallery - browse the daily astronomy picture feed
///
/// Run without arguments to launch the interactive gallery.
/// Use subcommands for scripting.
#[derive(Parser, Debug)]
#[command(
    name = "apod-gallery",
    version,
    about = "Terminal gallery for the daily astronomy picture feed",
    after_help = "EXAMPLES:\n\
                  apod-gallery                        Launch interactive gallery\n\
                  apod-gallery fetch -l 5             Print the first five items\n\
                  apod-gallery fact                   Print a random space fact\n\
                  apod-gallery theme toggle           Flip the saved theme"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Override the feed URL
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the feed and print its items
    #[command(visible_alias = "f")]
    Fetch(FetchCmd),

    /// Print a random space fact
    Fact,

    /// Show or toggle the saved light/dark theme
    Theme(ThemeCmd),
}

/// Fetch the feed and print its items
#[derive(Args, Debug)]
pub struct FetchCmd {
    /// Maximum number of items
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Only print items of this media type
    #[arg(long, short = 't', value_enum)]
    pub media_type: Option<MediaTypeFilter>,
}

/// Media type filter for fetch
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTypeFilter {
    /// Images (and anything that is not a video)
    Image,
    /// Videos only
    Video,
}

impl MediaTypeFilter {
    pub fn matches(&self, media_type: &MediaType) -> bool {
        match self {
            MediaTypeFilter::Video => media_type.is_video(),
            MediaTypeFilter::Image => !media_type.is_video(),
        }
    }
}

/// Show or toggle the theme preference
#[derive(Args, Debug)]
pub struct ThemeCmd {
    #[arg(value_enum, default_value = "show")]
    pub action: ThemeAction,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeAction {
    /// Print the saved theme
    #[default]
    Show,
    /// Flip the saved theme and print the new one
    Toggle,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Theme command response
#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: String,
    #[serde(rename = "darkMode")]
    pub dark_mode: String,
    /// Preferences file, when backed by one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
}

/// Fact command response
#[derive(Debug, Serialize, Deserialize)]
pub struct FactResponse {
    pub fact: String,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a plain line, or the JSON envelope in JSON mode
    pub fn print_line<T: Serialize>(&self, line: impl std::fmt::Display, data: T) -> anyhow::Result<()> {
        if self.json {
            self.print(data)
        } else {
            println!("{}", line);
            Ok(())
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
