//! apod-gallery - terminal gallery for the daily astronomy picture feed
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive gallery
//! apod-gallery
//!
//! # CLI mode (for automation)
//! apod-gallery fetch --limit 5 --json
//! apod-gallery theme toggle
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use apod_gallery::api::FeedClient;
use apod_gallery::cli::{Cli, Command, ExitCode, Output};
use apod_gallery::commands;
use apod_gallery::config::Config;
use apod_gallery::controller::Controller;
use apod_gallery::facts;
use apod_gallery::logging::{self, LogTarget};
use apod_gallery::prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
use apod_gallery::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let feed_url = cli
        .feed_url
        .clone()
        .unwrap_or_else(|| config.feed_url().to_string());
    let client = FeedClient::with_url(feed_url);

    if cli.is_cli_mode() {
        logging::init_logging(LogTarget::Stderr, config.log_level());

        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, &client).await;
        std::process::exit(exit_code.into());
    } else {
        if let Some(path) = logging::default_log_path() {
            logging::init_logging(LogTarget::File(path), config.log_level());
        }

        // TUI mode: launch interactive interface
        run_tui(client).await
    }
}

/// Open the preference store, falling back to memory when there is no config dir
fn open_prefs() -> Box<dyn PreferenceStore> {
    match FilePreferences::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preferences will not persist");
            Box::new(MemoryPreferences::new())
        }
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, client: &FeedClient) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Fetch(cmd)) => commands::fetch_cmd(cmd, client, &output).await,

        Some(Command::Fact) => commands::fact_cmd(&output),

        Some(Command::Theme(cmd)) => match FilePreferences::open_default() {
            Ok(mut prefs) => {
                let path = prefs.path().to_path_buf();
                commands::theme_cmd(cmd, &mut prefs, Some(&path), &output)
            }
            Err(e) => output.error(format!("Failed to open preferences: {}", e), ExitCode::Error),
        },

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(client: FeedClient) -> Result<()> {
    let fact = facts::show_random_fact();
    let mut controller = Controller::new(client, open_prefs(), fact);
    tracing::info!("starting gallery");

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut controller).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies fetch results, renders UI
async fn run_event_loop(terminal: &mut Tui, controller: &mut Controller) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(50);

    while controller.is_running() {
        controller.drain_completed();

        let area = terminal
            .draw(|frame| ui::render(frame, controller.app_mut()))?
            .area;

        // Poll without blocking the runtime so fetch tasks keep making progress
        let ready = tokio::task::block_in_place(|| event::poll(TICK_RATE))?;
        if !ready {
            continue;
        }

        match event::read()? {
            // Only handle key press events (ignore releases on Windows)
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                controller.handle_key(key);
            }
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                controller.handle_click(area, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    tracing::info!("gallery closed");
    Ok(())
}
