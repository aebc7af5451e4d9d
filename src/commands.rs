//! CLI Command Handlers
//!
//! Each handler takes its CLI args and Output, returns ExitCode.

use std::path::Path;

use crate::api::FeedClient;
use crate::cli::{ExitCode, FactResponse, FetchCmd, Output, ThemeAction, ThemeCmd, ThemeResponse};
use crate::facts;
use crate::prefs::{load_theme, save_theme, PreferenceStore};

// =============================================================================
// Fetch Command
// =============================================================================

pub async fn fetch_cmd(cmd: FetchCmd, client: &FeedClient, output: &Output) -> ExitCode {
    if cmd.limit == Some(0) {
        return output.error("--limit must be at least 1", ExitCode::InvalidArgs);
    }

    output.info(format!("Fetching {}", client.url()));

    match client.fetch_items().await {
        Ok(mut items) => {
            if let Some(filter) = cmd.media_type {
                items.retain(|item| filter.matches(&item.media_type));
            }
            if let Some(limit) = cmd.limit {
                items.truncate(limit);
            }

            if let Err(e) = output.print(&items) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching feed data");
            output.error(format!("Fetch failed: {}", e), ExitCode::NetworkError)
        }
    }
}

// =============================================================================
// Fact Command
// =============================================================================

pub fn fact_cmd(output: &Output) -> ExitCode {
    let fact = facts::show_random_fact();
    match output.print_line(&fact, FactResponse { fact: fact.clone() }) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Theme Command
// =============================================================================

pub fn theme_cmd(
    cmd: ThemeCmd,
    prefs: &mut dyn PreferenceStore,
    location: Option<&Path>,
    output: &Output,
) -> ExitCode {
    let mut mode = load_theme(prefs);

    if cmd.action == ThemeAction::Toggle {
        mode = mode.toggled();
        if let Err(e) = save_theme(prefs, mode) {
            return output.error(format!("Failed to save theme: {}", e), ExitCode::Error);
        }
    }

    let response = ThemeResponse {
        theme: mode.to_string(),
        dark_mode: mode.stored_value().to_string(),
        path: location.map(|p| p.display().to_string()),
    };
    if let Some(path) = location {
        output.info(format!("Preferences: {}", path.display()));
    }
    match output.print_line(format!("{} {}", mode.indicator(), mode), response) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FilePreferences, MemoryPreferences, ThemeMode, DARK_MODE_KEY};

    fn quiet() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    #[test]
    fn test_theme_show_leaves_store() {
        let mut prefs = MemoryPreferences::with(DARK_MODE_KEY, "enabled");
        let code = theme_cmd(ThemeCmd { action: ThemeAction::Show }, &mut prefs, None, &quiet());
        assert_eq!(code, ExitCode::Success);
        assert_eq!(prefs.get(DARK_MODE_KEY).as_deref(), Some("enabled"));
    }

    #[test]
    fn test_theme_toggle_twice() {
        let mut prefs = MemoryPreferences::new();
        theme_cmd(ThemeCmd { action: ThemeAction::Toggle }, &mut prefs, None, &quiet());
        assert_eq!(load_theme(&prefs), ThemeMode::Dark);

        theme_cmd(ThemeCmd { action: ThemeAction::Toggle }, &mut prefs, None, &quiet());
        assert_eq!(load_theme(&prefs), ThemeMode::Light);
        assert_eq!(prefs.get(DARK_MODE_KEY).as_deref(), Some("disabled"));
    }

    #[test]
    fn test_theme_toggle_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = FilePreferences::open(dir.path().join("preferences.toml"));
        let path = prefs.path().to_path_buf();

        let code = theme_cmd(
            ThemeCmd { action: ThemeAction::Toggle },
            &mut prefs,
            Some(&path),
            &quiet(),
        );
        assert_eq!(code, ExitCode::Success);
        assert_eq!(load_theme(&FilePreferences::open(&path)), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_fetch_zero_limit_is_invalid() {
        // Rejected before any request is made
        let client = FeedClient::with_url("http://127.0.0.1:9/data.json");
        let cmd = FetchCmd {
            limit: Some(0),
            media_type: None,
        };
        assert_eq!(fetch_cmd(cmd, &client, &quiet()).await, ExitCode::InvalidArgs);
    }

    #[test]
    fn test_fact_cmd() {
        assert_eq!(fact_cmd(&quiet()), ExitCode::Success);
    }
}
