//! Top-level controller
//!
//! Owns the [`App`] state machine and the resources its effects touch: the
//! feed client, the preference store and the channel fetch tasks report
//! back on. All state changes happen on the caller's task; fetch tasks only
//! send events.

use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::FeedClient;
use crate::app::{App, Effect, Event};
use crate::prefs::{load_theme, save_theme, PreferenceStore};
use crate::ui::layout::hit_test;

pub struct Controller {
    app: App,
    client: FeedClient,
    prefs: Box<dyn PreferenceStore>,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
}

impl Controller {
    /// Build the controller, reading the startup theme from `prefs`
    pub fn new(client: FeedClient, prefs: Box<dyn PreferenceStore>, fact: impl Into<String>) -> Self {
        let theme = load_theme(prefs.as_ref());
        tracing::debug!(%theme, "loaded theme preference");

        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app: App::new(theme, fact),
            client,
            prefs,
            tx,
            rx,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn prefs(&self) -> &dyn PreferenceStore {
        self.prefs.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.app.running
    }

    /// Apply an event and run whatever effects it produces
    pub fn dispatch(&mut self, event: Event) {
        for effect in self.app.handle(event) {
            self.run_effect(effect);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        if let Some(event) = self.app.key_event(key) {
            self.dispatch(event);
        }
    }

    /// Handle a left click at a terminal cell, given the drawn area
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        let target = hit_test(area, &self.app, column, row);
        tracing::trace!(?target, column, row, "click");
        self.dispatch(Event::Click(target));
    }

    /// Apply every fetch result that has already arrived
    pub fn drain_completed(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next fetch result and apply it
    pub async fn next_completion(&mut self) {
        if let Some(event) = self.rx.recv().await {
            self.dispatch(event);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartFetch { token } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_items().await;
                    // Receiver only disappears on shutdown
                    let _ = tx.send(Event::FetchCompleted { token, result });
                });
            }
            Effect::PersistTheme(mode) => {
                if let Err(e) = save_theme(self.prefs.as_mut(), mode) {
                    tracing::warn!(error = %e, "failed to persist theme preference");
                }
            }
            Effect::LogFetchError(cause) => {
                tracing::error!(error = %cause, "error fetching feed data");
            }
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("app", &self.app)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
