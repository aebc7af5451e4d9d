//! App state and core application logic
//!
//! The gallery, the detail modal and the theme preference form one state
//! machine. `App::handle` takes an [`Event`] and returns the side effects the
//! controller has to run; it performs no I/O itself, so every transition can
//! be tested without a terminal or a network.

use crate::api::FetchError;
use crate::models::FeedItem;
use crate::prefs::ThemeMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shown while a fetch is outstanding
pub const LOADING_MESSAGE: &str = "🔄 Loading space photos...";

/// Shown when a fetch fails for any reason
pub const ERROR_MESSAGE: &str = "⚠️ Unable to load space photos. Please try again later.";

/// Shown before the first fetch
pub const PLACEHOLDER_MESSAGE: &str = "Press f to fetch space photos";

// =============================================================================
// Events & Effects
// =============================================================================

/// Something that happened to the app
#[derive(Debug)]
pub enum Event {
    /// User asked for the feed (fetch button)
    FetchRequested,
    /// A fetch finished; `token` identifies the request that produced it
    FetchCompleted {
        token: u64,
        result: Result<Vec<FeedItem>, FetchError>,
    },
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectFirst,
    SelectLast,
    /// Activate the highlighted card
    ActivateSelected,
    /// Activate the card at an index (mouse click)
    ActivateCard(usize),
    /// Modal close control
    CloseModal,
    /// Pointer click resolved against the current layout
    Click(ClickTarget),
    ToggleTheme,
    Quit,
}

/// What a pointer click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    FetchButton,
    ThemeToggle,
    Card(usize),
    ModalClose,
    /// Inside the modal's content box
    ModalContent,
    /// Outside the modal's content box while it is open
    ModalBackdrop,
    Nothing,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a feed request tagged with `token`
    StartFetch { token: u64 },
    /// Write the theme preference to durable storage
    PersistTheme(ThemeMode),
    /// Report a failed fetch on the diagnostic channel
    LogFetchError(String),
}

// =============================================================================
// Grid Selection
// =============================================================================

/// Selection state for the card grid
#[derive(Debug, Clone)]
pub struct GridState {
    /// Currently selected card index
    pub selected: usize,
    /// First visible row
    pub offset_row: usize,
    /// Total number of cards
    pub len: usize,
    /// Cards per row, set from the last layout pass
    pub columns: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            offset_row: 0,
            len: 0,
            columns: 1,
        }
    }
}

impl GridState {
    pub fn left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move one row up, staying in the same column
    pub fn up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    /// Move one row down, clamping to the last card
    pub fn down(&mut self) {
        if self.len == 0 {
            return;
        }
        let target = self.selected + self.columns;
        if target < self.len {
            self.selected = target;
        } else if self.row_of(self.len - 1) > self.row_of(self.selected) {
            self.selected = self.len - 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset_row = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Row a card index falls on
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns.max(1)
    }

    /// Update the column count after a layout pass
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Update offset to keep the selected row visible
    pub fn scroll_into_view(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        let row = self.row_of(self.selected);
        if row < self.offset_row {
            self.offset_row = row;
        } else if row >= self.offset_row + visible_rows {
            self.offset_row = row + 1 - visible_rows;
        }
    }

    /// Reset for a new set of cards
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        self.offset_row = 0;
    }
}

// =============================================================================
// Gallery State
// =============================================================================

/// What the gallery surface currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryContent {
    /// Nothing fetched yet
    #[default]
    Placeholder,
    /// A fetch is outstanding
    Loading,
    /// The latest fetch failed
    Error,
    /// Cards, in feed order
    Cards(Vec<FeedItem>),
}

/// Gallery view state
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub content: GalleryContent,
    pub grid: GridState,
}

impl GalleryState {
    /// Replace everything with the loading placeholder
    pub fn set_loading(&mut self) {
        self.content = GalleryContent::Loading;
        self.grid.reset(0);
    }

    /// Replace everything with the error placeholder
    pub fn set_error(&mut self) {
        self.content = GalleryContent::Error;
        self.grid.reset(0);
    }

    /// Replace everything with a new set of cards
    pub fn set_items(&mut self, items: Vec<FeedItem>) {
        self.grid.reset(items.len());
        self.content = GalleryContent::Cards(items);
    }

    /// Rendered cards (empty unless showing cards)
    pub fn items(&self) -> &[FeedItem] {
        match &self.content {
            GalleryContent::Cards(items) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn card_count(&self) -> usize {
        self.items().len()
    }

    /// Placeholder text for non-card states
    pub fn message(&self) -> Option<&'static str> {
        match self.content {
            GalleryContent::Placeholder => Some(PLACEHOLDER_MESSAGE),
            GalleryContent::Loading => Some(LOADING_MESSAGE),
            GalleryContent::Error => Some(ERROR_MESSAGE),
            GalleryContent::Cards(_) => None,
        }
    }
}

// =============================================================================
// Modal State
// =============================================================================

/// Detail overlay: visibility plus the last item shown
///
/// Closing only hides the overlay; the content stays until the next open
/// overwrites it.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    visible: bool,
    content: Option<FeedItem>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&FeedItem> {
        self.content.as_ref()
    }

    fn open(&mut self, item: FeedItem) {
        self.content = Some(item);
        self.visible = true;
    }

    fn close(&mut self) {
        self.visible = false;
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    pub gallery: GalleryState,
    pub modal: ModalState,
    pub theme: ThemeMode,
    /// Fact line chosen at startup
    pub fact: String,
    /// Whether the app is running
    pub running: bool,
    /// Token of the most recently issued fetch (0 = none yet)
    latest_token: u64,
}

impl App {
    /// Create the app with its startup theme and fact
    pub fn new(theme: ThemeMode, fact: impl Into<String>) -> Self {
        Self {
            gallery: GalleryState::default(),
            modal: ModalState::default(),
            theme,
            fact: fact.into(),
            running: true,
            latest_token: 0,
        }
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Apply one event, returning the effects to run
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::FetchRequested => self.request_fetch(),
            Event::FetchCompleted { token, result } => self.complete_fetch(token, result),
            Event::SelectLeft => self.move_selection(GridState::left),
            Event::SelectRight => self.move_selection(GridState::right),
            Event::SelectUp => self.move_selection(GridState::up),
            Event::SelectDown => self.move_selection(GridState::down),
            Event::SelectFirst => self.move_selection(GridState::first),
            Event::SelectLast => self.move_selection(GridState::last),
            Event::ActivateSelected => {
                let index = self.gallery.grid.selected;
                self.activate_card(index)
            }
            Event::ActivateCard(index) => self.activate_card(index),
            Event::CloseModal => {
                self.modal.close();
                Vec::new()
            }
            Event::Click(target) => self.handle_click(target),
            Event::ToggleTheme => self.toggle_theme(),
            Event::Quit => {
                self.quit();
                Vec::new()
            }
        }
    }

    fn request_fetch(&mut self) -> Vec<Effect> {
        if self.modal.is_open() {
            return Vec::new();
        }
        self.latest_token += 1;
        self.gallery.set_loading();
        vec![Effect::StartFetch {
            token: self.latest_token,
        }]
    }

    fn complete_fetch(
        &mut self,
        token: u64,
        result: Result<Vec<FeedItem>, FetchError>,
    ) -> Vec<Effect> {
        if token != self.latest_token {
            tracing::debug!(token, latest = self.latest_token, "discarding stale feed response");
            // Stale failures stay off screen but still reach the log
            return match result {
                Ok(_) => Vec::new(),
                Err(e) => vec![Effect::LogFetchError(e.to_string())],
            };
        }

        match result {
            Ok(items) => {
                self.gallery.set_items(items);
                Vec::new()
            }
            Err(e) => {
                self.gallery.set_error();
                vec![Effect::LogFetchError(e.to_string())]
            }
        }
    }

    fn move_selection(&mut self, mv: fn(&mut GridState)) -> Vec<Effect> {
        if !self.modal.is_open() {
            mv(&mut self.gallery.grid);
        }
        Vec::new()
    }

    fn activate_card(&mut self, index: usize) -> Vec<Effect> {
        if self.modal.is_open() {
            return Vec::new();
        }
        let Some(item) = self.gallery.items().get(index).cloned() else {
            return Vec::new();
        };
        self.gallery.grid.selected = index;

        // Video cards carry no activation handler
        if item.opens_modal() {
            self.modal.open(item);
        }
        Vec::new()
    }

    fn handle_click(&mut self, target: ClickTarget) -> Vec<Effect> {
        if self.modal.is_open() {
            match target {
                ClickTarget::ModalContent | ClickTarget::Nothing => {}
                _ => self.modal.close(),
            }
            return Vec::new();
        }

        match target {
            ClickTarget::FetchButton => self.request_fetch(),
            ClickTarget::ThemeToggle => self.toggle_theme(),
            ClickTarget::Card(index) => self.activate_card(index),
            _ => Vec::new(),
        }
    }

    fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        vec![Effect::PersistTheme(self.theme)]
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Map a key press onto an event, if the key means anything here
    pub fn key_event(&self, key: KeyEvent) -> Option<Event> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Event::Quit);
        }

        if self.modal.is_open() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('x') | KeyCode::Backspace => Some(Event::CloseModal),
                KeyCode::Char('q') => Some(Event::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('f') | KeyCode::Char('r') => Some(Event::FetchRequested),
            KeyCode::Char('t') | KeyCode::Char('d') => Some(Event::ToggleTheme),
            KeyCode::Left | KeyCode::Char('h') => Some(Event::SelectLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Event::SelectRight),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::SelectUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::SelectDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Event::SelectFirst),
            KeyCode::End | KeyCode::Char('G') => Some(Event::SelectLast),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Event::ActivateSelected),
            _ => None,
        }
    }

    /// Handle keyboard event, returns effects to run
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match self.key_event(key) {
            Some(event) => self.handle(event),
            None => Vec::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ThemeMode::Light, String::new())
    }
}
