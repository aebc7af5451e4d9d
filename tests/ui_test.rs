//! UI rendering tests
//!
//! Renders the full screen into a TestBackend and checks what lands in the
//! buffer, plus click resolution against the same layout.

use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use apod_gallery::app::{App, ClickTarget, Event};
use apod_gallery::models::{FeedItem, MediaType};
use apod_gallery::prefs::ThemeMode;
use apod_gallery::ui::{self, layout::hit_test, Theme};

fn item(title: &str, media_type: MediaType) -> FeedItem {
    FeedItem {
        url: format!("https://apod.nasa.gov/{}.jpg", title.to_lowercase().replace(' ', "_")),
        title: title.to_string(),
        date: "2025-08-14".to_string(),
        explanation: format!("About {}.", title),
        media_type,
    }
}

fn sample_items() -> Vec<FeedItem> {
    vec![
        item("Alpha Nebula", MediaType::Image),
        item("Beta Cluster", MediaType::Video),
        item("Gamma Comet", MediaType::Image),
    ]
}

fn app_with_items() -> App {
    let mut app = App::new(ThemeMode::Light, "Space Fact: Venus spins backwards.");
    app.gallery.set_items(sample_items());
    app
}

/// Render one frame and flatten the buffer into a string
fn draw(app: &mut App, width: u16, height: u16) -> (String, Terminal<TestBackend>) {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let content: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    (content, terminal)
}

// =============================================================================
// Gallery
// =============================================================================

#[test]
fn test_placeholder_before_first_fetch() {
    let mut app = App::new(ThemeMode::Light, "Space Fact: test");
    let (content, _) = draw(&mut app, 80, 24);

    assert!(content.contains("Press f to fetch space photos"));
    assert!(content.contains("Fetch Space Images"));
    assert!(content.contains("Space Fact: test"));
}

#[test]
fn test_loading_message() {
    let mut app = App::new(ThemeMode::Light, "Space Fact: test");
    app.handle(Event::FetchRequested);
    let (content, _) = draw(&mut app, 80, 24);

    assert!(content.contains("Loading space photos..."));
}

#[test]
fn test_error_message() {
    let mut app = App::new(ThemeMode::Light, "Space Fact: test");
    app.gallery.set_error();
    let (content, _) = draw(&mut app, 80, 24);

    assert!(content.contains("Unable to load space photos. Please try again later."));
    assert!(!content.contains("IMAGE"));
}

#[test]
fn test_cards_rendered_in_feed_order() {
    let mut app = app_with_items();
    let (content, _) = draw(&mut app, 80, 24);

    let alpha = content.find("Alpha Nebula").expect("first card");
    let beta = content.find("Beta Cluster").expect("second card");
    let gamma = content.find("Gamma Comet").expect("third card");
    assert!(alpha < beta && beta < gamma);

    assert!(content.contains("GALLERY (3)"));
    assert!(content.contains("VIDEO"));
    assert!(content.contains("IMAGE"));
    assert!(!content.contains("Loading space photos"));
}

#[test]
fn test_empty_feed_renders_nothing() {
    let mut app = App::new(ThemeMode::Light, "Space Fact: test");
    app.gallery.set_items(Vec::new());
    let (content, _) = draw(&mut app, 80, 24);

    assert!(content.contains("GALLERY (0)"));
    assert!(!content.contains("Press f to fetch"));
    assert!(!content.contains("IMAGE"));
}

#[test]
fn test_render_sets_grid_columns() {
    let mut app = app_with_items();
    draw(&mut app, 80, 24);
    assert_eq!(app.gallery.grid.columns, 2);

    draw(&mut app, 120, 30);
    assert_eq!(app.gallery.grid.columns, 4);
}

// =============================================================================
// Modal
// =============================================================================

#[test]
fn test_modal_shows_item_details() {
    let mut app = app_with_items();
    app.handle(Event::ActivateCard(2));
    assert!(app.modal.is_open());

    let (content, _) = draw(&mut app, 80, 24);
    assert!(content.contains("Gamma Comet"));
    assert!(content.contains("2025-08-14"));
    assert!(content.contains("About Gamma Comet."));
    assert!(content.contains("https://apod.nasa.gov/gamma_comet.jpg"));
}

#[test]
fn test_modal_closed_hides_details() {
    let mut app = app_with_items();
    app.handle(Event::ActivateCard(0));
    app.handle(Event::CloseModal);

    let (content, _) = draw(&mut app, 80, 24);
    assert!(!content.contains("About Alpha Nebula."));
}

// =============================================================================
// Theme
// =============================================================================

#[test]
fn test_theme_indicator_glyph() {
    let mut app = App::new(ThemeMode::Dark, "Space Fact: test");
    let (content, _) = draw(&mut app, 80, 24);
    assert!(content.contains("☀"));
    assert!(content.contains("DARK"));

    app.handle(Event::ToggleTheme);
    let (content, _) = draw(&mut app, 80, 24);
    assert!(content.contains("🌙"));
    assert!(content.contains("LIGHT"));
}

#[test]
fn test_theme_background_follows_mode() {
    // Right end of the status bar is past the hints
    let mut app = App::new(ThemeMode::Dark, "Space Fact: test");
    let (_, terminal) = draw(&mut app, 80, 24);
    assert_eq!(terminal.backend().buffer()[(79, 23)].bg, Theme::DARK.surface);

    let mut app = App::new(ThemeMode::Light, "Space Fact: test");
    let (_, terminal) = draw(&mut app, 80, 24);
    assert_eq!(terminal.backend().buffer()[(79, 23)].bg, Theme::LIGHT.surface);
}

// =============================================================================
// Click Resolution
// =============================================================================

#[test]
fn test_hit_test_header_and_cards() {
    let app = app_with_items();
    let area = Rect::new(0, 0, 80, 24);

    assert_eq!(hit_test(area, &app, 50, 1), ClickTarget::FetchButton);
    assert_eq!(hit_test(area, &app, 75, 1), ClickTarget::ThemeToggle);
    assert_eq!(hit_test(area, &app, 5, 7), ClickTarget::Card(0));
    assert_eq!(hit_test(area, &app, 50, 7), ClickTarget::Card(1));
    assert_eq!(hit_test(area, &app, 5, 13), ClickTarget::Card(2));
    assert_eq!(hit_test(area, &app, 50, 13), ClickTarget::Nothing);
}

#[test]
fn test_hit_test_with_modal_open() {
    let mut app = app_with_items();
    app.handle(Event::ActivateCard(0));
    let area = Rect::new(0, 0, 80, 24);

    assert_eq!(hit_test(area, &app, 0, 0), ClickTarget::ModalBackdrop);
    assert_eq!(hit_test(area, &app, 40, 12), ClickTarget::ModalContent);
    assert_eq!(hit_test(area, &app, 72, 2), ClickTarget::ModalClose);
    // Header controls are covered by the modal's backdrop
    assert_eq!(hit_test(area, &app, 75, 1), ClickTarget::ModalBackdrop);
}

#[test]
fn test_modal_traps_clicks_until_closed() {
    let mut app = app_with_items();
    app.handle(Event::ActivateCard(0));

    let effects = app.handle(Event::Click(ClickTarget::FetchButton));
    assert!(effects.is_empty());
    assert!(!app.modal.is_open());
    assert_eq!(app.latest_token(), 0);
}
