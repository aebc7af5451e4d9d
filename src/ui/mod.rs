//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first, with mouse clicks resolved through
//! [`layout::hit_test`].

pub mod gallery;
pub mod layout;
pub mod modal;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::Alignment,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use layout::AppLayout;

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = Theme::for_mode(app.theme);

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(theme.base()), area);

    let layout = AppLayout::new(area);

    render_header(frame, &layout, app, &theme);
    render_fact(frame, &layout, app, &theme);
    gallery::render(frame, layout.gallery, &mut app.gallery, &theme);
    render_status_bar(frame, &layout, app, &theme);

    if app.modal.is_open() {
        if let Some(item) = app.modal.content() {
            modal::render(frame, area, item, &theme);
        }
    }
}

/// Title, fetch button and theme toggle
fn render_header(frame: &mut Frame, layout: &AppLayout, app: &App, theme: &Theme) {
    let rounded = || {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border())
    };

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("🌌 ", theme.text()),
        Span::styled("APOD ", theme.title()),
        Span::styled(
            "GALLERY",
            theme.secondary().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(rounded());
    frame.render_widget(logo, layout.title);

    let fetch = Paragraph::new(Line::from(vec![
        Span::styled(" Fetch Space Images ", theme.button()),
        Span::styled(" f", theme.keybind()),
    ]))
    .alignment(Alignment::Center)
    .block(rounded());
    frame.render_widget(fetch, layout.fetch_button);

    let toggle = Paragraph::new(app.theme.indicator())
        .alignment(Alignment::Center)
        .block(rounded());
    frame.render_widget(toggle, layout.theme_toggle);
}

/// The startup fact line
fn render_fact(frame: &mut Frame, layout: &AppLayout, app: &App, theme: &Theme) {
    let fact = Paragraph::new(Span::styled(app.fact.as_str(), theme.accent()))
        .alignment(Alignment::Center);
    frame.render_widget(fact, layout.fact);
}

/// Keybinding hints and theme name
fn render_status_bar(frame: &mut Frame, layout: &AppLayout, app: &App, theme: &Theme) {
    let hints: &[(&str, &str)] = if app.modal.is_open() {
        &[("ESC", "close"), ("q", "quit")]
    } else {
        &[
            ("f", "fetch"),
            ("t", "theme"),
            ("←↑↓→", "select"),
            ("↵", "open"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.theme.to_string().to_uppercase()),
        theme.button(),
    )];
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" {}", key), theme.keybind()));
        spans.push(Span::styled(format!(":{}", desc), theme.dimmed()));
    }

    let status = Paragraph::new(Line::from(spans)).style(theme.status_bar());
    frame.render_widget(status, layout.status);
}
