//! Gallery view
//!
//! Draws the feed as a grid of cards, or a single placeholder line while
//! nothing is loaded, a fetch is outstanding, or the last fetch failed.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{GalleryContent, GalleryState};
use crate::models::FeedItem;
use crate::ui::layout::{card_rects, gallery_inner, grid_geometry};
use crate::ui::Theme;

/// Render the gallery into `area`
///
/// Updates the grid's column count and scroll offset to match what is drawn.
pub fn render(frame: &mut Frame, area: Rect, gallery: &mut GalleryState, theme: &Theme) {
    let title = match gallery.content {
        GalleryContent::Cards(ref items) => format!(" GALLERY ({}) ", items.len()),
        _ => " GALLERY ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(Span::styled(title, theme.title()));
    frame.render_widget(block, area);

    let inner = gallery_inner(area);

    if let Some(message) = gallery.message() {
        let style = match gallery.content {
            GalleryContent::Loading => theme.loading(),
            GalleryContent::Error => theme.error(),
            _ => theme.dimmed(),
        };
        let placeholder = Paragraph::new(message)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    // Empty feed: no cards, no message
    let (columns, visible_rows) = grid_geometry(inner);
    gallery.grid.set_columns(columns);
    gallery.grid.scroll_into_view(visible_rows);

    let selected = gallery.grid.selected;
    for (index, rect) in card_rects(inner, gallery.grid.offset_row, gallery.card_count()) {
        if let Some(item) = gallery.items().get(index) {
            render_card(frame, rect, item, index == selected, theme);
        }
    }
}

/// Render one card
fn render_card(frame: &mut Frame, area: Rect, item: &FeedItem, selected: bool, theme: &Theme) {
    let border_style = if selected {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme.surface());

    let card = Paragraph::new(card_lines(item, selected, theme)).block(block);
    frame.render_widget(card, area);
}

/// Card body: media marker, title, date, media location
pub fn card_lines(item: &FeedItem, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
    let marker = if item.media_type.is_video() {
        Span::styled("▶ VIDEO", theme.secondary())
    } else {
        Span::styled("▣ IMAGE", theme.title())
    };
    let cursor = if selected {
        Span::styled("▸ ", theme.accent())
    } else {
        Span::raw("  ")
    };

    vec![
        Line::from(vec![cursor, marker]),
        Line::from(Span::styled(
            item.title.clone(),
            theme.text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item.date.clone(), theme.dimmed())),
        Line::from(Span::styled(item.url.clone(), theme.dimmed())),
    ]
}
