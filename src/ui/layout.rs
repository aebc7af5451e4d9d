//! Screen geometry and pointer hit-testing
//!
//! Rendering and mouse handling both go through these functions, so a click
//! always resolves against the rectangles that were actually drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{App, ClickTarget};

/// Card width in cells, borders included
pub const CARD_WIDTH: u16 = 28;

/// Card height in cells, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Width of the fetch button
const FETCH_BUTTON_WIDTH: u16 = 26;

/// Width of the theme toggle
const THEME_TOGGLE_WIDTH: u16 = 8;

/// Top-level regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub fetch_button: Rect,
    pub theme_toggle: Rect,
    pub fact: Rect,
    pub gallery: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Fact line
                Constraint::Min(1),    // Gallery
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(FETCH_BUTTON_WIDTH),
                Constraint::Length(THEME_TOGGLE_WIDTH),
            ])
            .split(rows[0]);

        Self {
            title: header[0],
            fetch_button: header[1],
            theme_toggle: header[2],
            fact: rows[1],
            gallery: rows[2],
            status: rows[3],
        }
    }
}

/// Area inside the gallery border
pub fn gallery_inner(gallery: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(gallery)
}

/// Columns and fully visible rows of the card grid
pub fn grid_geometry(inner: Rect) -> (usize, usize) {
    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    let rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    (columns, rows)
}

/// Rectangles of the visible cards, starting at `offset_row`
pub fn card_rects(inner: Rect, offset_row: usize, len: usize) -> Vec<(usize, Rect)> {
    let (columns, visible_rows) = grid_geometry(inner);
    let card_width = inner.width / columns as u16;

    let first = offset_row * columns;
    let end = len.min((offset_row + visible_rows) * columns);
    let bottom = inner.y + inner.height;

    (first..end)
        .filter_map(|index| {
            let row = (index / columns - offset_row) as u16;
            let col = (index % columns) as u16;
            let y = inner.y + row * CARD_HEIGHT;
            if y >= bottom {
                return None;
            }
            let rect = Rect {
                x: inner.x + col * card_width,
                y,
                width: card_width,
                height: CARD_HEIGHT.min(bottom - y),
            };
            Some((index, rect))
        })
        .collect()
}

/// Centered detail overlay
pub fn modal_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).clamp(area.width.min(20), 90);
    let height = area.height.saturating_sub(4).clamp(area.height.min(8), 30);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// The close glyph in the modal's top-right corner
pub fn modal_close_area(modal: Rect) -> Rect {
    Rect {
        x: modal.x + modal.width.saturating_sub(5),
        y: modal.y,
        width: 3.min(modal.width),
        height: 1.min(modal.height),
    }
}

/// Resolve a click at (`column`, `row`) against the current screen
pub fn hit_test(area: Rect, app: &App, column: u16, row: u16) -> ClickTarget {
    let pos = Position::new(column, row);

    if app.modal.is_open() {
        let modal = modal_area(area);
        return if modal_close_area(modal).contains(pos) {
            ClickTarget::ModalClose
        } else if modal.contains(pos) {
            ClickTarget::ModalContent
        } else {
            ClickTarget::ModalBackdrop
        };
    }

    let layout = AppLayout::new(area);
    if layout.fetch_button.contains(pos) {
        return ClickTarget::FetchButton;
    }
    if layout.theme_toggle.contains(pos) {
        return ClickTarget::ThemeToggle;
    }

    let inner = gallery_inner(layout.gallery);
    card_rects(inner, app.gallery.grid.offset_row, app.gallery.card_count())
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(index, _)| ClickTarget::Card(index))
        .unwrap_or(ClickTarget::Nothing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.fetch_button.height, 3);
        assert_eq!(layout.fact.y, 3);
        assert_eq!(layout.gallery.y, 4);
        assert_eq!(layout.gallery.height, 19);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.theme_toggle.x + layout.theme_toggle.width, 80);
    }

    #[test]
    fn test_grid_geometry() {
        assert_eq!(grid_geometry(Rect::new(0, 0, 78, 17)), (2, 2));
        assert_eq!(grid_geometry(Rect::new(0, 0, 10, 3)), (1, 1));
        assert_eq!(grid_geometry(Rect::new(0, 0, 168, 48)), (6, 8));
    }

    #[test]
    fn test_card_rects_row_major() {
        let inner = Rect::new(1, 5, 78, 17);
        let rects = card_rects(inner, 0, 5);
        // 2 columns x 2 rows visible
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], (0, Rect::new(1, 5, 39, 6)));
        assert_eq!(rects[1], (1, Rect::new(40, 5, 39, 6)));
        assert_eq!(rects[2], (2, Rect::new(1, 11, 39, 6)));
    }

    #[test]
    fn test_card_rects_offset() {
        let inner = Rect::new(1, 5, 78, 17);
        let rects = card_rects(inner, 1, 5);
        let indices: Vec<usize> = rects.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2, 3, 4]);
        assert_eq!(rects[0].1.y, 5);
    }

    #[test]
    fn test_card_rects_clipped_when_short() {
        let inner = Rect::new(0, 0, 30, 4);
        let rects = card_rects(inner, 0, 3);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1.height, 4);
    }

    #[test]
    fn test_modal_area_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let modal = modal_area(area);
        assert_eq!(modal, Rect::new(4, 2, 72, 20));

        let close = modal_close_area(modal);
        assert_eq!(close.y, modal.y);
        assert!(modal.contains(Position::new(close.x, close.y)));
    }

    #[test]
    fn test_modal_area_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 5);
        let modal = modal_area(area);
        assert!(modal.width <= area.width);
        assert!(modal.height <= area.height);
    }
}
