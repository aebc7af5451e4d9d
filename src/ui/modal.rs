//! Detail modal for a single feed item

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::models::FeedItem;
use crate::ui::layout::{modal_area, modal_close_area};
use crate::ui::Theme;

/// Render the modal centered over `area`
pub fn render(frame: &mut Frame, area: Rect, item: &FeedItem, theme: &Theme) {
    let modal = modal_area(area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme.border_focused())
        .style(theme.surface());

    let body = Paragraph::new(detail_lines(item, theme))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(body, modal);

    let close = Paragraph::new(Span::styled(" × ", theme.accent()));
    frame.render_widget(close, modal_close_area(modal));
}

/// Modal body: media location, title, date, explanation
pub fn detail_lines(item: &FeedItem, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("▣ ", theme.title()),
            Span::styled(item.url.clone(), theme.dimmed()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            item.title.clone(),
            theme.title().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            item.date.clone(),
            theme.dimmed().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(item.explanation.clone(), theme.text())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ESC ", theme.keybind()),
            Span::styled("close", theme.dimmed()),
        ]),
    ]
}
