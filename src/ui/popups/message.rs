//! Plain-text modal bodies: info results, the about text and the quit
//! confirmation.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
};

/// Rows `text` occupies once wrapped to `width` columns.
#[must_use]
pub fn text_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Renders a text body. Single-line messages are centered.
pub fn render(frame: &mut Frame, area: Rect, text: &str) {
    let alignment = if text.lines().count() > 1 {
        Alignment::Left
    } else {
        Alignment::Center
    };
    let paragraph = Paragraph::new(text.to_string())
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
