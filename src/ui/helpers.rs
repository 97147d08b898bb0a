//! UI helper functions for creating styled blocks.
//!
//! Panels and modal dialogs share these so focus and close affordances look
//! the same everywhere.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, MUTED_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered panel block styled by focus state.
///
/// Focused panels get a double border and a `●` marker before the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a modal dialog block: centered title plus a close affordance in
/// the top-right corner.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Line::from(format!(" {title} ")).alignment(Alignment::Center))
        .title(
            Line::from(" Esc ✕ ")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        layout::{Constraint, Direction, Layout},
    };

    #[test]
    fn test_block_titles_reflect_focus_and_close_affordance() {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();

        terminal
            .draw(|frame| {
                let areas = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3); 3])
                    .split(frame.area());

                frame.render_widget(create_border_block("Results", false), areas[0]);
                frame.render_widget(create_border_block("Graph", true), areas[1]);
                frame.render_widget(create_popup_block("Info"), areas[2]);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[0].contains(" Results "));
        assert!(!rows[0].contains('●'));
        assert!(rows[3].contains("● Graph"));
        assert!(rows[3].contains('═'));
        assert!(rows[6].contains(" Info "));
        assert!(rows[6].contains("Esc ✕"));
    }
}
