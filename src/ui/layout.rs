//! Layout calculations for the ethcluster TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{HEADER_HEIGHT, RESULTS_WIDTH_PERCENT, SUMMARY_HEIGHT};

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Logo, counters and client status.
    pub header: Rect,
    /// Results table; `None` while the column is hidden.
    pub results: Option<Rect>,
    /// Cluster graph canvas.
    pub graph: Rect,
    /// Summary labels under the graph.
    pub summary: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Splits the terminal area into header, results, graph, summary and footer.
#[must_use]
pub fn calculate_app_layout(area: Rect, results_visible: bool) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let (results, right) = if results_visible {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(RESULTS_WIDTH_PERCENT),
                Constraint::Min(10),
            ])
            .split(rows[1]);
        (Some(columns[0]), columns[1])
    } else {
        (None, rows[1])
    };

    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(SUMMARY_HEIGHT)])
        .split(right);

    AppLayout {
        header: rows[0],
        results,
        graph: right_rows[0],
        summary: right_rows[1],
        footer: rows[2],
    }
}

/// Calculate a centered popup area within a parent area
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Area of a modal: width as a percentage of the parent, height either as a
/// percentage or fitted to `content_rows` plus borders and footer.
#[must_use]
pub fn modal_area(
    parent: Rect,
    width_percent: u16,
    height_percent: Option<u16>,
    content_rows: u16,
) -> Rect {
    let width = parent.width * width_percent / 100;
    let height = match height_percent {
        Some(percent) => parent.height * percent / 100,
        // borders + blank line + footer + separator
        None => content_rows.saturating_add(5),
    };
    centered_popup_area(parent, width.max(30), height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_with_results() {
        let layout = calculate_app_layout(Rect::new(0, 0, 100, 40), true);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.summary.height, SUMMARY_HEIGHT);
        let results = layout.results.unwrap();
        assert_eq!(results.width, 30);
        assert_eq!(results.width + layout.graph.width, 100);
        assert_eq!(
            layout.graph.height + layout.summary.height,
            40 - HEADER_HEIGHT - FOOTER_HEIGHT
        );
    }

    #[test]
    fn test_app_layout_without_results() {
        let layout = calculate_app_layout(Rect::new(0, 0, 100, 40), false);
        assert!(layout.results.is_none());
        assert_eq!(layout.graph.width, 100);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30); // (100 - 40) / 2
        assert_eq!(popup.y, 15); // (50 - 20) / 2
    }

    #[test]
    fn test_centered_popup_area_clamped() {
        let parent = Rect::new(0, 0, 30, 20);
        let popup = centered_popup_area(parent, 100, 50);

        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 4);
    }

    #[test]
    fn test_modal_area_sizing() {
        let parent = Rect::new(0, 0, 100, 50);

        let fixed = modal_area(parent, 80, Some(60), 3);
        assert_eq!((fixed.width, fixed.height), (80, 30));

        let fitted = modal_area(parent, 50, None, 3);
        assert_eq!((fitted.width, fitted.height), (50, 8));

        let narrow = modal_area(parent, 10, None, 1);
        assert_eq!(narrow.width, 30);
    }
}
