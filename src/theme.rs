//! Theme and styling constants for the ethcluster TUI.
//!
//! Tokyo Night-inspired colors, plus the per-category node style table used
//! by both the graph and the results table.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::NodeType;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Secondary accent color.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for special highlights.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the row under the cursor.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for rows whose entity is in the selection set.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .fg(SUCCESS_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for table headers.
pub const HEADER_STYLE: Style = Style::new().fg(WARNING_COLOR).add_modifier(Modifier::BOLD);

// ============================================================================
// Node Styles
// ============================================================================

/// Display style of a graph node category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub color: Color,
    /// Symbol size; the graph widget scales node radius by it.
    pub size: f64,
}

/// Style table keyed by display category.
#[must_use]
pub const fn node_style(category: NodeType) -> NodeStyle {
    match category {
        NodeType::Exchange => NodeStyle {
            color: Color::Rgb(247, 118, 142),
            size: 20.0,
        },
        NodeType::Deposit => NodeStyle {
            color: Color::Rgb(224, 175, 104),
            size: 15.0,
        },
        NodeType::Leaf => NodeStyle {
            color: Color::Rgb(122, 162, 247),
            size: 10.0,
        },
        NodeType::Selected => NodeStyle {
            color: Color::Rgb(158, 206, 106),
            size: 25.0,
        },
        NodeType::Unknown => NodeStyle {
            color: MUTED_COLOR,
            size: 10.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_style_stands_out() {
        let selected = node_style(NodeType::Selected);
        for other in [NodeType::Exchange, NodeType::Deposit, NodeType::Leaf] {
            assert!(selected.size > node_style(other).size);
            assert_ne!(selected.color, node_style(other).color);
        }
    }
}
