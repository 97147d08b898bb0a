//! Cluster graph widget.
//!
//! Nodes are placed on concentric rings by semantic type: exchanges in the
//! middle, deposits around them and leaves on the outside. Edges are drawn
//! as straight lines, nodes as circles sized and colored from the style
//! table, so a selected node keeps its ring but switches to the selected
//! style.

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Paragraph, Widget,
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
    },
};

use crate::domain::{ClusterGraph, NodeType};
use crate::state::selection::SeriesNode;
use crate::theme::{MUTED_COLOR, node_style};

use super::helpers::truncate_address;

// ============================================================================
// Layout
// ============================================================================

const CORE_RADIUS: f64 = 0.25;
const MIDDLE_RADIUS: f64 = 0.55;
const OUTER_RADIUS: f64 = 0.9;
const BOUND: f64 = 1.2;

/// Node radius per unit of style size.
const SIZE_SCALE: f64 = 1.0 / 200.0;

const LABEL_WIDTH: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ring {
    Core,
    Middle,
    Outer,
}

impl Ring {
    const ALL: [Self; 3] = [Self::Core, Self::Middle, Self::Outer];

    const fn of(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Exchange => Self::Core,
            NodeType::Deposit => Self::Middle,
            NodeType::Leaf | NodeType::Selected | NodeType::Unknown => Self::Outer,
        }
    }

    const fn radius(self) -> f64 {
        match self {
            Self::Core => CORE_RADIUS,
            Self::Middle => MIDDLE_RADIUS,
            Self::Outer => OUTER_RADIUS,
        }
    }

    /// Angular offset so neighbouring rings do not line up.
    const fn offset(self) -> f64 {
        match self {
            Self::Core => 0.0,
            Self::Middle => 0.3,
            Self::Outer => 0.6,
        }
    }
}

/// Canvas position of every node, index-aligned with `graph.nodes()`.
///
/// A lone exchange sits at the origin.
#[must_use]
pub fn layout_nodes(graph: &ClusterGraph) -> Vec<(f64, f64)> {
    let nodes = graph.nodes();
    let mut positions = vec![(0.0, 0.0); nodes.len()];

    for ring in Ring::ALL {
        let members: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| Ring::of(node.node_type) == ring)
            .map(|(i, _)| i)
            .collect();
        let count = members.len();
        if ring == Ring::Core && count == 1 {
            continue;
        }
        for (k, &index) in members.iter().enumerate() {
            let angle = TAU * k as f64 / count as f64 + ring.offset();
            positions[index] = (ring.radius() * angle.cos(), ring.radius() * angle.sin());
        }
    }

    positions
}

// ============================================================================
// Widget
// ============================================================================

/// Renders a [`ClusterGraph`] with the display categories of `series`.
#[derive(Debug, Clone)]
pub struct ClusterGraphWidget<'a> {
    graph: &'a ClusterGraph,
    series: &'a [SeriesNode],
    cursor: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> ClusterGraphWidget<'a> {
    #[must_use]
    pub const fn new(graph: &'a ClusterGraph, series: &'a [SeriesNode]) -> Self {
        Self {
            graph,
            series,
            cursor: None,
            block: None,
        }
    }

    /// Marks the node at `index` and labels it with its address.
    #[must_use]
    pub const fn cursor(mut self, index: Option<usize>) -> Self {
        self.cursor = index;
        self
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn category(&self, index: usize) -> NodeType {
        self.series
            .get(index)
            .map_or(self.graph.nodes()[index].node_type, |node| node.category)
    }
}

impl Widget for ClusterGraphWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block.clone().unwrap_or_default();

        if self.graph.is_empty() {
            Paragraph::new("No cluster loaded. Start with --address <ADDR> or --graph <FILE>.")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let positions = layout_nodes(self.graph);
        let nodes = self.graph.nodes();

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-BOUND, BOUND])
            .y_bounds([-BOUND, BOUND])
            .paint(|ctx| {
                for edge in self.graph.edges() {
                    let (Some(src), Some(dst)) = (
                        self.graph.position(&edge.src),
                        self.graph.position(&edge.dst),
                    ) else {
                        continue;
                    };
                    let ((x1, y1), (x2, y2)) = (positions[src], positions[dst]);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }
                ctx.layer();

                for (index, &(x, y)) in positions.iter().enumerate() {
                    let style = node_style(self.category(index));
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: style.size * SIZE_SCALE,
                        color: style.color,
                    });
                    ctx.draw(&Points {
                        coords: &[(x, y)],
                        color: style.color,
                    });
                }

                if let Some(index) = self.cursor.filter(|&i| i < nodes.len()) {
                    let (x, y) = positions[index];
                    let label = truncate_address(&nodes[index].id, LABEL_WIDTH);
                    ctx.print(
                        x,
                        y + OUTER_RADIUS / 6.0,
                        Span::styled(
                            format!("▼ {label}"),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        canvas.render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::{SelectionState, build_series};
    use crate::test_utils::{GraphMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend, widgets::Borders};

    fn distance((x, y): (f64, f64)) -> f64 {
        x.hypot(y)
    }

    #[test]
    fn test_layout_places_types_on_rings() {
        let graph = GraphMother::two_senders();
        let positions = layout_nodes(&graph);
        let at = |id: &str| positions[graph.position(id).unwrap()];

        assert_eq!(at(GraphMother::ADDR_C), (0.0, 0.0));
        assert!((distance(at(GraphMother::ADDR_B)) - MIDDLE_RADIUS).abs() < 1e-9);
        assert!((distance(at(GraphMother::ADDR_A)) - OUTER_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn test_layout_spreads_leaves_evenly() {
        let graph = GraphMother::leaves(8);
        let positions = layout_nodes(&graph);
        let leaves: Vec<_> = graph
            .nodes()
            .iter()
            .zip(&positions)
            .filter(|(node, _)| node.node_type == NodeType::Leaf)
            .map(|(_, &p)| p)
            .collect();

        assert_eq!(leaves.len(), 8);
        for (i, a) in leaves.iter().enumerate() {
            assert!((distance(*a) - OUTER_RADIUS).abs() < 1e-9);
            for b in &leaves[i + 1..] {
                assert!(distance((a.0 - b.0, a.1 - b.1)) > 0.1);
            }
        }
    }

    #[test]
    fn test_empty_graph_shows_hint() {
        let graph = ClusterGraph::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(
                    ClusterGraphWidget::new(&graph, &[]).block(Block::default().borders(Borders::ALL)),
                    frame.area(),
                );
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No cluster loaded"));
    }

    #[test]
    fn test_cursor_node_is_labelled() {
        let graph = GraphMother::two_senders();
        let series = build_series(&graph, &SelectionState::new());
        let cursor = graph.position(GraphMother::ADDR_B);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(
                    ClusterGraphWidget::new(&graph, &series).cursor(cursor),
                    frame.area(),
                );
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("0xBBB...00002"));
        assert!(!text.contains("0xAAA...00001"));
    }

    #[test]
    fn test_selected_node_uses_selected_style() {
        let graph = GraphMother::two_senders();
        let mut selection = SelectionState::new();
        selection.insert(GraphMother::ADDR_A);
        let series = build_series(&graph, &selection);
        let widget = ClusterGraphWidget::new(&graph, &series);

        let index = graph.position(GraphMother::ADDR_A).unwrap();
        assert_eq!(widget.category(index), NodeType::Selected);
        let other = graph.position(GraphMother::ADDR_C).unwrap();
        assert_eq!(widget.category(other), NodeType::Exchange);
    }
}
