//! Main content panels: the results table, the cluster graph and the summary
//! labels under it.
//!
//! Focus is shown with the double border of
//! [`create_border_block`](super::helpers::create_border_block); the cursor
//! row or node is only marked inside the focused panel.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::render_table;
use super::helpers::create_border_block;
use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, node_style};
use crate::widgets::ClusterGraphWidget;
use crate::widgets::helpers::format_ether;

// ============================================================================
// Results
// ============================================================================

/// Renders the results table, or a placeholder until a cluster is loaded.
pub fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Results && !app.ui.has_active_modal();
    let block = create_border_block("Results", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.data.results_table.as_ref() {
        Some(table) => render_table(frame, inner, table, focused),
        None => frame.render_widget(
            Paragraph::new("No results yet")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center),
            inner,
        ),
    }
}

// ============================================================================
// Graph
// ============================================================================

pub fn render_graph(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Graph && !app.ui.has_active_modal();
    let title = format!("Cluster graph ({} nodes)", app.data.graph.len());
    let widget = ClusterGraphWidget::new(&app.data.graph, &app.data.series)
        .cursor(focused.then_some(app.ui.graph_cursor))
        .block(create_border_block(&title, focused));
    frame.render_widget(widget, area);
}

// ============================================================================
// Summary
// ============================================================================

/// The two summary labels plus, with the graph focused, the node under the
/// cursor.
pub fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let label_style = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(app.data.summary.count_label.clone(), label_style)),
        Line::from(Span::styled(app.data.summary.amount_label.clone(), label_style)),
    ];

    if app.ui.focus == Focus::Graph
        && let Some(node) = app.data.graph.nodes().get(app.ui.graph_cursor)
    {
        let mut spans = vec![
            Span::styled("■ ", Style::default().fg(node_style(node.node_type).color)),
            Span::raw(node.id.clone()),
            Span::styled(
                format!("  {}  {}", node.node_type, format_ether(node.amount)),
                Style::default().fg(MUTED_COLOR),
            ),
        ];
        if let Some(name) = node
            .name
            .as_deref()
            .or_else(|| app.data.exchange_name(&node.id))
        {
            spans.push(Span::styled(format!("  {name}"), Style::default().fg(MUTED_COLOR)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

// ============================================================================
// Tests
// ============================================================================
