//! Table view rendering.
//!
//! Draws a [`TableView`] page: optional search bar, header, the rows of the
//! current page and a pager line. Highlighted rows (selected entities) and
//! the cursor row are styled independently so both can be seen at once.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::domain::NodeType;
use crate::state::table::{CellFormatter, Column, ColumnWidth, TableRow, TableView};
use crate::theme::{
    HEADER_STYLE, HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR, SELECTED_STYLE,
    node_style,
};

/// Renders `table` into `area`. The cursor row is only marked when
/// `focused` is set.
pub fn render_table(frame: &mut Frame, area: Rect, table: &TableView, focused: bool) {
    let show_search = table.is_search_focused() || !table.query().is_empty();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::from(show_search)),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    if show_search {
        frame.render_widget(Paragraph::new(search_line(table)), chunks[0]);
    }

    if table.filtered_len() == 0 {
        frame.render_widget(
            Paragraph::new("No matching rows").style(Style::default().fg(MUTED_COLOR)),
            chunks[1],
        );
    } else {
        frame.render_widget(build_table(table, focused), chunks[1]);
    }

    frame.render_widget(
        Paragraph::new(pager_line(table)).style(Style::default().fg(MUTED_COLOR)),
        chunks[2],
    );
}

fn search_line(table: &TableView) -> Line<'static> {
    let cursor = if table.is_search_focused() { "▏" } else { "" };
    Line::from(vec![
        Span::styled(
            "Search: ",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}{cursor}", table.query())),
    ])
}

fn pager_line(table: &TableView) -> String {
    format!(
        "Page {}/{} · {} rows",
        table.page() + 1,
        table.page_count(),
        table.filtered_len()
    )
}

fn build_table(table: &TableView, focused: bool) -> Table<'static> {
    let columns: Vec<&Column> = table.columns().iter().filter(|c| !c.hidden).collect();

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|column| match column.width {
            ColumnWidth::Percent(p) => Constraint::Percentage(p),
            ColumnWidth::Fill => Constraint::Fill(1),
        })
        .collect();

    let header = Row::new(columns.iter().map(|c| Cell::from(c.title))).style(HEADER_STYLE);

    let rows: Vec<Row> = table
        .page_rows()
        .map(|(position, row)| {
            let cells = table
                .columns()
                .iter()
                .enumerate()
                .filter(|(_, column)| !column.hidden)
                .map(|(index, column)| format_cell(column.formatter, row, index));

            let mut style = Style::default();
            if table.is_highlighted(&row.key) {
                style = style.patch(HIGHLIGHT_STYLE);
            }
            if focused && position == table.cursor() {
                style = style.patch(SELECTED_STYLE);
            }
            Row::new(cells).style(style)
        })
        .collect();

    Table::new(rows, widths).header(header).column_spacing(1)
}

fn format_cell(formatter: CellFormatter, row: &TableRow, index: usize) -> Cell<'static> {
    let text = row.cells.get(index).cloned().unwrap_or_default();
    match formatter {
        CellFormatter::Text => Cell::from(text),
        CellFormatter::CategorySquare => {
            let color = node_style(row.category.unwrap_or(NodeType::Unknown)).color;
            Cell::from(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(text),
            ]))
        }
        CellFormatter::TxLink => Cell::from(Span::styled(
            "↗ etherscan",
            Style::default().fg(SECONDARY_COLOR),
        )),
        CellFormatter::AddressActions => Cell::from(Span::styled(
            "[o] [e] [d]",
            Style::default().fg(SECONDARY_COLOR),
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DataState;
    use crate::test_utils::{GraphMother, ServerMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(table: &TableView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_table(frame, frame.area(), table, true))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_results_rows_show_category_square() {
        let mut data = DataState::new();
        data.load_graph(GraphMother::two_senders());
        let text = render_to_text(data.results_table.as_ref().unwrap(), 60, 8);

        assert!(text.contains("Entity"));
        assert!(text.contains(&format!("■ {}", GraphMother::ADDR_A)));
        assert!(text.contains("Page 1/1 · 3 rows"));
        assert!(!text.contains("Search:"));
    }

    #[test]
    fn test_actions_column_follows_login() {
        let mut data = DataState::new();
        data.set_exchange_list(&ServerMother::exchange_entries(), false);
        let text = render_to_text(data.exchange_table.as_ref().unwrap(), 110, 6);
        assert!(text.contains("Binance"));
        assert!(!text.contains("[e]"));

        data.set_exchange_list(&ServerMother::exchange_entries(), true);
        let text = render_to_text(data.exchange_table.as_ref().unwrap(), 110, 6);
        assert!(text.contains("Actions"));
        assert!(text.contains("[o] [e] [d]"));
    }

    #[test]
    fn test_search_bar_and_empty_result() {
        let mut data = DataState::new();
        data.load_graph(GraphMother::two_senders());
        let table = data.results_table.as_mut().unwrap();
        table.focus_search();
        for c in "zzz".chars() {
            let _ = table.search_type_char(c);
        }

        let text = render_to_text(table, 60, 8);
        assert!(text.contains("Search: zzz▏"));
        assert!(text.contains("No matching rows"));
        assert!(text.contains("Page 1/1 · 0 rows"));
    }

    #[test]
    fn test_pager_counts_pages() {
        let mut data = DataState::new();
        data.load_graph(GraphMother::leaves(25));
        let table = data.results_table.as_mut().unwrap();
        table.next_page();
        let text = render_to_text(table, 60, 30);
        assert!(text.contains("Page 2/2 · 26 rows"));
    }
}
