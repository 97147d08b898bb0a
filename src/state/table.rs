//! Paginated, searchable table views.
//!
//! A [`TableView`] owns a fixed column schema and a full row set. It filters
//! rows by a case-insensitive substring query, pages the result 20 rows at a
//! time and tracks a cursor. Rows are identified by a key (an address or a
//! transaction hash) so highlight state survives data updates.
//!
//! The table itself never touches the selection set. A caller that wants to
//! react to search keystrokes installs a [`SearchListener`]; keystrokes then
//! return a [`SearchEvent`] the caller schedules. Replacing the rows through
//! [`TableView::update_rows`] keeps the listener installed. Building a new
//! table does not carry one over.

use std::collections::HashSet;
use std::time::Duration;

use crate::constants::{PAGE_SIZE, SEARCH_DEBOUNCE, address_url, tx_url};
use crate::domain::NodeType;

// ============================================================================
// Schema
// ============================================================================

/// Width of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Percent(u16),
    Fill,
}

/// How the cells of a column are rendered and which action they offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormatter {
    /// Plain text.
    Text,
    /// Colored square of the row's node category, followed by the text.
    CategorySquare,
    /// External link to the explorer page of the transaction in column 0.
    TxLink,
    /// Explorer, edit and delete actions for the address in column 0.
    AddressActions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: ColumnWidth,
    pub formatter: CellFormatter,
    pub hidden: bool,
}

impl Column {
    #[must_use]
    pub const fn text(title: &'static str, width: ColumnWidth) -> Self {
        Self {
            title,
            width,
            formatter: CellFormatter::Text,
            hidden: false,
        }
    }

    #[must_use]
    pub const fn formatted(title: &'static str, width: ColumnWidth, formatter: CellFormatter) -> Self {
        Self {
            title,
            width,
            formatter,
            hidden: false,
        }
    }

    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Stable identity of the row (address or hash).
    pub key: String,
    pub cells: Vec<String>,
    /// Semantic category, for tables listing graph nodes.
    pub category: Option<NodeType>,
}

impl TableRow {
    #[must_use]
    pub fn new(key: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            key: key.into(),
            cells,
            category: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: NodeType) -> Self {
        self.category = Some(category);
        self
    }

    /// Concatenated cell text, as matched by the search.
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }

    fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.text().to_lowercase().contains(needle_lower)
    }
}

// ============================================================================
// Search Listener
// ============================================================================

/// Marker installed by the app on tables whose search drives the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchListener {
    pub debounce: Duration,
}

impl Default for SearchListener {
    fn default() -> Self {
        Self {
            debounce: SEARCH_DEBOUNCE,
        }
    }
}

/// Emitted for each search keystroke while a listener is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEvent {
    pub query: String,
    pub debounce: Duration,
}

// ============================================================================
// Table View
// ============================================================================

#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<Column>,
    rows: Vec<TableRow>,
    /// Indices into `rows` that match the query.
    filtered: Vec<usize>,
    query: String,
    search_focused: bool,
    /// Cursor position within `filtered`.
    cursor: usize,
    highlighted: HashSet<String>,
    listener: Option<SearchListener>,
}

impl TableView {
    #[must_use]
    pub fn new(columns: Vec<Column>, rows: Vec<TableRow>) -> Self {
        let mut table = Self {
            columns,
            rows,
            filtered: Vec::new(),
            query: String::new(),
            search_focused: false,
            cursor: 0,
            highlighted: HashSet::new(),
            listener: None,
        };
        table.force_render();
        table
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Replaces the row set without rebuilding the view.
    ///
    /// Query, listener and highlights are kept; the cursor is clamped.
    pub fn update_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.force_render();
    }

    /// Re-derives the filtered view and clamps the cursor.
    pub fn force_render(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.matches(&needle))
            .map(|(i, _)| i)
            .collect();
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn set_column_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(column) = self.columns.get_mut(index) {
            column.hidden = hidden;
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Keys of all rows whose text contains `query`, case-insensitively.
    #[must_use]
    pub fn matching_keys(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.matches(&needle))
            .map(|row| row.key.clone())
            .collect()
    }

    /// Keys of all rows whose text contains `needle` verbatim.
    #[must_use]
    pub fn rows_containing(&self, needle: &str) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.text().contains(needle))
            .map(|row| row.key.clone())
            .collect()
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn install_search_listener(&mut self, listener: SearchListener) {
        self.listener = Some(listener);
    }

    #[must_use]
    pub fn has_search_listener(&self) -> bool {
        self.listener.is_some()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn unfocus_search(&mut self) {
        self.search_focused = false;
    }

    /// Appends a character to the query.
    pub fn search_type_char(&mut self, c: char) -> Option<SearchEvent> {
        self.query.push(c);
        self.after_query_change()
    }

    /// Removes the last character of the query.
    pub fn search_backspace(&mut self) -> Option<SearchEvent> {
        self.query.pop();
        self.after_query_change()
    }

    fn after_query_change(&mut self) -> Option<SearchEvent> {
        self.cursor = 0;
        self.force_render();
        self.listener.map(|listener| SearchEvent {
            query: self.query.clone(),
            debounce: listener.debounce,
        })
    }

    // ========================================================================
    // Pagination & Cursor
    // ========================================================================

    #[must_use]
    pub fn page(&self) -> usize {
        self.cursor / PAGE_SIZE
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Rows of the current page, with their absolute cursor position.
    pub fn page_rows(&self) -> impl Iterator<Item = (usize, &TableRow)> {
        let start = self.page() * PAGE_SIZE;
        self.filtered
            .iter()
            .enumerate()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|(pos, &i)| (pos, &self.rows[i]))
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.page() + 1 < self.page_count() {
            self.cursor = (self.page() + 1) * PAGE_SIZE;
        }
    }

    pub fn prev_page(&mut self) {
        self.cursor = self.page().saturating_sub(1) * PAGE_SIZE;
    }

    /// Row under the cursor.
    #[must_use]
    pub fn selected_row(&self) -> Option<&TableRow> {
        self.filtered.get(self.cursor).map(|&i| &self.rows[i])
    }

    /// Moves the cursor to the row with the given key, if it is visible.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.filtered.iter().position(|&i| self.rows[i].key == key) {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Highlights
    // ========================================================================

    /// Replaces the highlighted keys.
    pub fn set_highlighted<'a>(&mut self, keys: impl IntoIterator<Item = &'a String>) {
        self.highlighted = keys.into_iter().cloned().collect();
    }

    #[must_use]
    pub fn is_highlighted(&self, key: &str) -> bool {
        self.highlighted.contains(key)
    }

    #[must_use]
    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Explorer link offered by the row under the cursor, if any column has one.
    #[must_use]
    pub fn link_for_selected(&self) -> Option<String> {
        let row = self.selected_row()?;
        let first = row.cells.first()?;
        self.columns
            .iter()
            .filter(|c| !c.hidden)
            .find_map(|column| match column.formatter {
                CellFormatter::TxLink => Some(tx_url(first)),
                CellFormatter::AddressActions => Some(address_url(first)),
                CellFormatter::Text | CellFormatter::CategorySquare => None,
            })
    }

    /// Whether the row actions (edit/delete) are currently available.
    #[must_use]
    pub fn has_row_actions(&self) -> bool {
        self.columns
            .iter()
            .any(|c| !c.hidden && c.formatter == CellFormatter::AddressActions)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address_rows(count: usize) -> Vec<TableRow> {
        (0..count)
            .map(|i| TableRow::new(format!("0x{i:04X}"), vec![format!("0x{i:04X}")]))
            .collect()
    }

    fn table(count: usize) -> TableView {
        TableView::new(
            vec![Column::text("Entity", ColumnWidth::Fill)],
            address_rows(count),
        )
    }

    #[test]
    fn test_pagination_is_twenty_rows() {
        let mut t = table(45);
        assert_eq!(t.page_count(), 3);
        assert_eq!(t.page_rows().count(), 20);
        t.next_page();
        t.next_page();
        assert_eq!(t.page(), 2);
        assert_eq!(t.page_rows().count(), 5);
        t.next_page();
        assert_eq!(t.page(), 2);
        t.prev_page();
        assert_eq!(t.cursor(), 20);
    }

    #[test]
    fn test_empty_table_has_one_page() {
        let t = table(0);
        assert_eq!(t.page_count(), 1);
        assert!(t.selected_row().is_none());
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut t = table(30);
        for c in "0x001".chars() {
            t.search_type_char(c);
        }
        assert_eq!(t.filtered_len(), 14);
        t.search_backspace();
        t.search_type_char('1');
        t.search_type_char('a');
        assert_eq!(t.query(), "0x001a");
        assert_eq!(t.filtered_len(), 1);
        assert_eq!(t.selected_row().unwrap().key, "0x001A");
    }

    #[test]
    fn test_keystroke_without_listener_emits_nothing() {
        let mut t = table(3);
        assert!(t.search_type_char('0').is_none());
    }

    #[test]
    fn test_update_keeps_listener_and_query() {
        let mut t = table(3);
        t.install_search_listener(SearchListener::default());
        t.search_type_char('2');

        t.update_rows(address_rows(40));

        assert!(t.has_search_listener());
        assert_eq!(t.query(), "2");
        let event = t.search_type_char('1').expect("listener should still fire");
        assert_eq!(event.query, "21");
        assert_eq!(event.debounce, SEARCH_DEBOUNCE);
    }

    #[test]
    fn test_new_table_has_no_listener() {
        let mut t = table(3);
        t.install_search_listener(SearchListener::default());
        let rebuilt = TableView::new(t.columns().to_vec(), t.rows().to_vec());
        assert!(!rebuilt.has_search_listener());
    }

    #[test]
    fn test_update_clamps_cursor() {
        let mut t = table(30);
        for _ in 0..25 {
            t.move_down();
        }
        t.update_rows(address_rows(5));
        assert_eq!(t.cursor(), 4);
    }

    #[test]
    fn test_matching_and_containing_keys() {
        let t = table(12);
        assert_eq!(t.matching_keys("0x000a"), vec!["0x000A".to_string()]);
        assert!(t.rows_containing("0x000a").is_empty());
        assert_eq!(t.matching_keys("").len(), 12);
    }

    #[test]
    fn test_links_follow_formatters() {
        let t = TableView::new(
            vec![
                Column::text("Transaction", ColumnWidth::Percent(50)),
                Column::formatted("", ColumnWidth::Fill, CellFormatter::TxLink),
            ],
            vec![TableRow::new("0xFEED", vec!["0xFEED".into(), String::new()])],
        );
        assert_eq!(
            t.link_for_selected().as_deref(),
            Some("https://etherscan.io/tx/0xFEED")
        );

        let mut t = TableView::new(
            vec![
                Column::text("Exchange address", ColumnWidth::Percent(50)),
                Column::formatted("Actions", ColumnWidth::Fill, CellFormatter::AddressActions)
                    .hidden(true),
            ],
            vec![TableRow::new("0xAB", vec!["0xAB".into(), String::new()])],
        );
        assert!(t.link_for_selected().is_none());
        assert!(!t.has_row_actions());
        t.set_column_hidden(1, false);
        assert_eq!(
            t.link_for_selected().as_deref(),
            Some("https://etherscan.io/address/0xab")
        );
        assert!(t.has_row_actions());
    }

    #[test]
    fn test_highlights_survive_update() {
        let mut t = table(3);
        let keys = vec!["0x0001".to_string()];
        t.set_highlighted(&keys);
        t.update_rows(address_rows(4));
        assert!(t.is_highlighted("0x0001"));
        assert_eq!(t.highlighted_count(), 1);
    }
}
