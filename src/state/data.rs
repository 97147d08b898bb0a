//! Data state management for the ethcluster TUI.
//!
//! This module manages all application data including:
//! - The cluster graph and the node series derived from it
//! - The selection set and the summary labels
//! - The cached table views (results, exchange list, transactions)
//! - Server status shown in the header
//!
//! # Design
//!
//! Every mutation of the selection goes through [`DataState::sync_selection`],
//! which re-derives the graph series, the labels and the results table
//! highlights from the selection set alone.

use crate::domain::refresh::ClientData;
use crate::domain::{ClusterGraph, ExchangeEntry, RefreshResponse, Transaction};

use super::selection::{ClusterSummary, SelectionState, SeriesNode, build_series};
use super::table::{CellFormatter, Column, ColumnWidth, SearchListener, TableRow, TableView};

// ============================================================================
// Server Status
// ============================================================================

/// Blockchain client state as last reported by the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ClientStatus {
    /// No status received yet.
    #[default]
    Unknown,
    Up(ClientData),
    Down,
}

/// Counters and status shown in the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuStats {
    pub exchanges: u64,
    pub deposits: u64,
    pub leafs: u64,
    /// Number of known exchanges, the base of the refresh scope.
    pub exch_len: u64,
    pub client: ClientStatus,
}

impl MenuStats {
    /// Applies a status payload from the server.
    pub fn apply(&mut self, response: &RefreshResponse) {
        self.exchanges = response.addrs_count.exchanges;
        self.deposits = response.addrs_count.deposits;
        self.leafs = response.addrs_count.leafs;
        self.exch_len = response.exch_len;
        self.client = match &response.client_data {
            Some(data) => ClientStatus::Up(data.clone()),
            None => ClientStatus::Down,
        };
    }

    /// Refresh is offered unless the server reported its client down.
    #[must_use]
    pub fn refresh_enabled(&self) -> bool {
        !matches!(self.client, ClientStatus::Down)
    }
}

// ============================================================================
// Table Schemas
// ============================================================================

/// Index of the actions column in the exchange table.
pub const EXCHANGE_ACTIONS_COLUMN: usize = 2;

fn results_columns() -> Vec<Column> {
    vec![Column::formatted(
        "Entity",
        ColumnWidth::Fill,
        CellFormatter::CategorySquare,
    )]
}

fn results_rows(graph: &ClusterGraph) -> Vec<TableRow> {
    graph
        .nodes()
        .iter()
        .map(|node| TableRow::new(&node.id, vec![node.id.clone()]).with_category(node.node_type))
        .collect()
}

fn exchange_columns(logged_in: bool) -> Vec<Column> {
    vec![
        Column::text("Exchange address", ColumnWidth::Percent(50)),
        Column::text("Exchange name", ColumnWidth::Fill),
        Column::formatted("Actions", ColumnWidth::Percent(12), CellFormatter::AddressActions)
            .hidden(!logged_in),
    ]
}

fn exchange_rows(entries: &[ExchangeEntry]) -> Vec<TableRow> {
    entries
        .iter()
        .map(|e| TableRow::new(&e.address, vec![e.address.clone(), e.name.clone(), String::new()]))
        .collect()
}

fn tx_columns() -> Vec<Column> {
    vec![
        Column::text("Transaction", ColumnWidth::Percent(50)),
        Column::text("Time", ColumnWidth::Percent(22)),
        Column::text("Amount", ColumnWidth::Percent(18)),
        Column::formatted("Actions", ColumnWidth::Fill, CellFormatter::TxLink),
    ]
}

fn tx_rows(txs: &[Transaction]) -> Vec<TableRow> {
    txs.iter()
        .map(|tx| {
            let amount = tx
                .amount
                .map_or_else(|| "-".to_string(), |a| format!("{a:.3}"));
            TableRow::new(
                &tx.hash,
                vec![tx.hash.clone(), tx.time.clone(), amount, String::new()],
            )
        })
        .collect()
}

// ============================================================================
// Data State
// ============================================================================

#[derive(Debug, Default)]
pub struct DataState {
    // === Cluster ===
    pub graph: ClusterGraph,
    /// Node series as drawn by the graph widget.
    pub series: Vec<SeriesNode>,
    pub summary: ClusterSummary,
    pub selection: SelectionState,
    /// Address the cluster was requested for.
    pub user_address: Option<String>,

    // === Tables ===
    pub results_table: Option<TableView>,
    pub exchange_table: Option<TableView>,
    pub tx_table: Option<TableView>,
    /// Node whose transactions the tx table shows.
    pub tx_node: Option<String>,

    // === Status ===
    pub menu: MenuStats,
}

impl DataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Graph
    // ========================================================================

    /// Installs a new cluster graph.
    ///
    /// An existing results table is updated in place so its search listener
    /// and query survive; otherwise a new table is built and the listener
    /// installed. Selected ids missing from the new graph are dropped, and
    /// the user-entered address is highlighted.
    pub fn load_graph(&mut self, graph: ClusterGraph) {
        let rows = results_rows(&graph);
        match self.results_table.as_mut() {
            Some(table) => table.update_rows(rows),
            None => {
                let mut table = TableView::new(results_columns(), rows);
                table.install_search_listener(SearchListener::default());
                self.results_table = Some(table);
            }
        }

        self.selection.retain(|id| graph.node(id).is_some());
        self.graph = graph;

        match self.user_address.clone() {
            Some(address) => self.set_highlight(&address, true),
            None => self.sync_selection(),
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Re-derives series, labels and highlights from the selection set.
    pub fn sync_selection(&mut self) {
        self.series = build_series(&self.graph, &self.selection);
        self.summary = ClusterSummary::compute(&self.graph, &self.selection);
        if let Some(table) = self.results_table.as_mut() {
            table.set_highlighted(self.selection.iter());
        }
    }

    /// Debounced search handler: the selection becomes exactly the rows
    /// matching `query`. An empty query clears it.
    pub fn apply_search_query(&mut self, query: &str) {
        if query.is_empty() {
            self.selection.clear();
        } else if let Some(table) = self.results_table.as_ref() {
            self.selection.replace(table.matching_keys(query));
        }
        self.sync_selection();
    }

    /// Adds (or removes) every results row containing `address`.
    pub fn set_highlight(&mut self, address: &str, highlight: bool) {
        let keys = self
            .results_table
            .as_ref()
            .map(|table| table.rows_containing(address))
            .unwrap_or_default();
        for key in keys {
            if highlight {
                self.selection.insert(key);
            } else {
                self.selection.remove(&key);
            }
        }
        self.sync_selection();
    }

    /// Toggles a single node.
    pub fn toggle_node(&mut self, id: &str) {
        self.selection.toggle(id);
        self.sync_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.sync_selection();
    }

    /// Addresses to export: the selection, or every node when empty.
    #[must_use]
    pub fn export_nodes(&self) -> Vec<String> {
        if self.selection.is_empty() {
            self.graph.addresses().map(String::from).collect()
        } else {
            self.selection.iter().cloned().collect()
        }
    }

    // ========================================================================
    // Exchange List
    // ========================================================================

    /// Stores a freshly fetched exchange list, updating the cached table
    /// when one exists. The actions column is shown only when logged in.
    pub fn set_exchange_list(&mut self, entries: &[ExchangeEntry], logged_in: bool) {
        let rows = exchange_rows(entries);
        match self.exchange_table.as_mut() {
            Some(table) => {
                table.set_column_hidden(EXCHANGE_ACTIONS_COLUMN, !logged_in);
                table.update_rows(rows);
            }
            None => self.exchange_table = Some(TableView::new(exchange_columns(logged_in), rows)),
        }
    }

    /// Name of an exchange address from the cached table.
    #[must_use]
    pub fn exchange_name(&self, address: &str) -> Option<&str> {
        self.exchange_table
            .as_ref()?
            .rows()
            .iter()
            .find(|row| row.key == address)
            .and_then(|row| row.cells.get(1))
            .map(String::as_str)
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Builds the transactions table for a node. Returns the row count.
    pub fn load_transactions(&mut self, id: &str) -> usize {
        let txs = self.graph.transactions_of(id);
        let count = txs.len();
        self.tx_table = Some(TableView::new(tx_columns(), tx_rows(&txs)));
        self.tx_node = Some(id.to_string());
        count
    }
}

// ============================================================================
// Tests
// ============================================================================
