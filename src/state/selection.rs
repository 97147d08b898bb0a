//! Selection set and everything derived from it.
//!
//! The selection is the single source of truth shared by the results table
//! and the graph. Whenever it changes, the graph node series, the summary
//! labels and the table highlights are recomputed from scratch; none of them
//! is updated incrementally.

use std::collections::BTreeSet;

use crate::domain::{ClusterGraph, NodeType};
use crate::theme::node_style;

// ============================================================================
// Selection Set
// ============================================================================

/// Set of selected node ids. Ordered so exports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.selected.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Toggles membership. Returns `true` if the id is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replaces the whole set.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selected = ids.into_iter().collect();
    }

    /// Drops ids that are not accepted by `keep`.
    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.selected.retain(keep);
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.selected.iter()
    }
}

// ============================================================================
// Graph Series
// ============================================================================

/// A node as the graph widget draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesNode {
    pub id: String,
    pub category: NodeType,
    pub size: f64,
}

/// Builds the node series: selected nodes render as `selected`, the rest
/// under their semantic type, sized from the style table.
#[must_use]
pub fn build_series(graph: &ClusterGraph, selection: &SelectionState) -> Vec<SeriesNode> {
    graph
        .nodes()
        .iter()
        .map(|node| {
            let category = node.node_type.display(selection.contains(&node.id));
            SeriesNode {
                id: node.id.clone(),
                category,
                size: node_style(category).size,
            }
        })
        .collect()
}

// ============================================================================
// Summary Labels
// ============================================================================

/// The two labels under the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub count_label: String,
    pub amount_label: String,
}

impl Default for ClusterSummary {
    fn default() -> Self {
        Self::compute(&ClusterGraph::default(), &SelectionState::default())
    }
}

impl ClusterSummary {
    /// Selection view when something is selected, aggregate view otherwise.
    ///
    /// The aggregate total excludes deposit nodes; the selection total sums
    /// every selected node regardless of its type.
    #[must_use]
    pub fn compute(graph: &ClusterGraph, selection: &SelectionState) -> Self {
        if selection.is_empty() {
            Self {
                count_label: format!("Addresses in cluster: {}", graph.len()),
                amount_label: format!(
                    "Transferred Ether by cluster: {:.3}",
                    graph.aggregate_amount()
                ),
            }
        } else {
            let total: f64 = selection
                .iter()
                .filter_map(|id| graph.node(id))
                .map(|node| node.amount)
                .sum();
            Self {
                count_label: format!("Selected addresses in cluster: {}", selection.len()),
                amount_label: format!("Transferred Ether by selected: {total:.3}"),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::GraphMother;

    #[test]
    fn test_selection_labels() {
        let graph = GraphMother::two_senders();
        let mut selection = SelectionState::new();
        selection.insert(GraphMother::ADDR_A);
        selection.insert(GraphMother::ADDR_B);

        let summary = ClusterSummary::compute(&graph, &selection);
        assert_eq!(summary.count_label, "Selected addresses in cluster: 2");
        assert_eq!(summary.amount_label, "Transferred Ether by selected: 3.750");
    }

    #[test]
    fn test_aggregate_labels_exclude_deposits() {
        let graph = GraphMother::two_senders();
        let summary = ClusterSummary::compute(&graph, &SelectionState::new());
        assert_eq!(summary.count_label, "Addresses in cluster: 3");
        // ADDR_B is a deposit: only ADDR_A's 1.5 counts.
        assert_eq!(summary.amount_label, "Transferred Ether by cluster: 1.500");
    }

    #[test]
    fn test_selected_deposit_still_counts_in_selection_view() {
        let graph = GraphMother::two_senders();
        let mut selection = SelectionState::new();
        selection.insert(GraphMother::ADDR_B);
        let summary = ClusterSummary::compute(&graph, &selection);
        assert_eq!(summary.amount_label, "Transferred Ether by selected: 2.250");
    }

    #[test]
    fn test_unknown_selected_ids_count_but_add_nothing() {
        let graph = GraphMother::two_senders();
        let mut selection = SelectionState::new();
        selection.insert("0xNOT_IN_GRAPH");
        let summary = ClusterSummary::compute(&graph, &selection);
        assert_eq!(summary.count_label, "Selected addresses in cluster: 1");
        assert_eq!(summary.amount_label, "Transferred Ether by selected: 0.000");
    }

    #[test]
    fn test_series_overrides_category_for_selected() {
        let graph = GraphMother::two_senders();
        let mut selection = SelectionState::new();
        selection.insert(GraphMother::ADDR_B);

        let series = build_series(&graph, &selection);
        let b = series.iter().find(|n| n.id == GraphMother::ADDR_B).unwrap();
        assert_eq!(b.category, NodeType::Selected);
        assert_eq!(b.size, node_style(NodeType::Selected).size);

        let a = series.iter().find(|n| n.id == GraphMother::ADDR_A).unwrap();
        assert_eq!(a.category, NodeType::Leaf);

        selection.clear();
        let series = build_series(&graph, &selection);
        let b = series.iter().find(|n| n.id == GraphMother::ADDR_B).unwrap();
        assert_eq!(b.category, NodeType::Deposit);
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle("0x1"));
        assert!(selection.contains("0x1"));
        assert!(!selection.toggle("0x1"));
        assert!(selection.is_empty());
    }
}
