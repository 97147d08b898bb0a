//! Cluster graph model.
//!
//! The server describes a cluster as a list of address nodes and a list of
//! directed edges between them. [`GraphData`] mirrors that wire shape and
//! [`ClusterGraph`] is the processed form the UI works with: per-node
//! amounts accumulated from outgoing edges, an id index, and normalized
//! transaction rows on every edge.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ClusterError;
use super::transaction::{Transaction, TxRef};

// ============================================================================
// Node Type
// ============================================================================

/// Semantic category of a cluster node.
///
/// `Selected` is never sent by the server; it is the display category that
/// overrides the semantic one while a node is in the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Exchange,
    Deposit,
    #[default]
    Leaf,
    Selected,
    #[serde(other)]
    Unknown,
}

impl NodeType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Deposit => "deposit",
            Self::Leaf => "leaf",
            Self::Selected => "selected",
            Self::Unknown => "unknown",
        }
    }

    /// Display category of a node, taking the selection into account.
    #[must_use]
    pub const fn display(self, selected: bool) -> Self {
        if selected { Self::Selected } else { self }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// An edge amount, sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Default for Amount {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl Amount {
    /// Numeric value. Unparseable text counts as zero.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or_else(|_| {
                warn!(amount = %s, "unparseable edge amount, counting as 0");
                0.0
            }),
        }
    }
}

/// Raw cluster graph as delivered by the server or read from a file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawNode {
    pub id: String,
    #[serde(default)]
    pub props: NodeProps,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NodeProps {
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEdge {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub props: EdgeProps,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EdgeProps {
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub txs: Vec<TxRef>,
}

impl GraphData {
    /// Parses a graph from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::Parse`] when the text is not a valid graph.
    pub fn from_json_str(content: &str) -> Result<Self, ClusterError> {
        Ok(serde_json::from_str(content)?)
    }
}

// ============================================================================
// Processed Graph
// ============================================================================

/// A node of the processed graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub name: Option<String>,
    pub node_type: NodeType,
    /// Sum of the amounts of all edges leaving this node.
    pub amount: f64,
}

/// A directed edge of the processed graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub src: String,
    pub dst: String,
    pub amount: f64,
    pub txs: Vec<Transaction>,
}

/// Processed cluster graph.
#[derive(Debug, Clone, Default)]
pub struct ClusterGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    index: HashMap<String, usize>,
}

impl ClusterGraph {
    /// Builds the processed graph from raw data.
    ///
    /// Duplicate node ids keep their first occurrence. Edges whose source
    /// is not a known node still appear in the edge list but contribute to
    /// no node amount.
    #[must_use]
    pub fn from_data(data: GraphData) -> Self {
        let mut nodes = Vec::with_capacity(data.nodes.len());
        let mut index = HashMap::with_capacity(data.nodes.len());

        for raw in data.nodes {
            if index.contains_key(&raw.id) {
                warn!(id = %raw.id, "duplicate node id in cluster graph");
                continue;
            }
            index.insert(raw.id.clone(), nodes.len());
            nodes.push(GraphNode {
                id: raw.id,
                name: raw.props.name,
                node_type: raw.props.node_type,
                amount: 0.0,
            });
        }

        let mut edges = Vec::with_capacity(data.edges.len());
        for raw in data.edges {
            let amount = raw.props.amount.value();
            match index.get(&raw.src) {
                Some(&i) => nodes[i].amount += amount,
                None => warn!(src = %raw.src, "edge source is not a cluster node"),
            }
            edges.push(GraphEdge {
                src: raw.src,
                dst: raw.dst,
                amount,
                txs: raw
                    .props
                    .txs
                    .into_iter()
                    .filter_map(TxRef::into_transaction)
                    .collect(),
            });
        }

        Self {
            nodes,
            edges,
            index,
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in server order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Edges that start or end at the given node.
    pub fn edges_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.src == id || e.dst == id)
    }

    /// Transactions of every edge touching the given node, flattened.
    ///
    /// Transactions without their own amount inherit the edge amount when
    /// the edge carries exactly one transaction.
    #[must_use]
    pub fn transactions_of(&self, id: &str) -> Vec<Transaction> {
        self.edges_of(id)
            .flat_map(|edge| {
                let single = edge.txs.len() == 1;
                edge.txs.iter().cloned().map(move |mut tx| {
                    if tx.amount.is_none() && single {
                        tx.amount = Some(edge.amount);
                    }
                    tx
                })
            })
            .collect()
    }

    /// Total transferred amount of the cluster, excluding deposit nodes.
    #[must_use]
    pub fn aggregate_amount(&self) -> f64 {
        self.nodes
            .iter()
            .filter(|n| n.node_type != NodeType::Deposit)
            .map(|n| n.amount)
            .sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn sample() -> ClusterGraph {
        let data: GraphData = serde_json::from_value(json!({
            "nodes": [
                {"id": "0xA", "props": {"type": "exchange", "name": "Binance"}},
                {"id": "0xB", "props": {"type": "deposit"}},
                {"id": "0xC", "props": {"type": "leaf"}}
            ],
            "edges": [
                {"src": "0xC", "dst": "0xB", "props": {"amount": "1.5", "txs": ["0x01"]}},
                {"src": "0xC", "dst": "0xB", "props": {"amount": 0.5, "txs": []}},
                {"src": "0xB", "dst": "0xA", "props": {"amount": 2, "txs": ["0x02", "0x03"]}}
            ]
        }))
        .expect("sample graph should parse");
        ClusterGraph::from_data(data)
    }

    #[test]
    fn test_node_amount_is_sum_of_outgoing_edges() {
        let graph = sample();
        assert_eq!(graph.node("0xC").unwrap().amount, 2.0);
        assert_eq!(graph.node("0xB").unwrap().amount, 2.0);
        assert_eq!(graph.node("0xA").unwrap().amount, 0.0);
    }

    #[test]
    fn test_aggregate_excludes_deposits() {
        let graph = sample();
        assert_eq!(graph.aggregate_amount(), 2.0);
    }

    #[test]
    fn test_edges_of_and_transactions() {
        let graph = sample();
        assert_eq!(graph.edges_of("0xB").count(), 3);

        let txs = graph.transactions_of("0xC");
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, Some(1.5));

        let txs = graph.transactions_of("0xA");
        assert_eq!(txs.len(), 2);
        assert!(txs.iter().all(|t| t.amount.is_none()));
    }

    #[test]
    fn test_unknown_source_is_ignored_for_amounts() {
        let data: GraphData = serde_json::from_value(json!({
            "nodes": [{"id": "0xA", "props": {"type": "leaf"}}],
            "edges": [{"src": "0xZ", "dst": "0xA", "props": {"amount": 4}}]
        }))
        .unwrap();
        let graph = ClusterGraph::from_data(data);
        assert_eq!(graph.node("0xA").unwrap().amount, 0.0);
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_duplicate_nodes_keep_first() {
        let data: GraphData = serde_json::from_value(json!({
            "nodes": [
                {"id": "0xA", "props": {"type": "exchange"}},
                {"id": "0xA", "props": {"type": "leaf"}}
            ]
        }))
        .unwrap();
        let graph = ClusterGraph::from_data(data);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.node("0xA").unwrap().node_type, NodeType::Exchange);
    }

    #[rstest]
    #[case("\"exchange\"", NodeType::Exchange)]
    #[case("\"deposit\"", NodeType::Deposit)]
    #[case("\"leaf\"", NodeType::Leaf)]
    #[case("\"contract\"", NodeType::Unknown)]
    fn test_node_type_parsing(#[case] raw: &str, #[case] expected: NodeType) {
        let parsed: NodeType = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case(Amount::Number(1.5), 1.5)]
    #[case(Amount::Text(" 2.25 ".into()), 2.25)]
    #[case(Amount::Text("n/a".into()), 0.0)]
    fn test_amount_value(#[case] amount: Amount, #[case] expected: f64) {
        assert_eq!(amount.value(), expected);
    }

    #[test]
    fn test_display_category_overrides_type() {
        assert_eq!(NodeType::Deposit.display(true), NodeType::Selected);
        assert_eq!(NodeType::Deposit.display(false), NodeType::Deposit);
    }
}
