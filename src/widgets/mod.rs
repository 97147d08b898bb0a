//! Reusable widget components for the ethcluster TUI.
//!
//! - [`helpers`]: formatting of addresses and Ether amounts
//! - [`cluster_graph`]: the cluster graph canvas

pub mod cluster_graph;
pub mod helpers;

pub use cluster_graph::ClusterGraphWidget;
