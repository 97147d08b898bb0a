//! Domain types for the clustering client.
//!
//! This module contains the wire and domain models shared by the HTTP
//! client, the application state and the UI:
//!
//! - [`graph`] - cluster graph (nodes, edges, accumulated amounts)
//! - [`transaction`] - transaction references carried on edges
//! - [`exchange`] - exchange address list and management requests
//! - [`refresh`] - database refresh requests and server status
//! - [`auth`] - password hashing
//! - [`export`] - JSON and CSV export of addresses
//! - [`error`] - error taxonomy for backend operations

pub mod auth;
pub mod error;
pub mod exchange;
pub mod export;
pub mod graph;
pub mod refresh;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{LoginRequest, hash_password};
pub use error::ClusterError;
pub use exchange::{ExchangeEntry, ExchangeOp, OperationResult, UploadOption};
pub use export::ExportFormat;
pub use graph::{ClusterGraph, GraphData, GraphNode, NodeType};
pub use refresh::{ClusterResponse, RefreshInputError, RefreshRequest, RefreshResponse};
pub use transaction::Transaction;
