//! HTTP client for the clustering server.
//!
//! - [`http`] - reqwest wrapper with a session cookie jar
//! - [`cluster`] - one typed method per backend endpoint
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ClusterClient, HttpConfig};
//!
//! let client = ClusterClient::new("http://127.0.0.1:8000", HttpConfig::default())?;
//! let exchanges = client.exch_list().await?;
//! ```

pub mod cluster;
pub mod http;


// ============================================================================
// Re-exports
// ============================================================================

pub use cluster::ClusterClient;
pub use http::HttpConfig;
