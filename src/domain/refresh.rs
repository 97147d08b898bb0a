//! Database refresh requests and server status payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::graph::GraphData;

// ============================================================================
// Refresh Request
// ============================================================================

/// Reasons a refresh form is rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshInputError {
    #[error("Invalid values: max. height < min. height")]
    InvertedRange,

    #[error("Invalid values: {field} must be a block number")]
    NotANumber { field: &'static str },
}

/// A validated `/refreshDB` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub min_height: u64,
    pub max_height: u64,
    /// Share of known exchanges to include, in percent.
    pub scope: u8,
    /// SHA-512 hex digest of the password; only sent while logged out.
    pub password_hash: Option<String>,
}

impl RefreshRequest {
    /// Validates raw form input. Heights are compared numerically.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshInputError`] when a height is not a number or when
    /// the maximum height is below the minimum height.
    pub fn from_input(
        min_height: &str,
        max_height: &str,
        scope: u8,
        password_hash: Option<String>,
    ) -> Result<Self, RefreshInputError> {
        let min_height = parse_height(min_height, "min. height")?;
        let max_height = parse_height(max_height, "max. height")?;
        if max_height < min_height {
            return Err(RefreshInputError::InvertedRange);
        }
        Ok(Self {
            min_height,
            max_height,
            scope: scope.min(100),
            password_hash,
        })
    }
}

fn parse_height(raw: &str, field: &'static str) -> Result<u64, RefreshInputError> {
    raw.trim()
        .parse()
        .map_err(|_| RefreshInputError::NotANumber { field })
}

/// Number of exchanges covered by a scope percentage.
#[must_use]
pub fn scope_exchange_count(exch_len: u64, scope: u8) -> u64 {
    exch_len * u64::from(scope) / 100
}

// ============================================================================
// Server Status
// ============================================================================

/// Blockchain client status reported by the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientData {
    #[serde(default)]
    pub max_block: Value,
    #[serde(default)]
    pub sync_time: Value,
}

impl ClientData {
    #[must_use]
    pub fn max_block_display(&self) -> String {
        display_value(&self.max_block)
    }

    #[must_use]
    pub fn sync_time_display(&self) -> String {
        display_value(&self.sync_time)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Address counts per category. Missing keys read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddrsCount {
    #[serde(default)]
    pub exchanges: u64,
    #[serde(default)]
    pub deposits: u64,
    #[serde(default)]
    pub leafs: u64,
}

/// Successful `/refreshDB` response body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    #[serde(default)]
    pub client_data: Option<ClientData>,
    #[serde(default)]
    pub exch_len: u64,
    #[serde(default)]
    pub addrs_count: AddrsCount,
}

/// `/search` response: the cluster of an address plus optional status.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResponse {
    #[serde(default)]
    pub results_graph: GraphData,
    #[serde(default)]
    pub client_data: Option<ClientData>,
    #[serde(default)]
    pub exch_len: Option<u64>,
    #[serde(default)]
    pub addrs_count: Option<AddrsCount>,
}

impl ClusterResponse {
    /// Status part of the response, if the server included one.
    #[must_use]
    pub fn status(&self) -> Option<RefreshResponse> {
        if self.client_data.is_none() && self.exch_len.is_none() && self.addrs_count.is_none() {
            return None;
        }
        Some(RefreshResponse {
            client_data: self.client_data.clone(),
            exch_len: self.exch_len.unwrap_or_default(),
            addrs_count: self.addrs_count.unwrap_or_default(),
        })
    }
}
