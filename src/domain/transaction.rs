//! Transaction references carried on cluster edges.
//!
//! The server is not consistent about how it encodes the transactions behind
//! an edge: a bare hash, a `[hash, time, amount]` triple, or an object with
//! named fields all occur. Everything is normalized into [`Transaction`].

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::graph::Amount;

/// A single transaction row, as shown in the transactions table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Transaction hash.
    pub hash: String,
    /// Human readable timestamp, empty when unknown.
    pub time: String,
    /// Transferred amount in Ether, when the server supplies it.
    pub amount: Option<f64>,
}

impl Transaction {
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            time: String::new(),
            amount: None,
        }
    }
}

/// Wire representation of a transaction reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TxRef {
    Hash(String),
    Tuple(Vec<Value>),
    Record {
        #[serde(alias = "txHash", alias = "id")]
        hash: String,
        #[serde(default, alias = "timestamp")]
        time: Option<Value>,
        #[serde(default, alias = "value")]
        amount: Option<Amount>,
    },
}

impl TxRef {
    /// Normalizes the reference. Returns `None` for entries without a hash.
    #[must_use]
    pub fn into_transaction(self) -> Option<Transaction> {
        match self {
            Self::Hash(hash) => Some(Transaction::new(hash)),
            Self::Tuple(values) => {
                let mut parts = values.into_iter();
                let hash = match parts.next()? {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                let time = parts.next().map(|v| format_time(&v)).unwrap_or_default();
                let amount = parts.next().and_then(|v| amount_from_value(&v));
                Some(Transaction { hash, time, amount })
            }
            Self::Record { hash, time, amount } => Some(Transaction {
                hash,
                time: time.as_ref().map(format_time).unwrap_or_default(),
                amount: amount.map(|a| a.value()),
            }),
        }
    }
}

/// Formats a timestamp value. Unix seconds are rendered as UTC, strings
/// are kept verbatim.
#[must_use]
pub fn format_time(value: &Value) -> String {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn amount_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
