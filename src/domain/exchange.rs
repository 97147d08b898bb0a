//! Exchange address list and its management requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ClusterError;

/// Literal the server uses in `result` to signal success.
pub const SUCCESS_RESULT: &str = "success";

/// One row of the exchange address list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeEntry {
    pub address: String,
    pub name: String,
}

/// Parses the `/exchList` body, a JSON object mapping address to name.
///
/// # Errors
///
/// Returns [`ClusterError::Parse`] if the body is not a JSON object.
pub fn parse_exchange_list(body: Value) -> Result<Vec<ExchangeEntry>, ClusterError> {
    let Value::Object(map) = body else {
        return Err(ClusterError::parse("exchange list is not a JSON object"));
    };
    Ok(map
        .into_iter()
        .map(|(address, name)| ExchangeEntry {
            address,
            name: match name {
                Value::String(s) => s,
                other => other.to_string(),
            },
        })
        .collect())
}

// ============================================================================
// Request Bodies
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AddAddressRequest<'a> {
    #[serde(rename = "newAddr")]
    pub new_addr: &'a str,
    #[serde(rename = "newValue")]
    pub new_value: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditAddressRequest<'a> {
    #[serde(rename = "targetAddr")]
    pub target_addr: &'a str,
    #[serde(rename = "newAddr")]
    pub new_addr: &'a str,
    #[serde(rename = "newValue")]
    pub new_value: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteAddressRequest<'a> {
    #[serde(rename = "targetAddr")]
    pub target_addr: &'a str,
}

/// `{ "result": ... }` body returned by management endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OperationResult {
    pub result: String,
}

impl OperationResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == SUCCESS_RESULT
    }
}

/// Which exchange list mutation was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOp {
    Add,
    Edit,
    Delete,
}

impl ExchangeOp {
    /// Prefix of the info modal text reporting the outcome.
    #[must_use]
    pub const fn result_label(&self) -> &'static str {
        match self {
            Self::Add => "Adding exchange address result",
            Self::Edit => "Edit exchange address result",
            Self::Delete => "Delete exchange address result",
        }
    }
}

/// How an uploaded exchange list is merged on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadOption {
    #[default]
    Append,
    Override,
}

impl UploadOption {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Override => "override",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Append => Self::Override,
            Self::Override => Self::Append,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_exchange_list() {
        let entries = parse_exchange_list(json!({
            "0xb": "Kraken",
            "0xa": "Binance 14"
        }))
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&ExchangeEntry {
            address: "0xa".into(),
            name: "Binance 14".into()
        }));
    }

    #[test]
    fn test_parse_exchange_list_rejects_arrays() {
        assert!(parse_exchange_list(json!(["0xa"])).is_err());
    }

    #[test]
    fn test_request_field_names() {
        let body = serde_json::to_value(EditAddressRequest {
            target_addr: "0xold",
            new_addr: "0xnew",
            new_value: "Kraken",
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"targetAddr": "0xold", "newAddr": "0xnew", "newValue": "Kraken"})
        );

        let body = serde_json::to_value(AddAddressRequest {
            new_addr: "0xa",
            new_value: "Binance",
        })
        .unwrap();
        assert_eq!(body, json!({"newAddr": "0xa", "newValue": "Binance"}));
    }

    #[test]
    fn test_operation_result_success_is_literal() {
        assert!(OperationResult { result: "success".into() }.is_success());
        assert!(!OperationResult { result: "Success".into() }.is_success());
        assert!(!OperationResult { result: "address exists".into() }.is_success());
    }

    #[test]
    fn test_upload_option_toggle() {
        assert_eq!(UploadOption::default().as_str(), "append");
        assert_eq!(UploadOption::Append.toggle(), UploadOption::Override);
        assert_eq!(UploadOption::Override.toggle().as_str(), "append");
    }
}
