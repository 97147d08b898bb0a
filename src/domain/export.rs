//! Export of cluster node addresses to JSON and CSV files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ClusterError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "data.json",
            Self::Csv => "data.csv",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ExportedNodes {
    nodes: Vec<String>,
}

/// CSV header line.
const CSV_HEADER: &str = "nodes";

/// Renders the addresses in the given format.
///
/// # Errors
///
/// Returns [`ClusterError::Parse`] if JSON serialization fails.
pub fn render_export(nodes: &[String], format: ExportFormat) -> Result<String, ClusterError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&ExportedNodes {
            nodes: nodes.to_vec(),
        })?),
        ExportFormat::Csv => {
            let mut out = String::from(CSV_HEADER);
            for node in nodes {
                out.push('\n');
                out.push_str(node);
            }
            Ok(out)
        }
    }
}

/// Reads addresses back from an exported file's content.
///
/// # Errors
///
/// Returns [`ClusterError::Parse`] if the content is not a valid export.
pub fn parse_export(content: &str, format: ExportFormat) -> Result<Vec<String>, ClusterError> {
    match format {
        ExportFormat::Json => Ok(serde_json::from_str::<ExportedNodes>(content)?.nodes),
        ExportFormat::Csv => {
            let mut lines = content.lines();
            match lines.next() {
                Some(header) if header.trim() == CSV_HEADER => {}
                _ => return Err(ClusterError::parse("missing CSV header `nodes`")),
            }
            Ok(lines
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect())
        }
    }
}

/// Writes the export file into `dir` and returns its path.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn write_export(
    dir: &Path,
    nodes: &[String],
    format: ExportFormat,
) -> Result<PathBuf, ClusterError> {
    let content = render_export(nodes, format)?;
    let path = dir.join(format.file_name());
    std::fs::write(&path, content)?;
    Ok(path)
}
