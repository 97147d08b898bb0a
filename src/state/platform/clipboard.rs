//! Cross-platform clipboard abstraction.
//!
//! # Platform-Specific Behavior
//!
//! On Linux the external tools `wl-copy`, `xclip` and `xsel` are tried in
//! that order before falling back to the `arboard` crate. External tools
//! keep the clipboard content alive after the application exits.
//!
//! macOS and Windows use `arboard` directly.

use thiserror::Error;
#[cfg(target_os = "linux")]
use tracing::debug;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,

    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// External clipboard tools with the arguments that make them read stdin.
#[cfg(target_os = "linux")]
const EXTERNAL_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

// ============================================================================
// Clipboard Manager
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    System { prefer_external_tools: bool },
    /// Keeps the copied text in memory; no system clipboard involved.
    #[cfg(test)]
    Memory { contents: Option<String> },
}

/// Clipboard used by the copy actions.
#[derive(Debug)]
pub struct ClipboardManager {
    backend: Backend,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// System clipboard, preferring external tools on Linux.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: Backend::System {
                prefer_external_tools: true,
            },
        }
    }

    /// In-memory clipboard for tests.
    #[cfg(test)]
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory { contents: None },
        }
    }

    /// Text last copied into an in-memory clipboard.
    #[cfg(test)]
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        match &self.backend {
            Backend::Memory { contents } => contents.as_deref(),
            Backend::System { .. } => None,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is available or the copy fails.
    pub fn copy_text(&mut self, text: &str) -> ClipboardResult<()> {
        match &mut self.backend {
            #[cfg(test)]
            Backend::Memory { contents } => {
                *contents = Some(text.to_string());
                Ok(())
            }
            Backend::System {
                prefer_external_tools,
            } => {
                #[cfg(target_os = "linux")]
                if *prefer_external_tools && copy_with_external_tool(text) {
                    return Ok(());
                }
                #[cfg(not(target_os = "linux"))]
                let _ = prefer_external_tools;

                copy_with_arboard(text)
            }
        }
    }
}

fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

#[cfg(target_os = "linux")]
fn copy_with_external_tool(text: &str) -> bool {
    EXTERNAL_TOOLS.iter().any(|(tool, args)| {
        let copied = try_tool(tool, args, text);
        debug!(tool, copied, "external clipboard tool");
        copied
    })
}

/// Pipes `text` into `tool`; `true` if it exited successfully.
#[cfg(target_os = "linux")]
fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };
    if stdin.write_all(text.as_bytes()).is_err() {
        return false;
    }
    drop(stdin);

    child.wait().map(|s| s.success()).unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_keeps_last_copy() {
        let mut clipboard = ClipboardManager::in_memory();
        assert_eq!(clipboard.contents(), None);
        clipboard.copy_text("0xAAA").unwrap();
        clipboard.copy_text("0xBBB").unwrap();
        assert_eq!(clipboard.contents(), Some("0xBBB"));
    }

    #[test]
    fn test_system_backend_prefers_external_tools() {
        assert_eq!(
            ClipboardManager::new().backend,
            Backend::System {
                prefer_external_tools: true
            }
        );
        assert_eq!(ClipboardManager::default().contents(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::NotAvailable.to_string(),
            "Clipboard not available"
        );
        assert_eq!(
            ClipboardError::CopyFailed("test".to_string()).to_string(),
            "Failed to copy: test"
        );
    }
}
