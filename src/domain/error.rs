//! Error types for clustering backend operations.
//!
//! Every request issued against the clustering server resolves to either a
//! typed payload or one of these variants. The UI layer decides which text
//! to surface for each variant.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for clustering backend operations.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the supplied credentials (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("Server responded with status {status}")]
    Http {
        /// The HTTP status code returned by the server.
        status: u16,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input, rejected before any request is made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Local file access failed (uploads, exports, graph files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl ClusterError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Maps a non-success HTTP status to the matching variant.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Http { status }
        }
    }

    /// Returns `true` when the server rejected the credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<serde_json::Error> for ClusterError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
