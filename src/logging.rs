//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file that can be
//! followed with `tail -f` from another terminal.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path has no file name component.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Installs a global subscriber writing to `log_path`.
///
/// Honors `RUST_LOG` and falls back to `info`. The parent directory is
/// created when missing, even if the subscriber turns out to be set already.
///
/// # Errors
///
/// Returns a [`LoggingError`] when the directory cannot be created, the path
/// is unusable, or a subscriber was installed earlier.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    if !directory.as_os_str().is_empty() {
        std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn test_init_creates_missing_directory() {
        let dir = std::env::temp_dir().join("ethcluster_logs_create");
        let _ = fs::remove_dir_all(&dir);

        // The subscriber may already be set by another test.
        let _ = init(&dir.join("nested").join("app.log"));

        assert!(dir.join("nested").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn test_second_init_reports_subscriber_set() {
        let dir = std::env::temp_dir().join("ethcluster_logs_twice");
        let log = dir.join("app.log");

        let _ = init(&log);
        let second = init(&log);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_root_path_is_rejected() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::NoParentDirectory(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = LoggingError::InvalidPath(PathBuf::from("/tmp/.."));
        assert_eq!(err.to_string(), "Invalid log file path: \"/tmp/..\"");
        assert_eq!(
            LoggingError::SubscriberAlreadySet.to_string(),
            "Tracing subscriber already initialized"
        );
    }
}
