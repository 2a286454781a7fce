//! Error definitions for the logging client.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the leveled logging methods.
///
/// Directory creation failures and failures of a detached remote send are
/// printed only and never show up here.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened for appending.
    #[error("Error opening log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log line could not be written to the opened file.
    #[error("Error writing log file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log entry could not be encoded as JSON.
    #[error("Failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The outbound HTTP request could not be built (e.g. malformed URL).
    #[error("Failed to build log request: {0}")]
    BuildRequest(#[source] reqwest::Error),
}

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = LogError::OpenFile {
            path: PathBuf::from("/var/log/app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.starts_with("Error opening log file /var/log/app.log"));
        assert!(text.contains("denied"));
    }
}
