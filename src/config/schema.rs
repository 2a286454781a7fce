//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Settings for a [`crate::LoggingClient`].
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Service name stamped on every remote entry as its origin.
    pub owning_service_name: String,

    /// Post entries to a remote collector instead of appending to a file.
    pub remote_enabled: bool,

    /// File path (local mode) or collector URL (remote mode).
    /// Empty disables the sink.
    pub log_target: String,
}

impl ClientConfig {
    pub fn local(owning_service_name: &str, path: &str) -> Self {
        Self {
            owning_service_name: owning_service_name.to_string(),
            remote_enabled: false,
            log_target: path.to_string(),
        }
    }

    pub fn remote(owning_service_name: &str, url: &str) -> Self {
        Self {
            owning_service_name: owning_service_name.to_string(),
            remote_enabled: true,
            log_target: url.to_string(),
        }
    }
}
