//! Remote log entry payload.

use serde::{Deserialize, Serialize};

use crate::client::level::LogLevel;

/// A single log record as posted to the remote collector.
///
/// Built fresh for every remote log call and only lives long enough to be
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Caller-supplied tags, in the order given.
    pub labels: Vec<String>,
    /// Name of the service that emitted the entry.
    pub origin_service: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: &str, labels: &[&str], origin_service: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            origin_service: origin_service.to_string(),
        }
    }
}
