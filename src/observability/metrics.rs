//! Client metrics.
//!
//! # Metrics
//! - `logging_client_entries_total` (counter): entries handed to a sink, by level and sink
//! - `logging_client_remote_failures_total` (counter): remote entries lost after
//!   dispatch, by reason

use crate::client::LogLevel;

pub const SINK_FILE: &str = "file";
pub const SINK_REMOTE: &str = "remote";

pub const FAILURE_TRANSPORT: &str = "transport";
pub const FAILURE_STATUS: &str = "status";
pub const FAILURE_RUNTIME: &str = "runtime";

pub fn record_entry(level: LogLevel, sink: &'static str) {
    metrics::counter!(
        "logging_client_entries_total",
        "level" => level.as_str(),
        "sink" => sink
    )
    .increment(1);
}

pub fn record_remote_failure(reason: &'static str) {
    metrics::counter!("logging_client_remote_failures_total", "reason" => reason).increment(1);
}
