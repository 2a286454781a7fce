//! Leveled logging client with local file and remote HTTP sinks.
//!
//! Every message is echoed to stdout. Depending on configuration it is then
//! either appended to a local file or posted as JSON to a remote logging
//! collector on a detached task.

pub mod client;
pub mod config;
pub mod observability;

pub use client::{LogEntry, LogError, LogLevel, LogResult, LoggingClient};
pub use config::ClientConfig;
