//! Leveled logging client.
//!
//! # Data Flow
//! ```text
//! info / debug / warn / error (message, labels)
//!     → stdout line logger ("<LEVEL>: <date> <time> <file:line>: <message>")
//!     → log()
//!         remote disabled → file_sink.rs (append to log target)
//!         remote enabled  → entry.rs (LogEntry) → remote.rs (detached POST)
//! ```
//!
//! # Design Decisions
//! - Stdout echo always happens, whatever the sink configuration
//! - An empty log target turns both sinks into successful no-ops
//! - `trace` is accepted and discarded
//! - File location in each line is the application's call site (`#[track_caller]`)

pub mod entry;
pub mod error;
mod file_sink;
pub mod level;
pub mod line;
mod remote;

use std::panic::Location;
use std::sync::Arc;

use crate::config::ClientConfig;

pub use entry::LogEntry;
pub use error::{LogError, LogResult};
pub use level::LogLevel;
pub use line::{LineFlags, LineLogger, Output};

/// Logging client owned by a single service.
///
/// Cloning is cheap; clones share the same writers and HTTP connection pool.
#[derive(Clone)]
pub struct LoggingClient {
    owning_service_name: String,
    remote_enabled: bool,
    log_target: String,
    stdout: Arc<LineLogger>,
    file_logger: Arc<LineLogger>,
    http: reqwest::Client,
}

impl LoggingClient {
    /// Create a client for `owning_service_name`.
    ///
    /// `log_target` is a file path when `is_remote` is false and a collector
    /// URL when it is true. An empty target disables that sink. No argument
    /// is validated here; see [`crate::config::validate_config`].
    pub fn new(
        owning_service_name: impl Into<String>,
        is_remote: bool,
        log_target: impl Into<String>,
    ) -> Self {
        Self {
            owning_service_name: owning_service_name.into(),
            remote_enabled: is_remote,
            log_target: log_target.into(),
            stdout: Arc::new(LineLogger::stdout(LineFlags::STANDARD)),
            file_logger: Arc::new(LineLogger::unbound(LineFlags::STANDARD)),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.owning_service_name.clone(),
            config.remote_enabled,
            config.log_target.clone(),
        )
    }

    /// Send the stdout echo (and printed diagnostics) to `output` instead of
    /// the process's standard output.
    pub fn with_stdout(mut self, output: Output) -> Self {
        let flags = self.stdout.flags();
        self.stdout = Arc::new(LineLogger::new(output, "", flags));
        self
    }

    /// Use `http` for remote sends, e.g. one with custom proxy or TLS settings.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn owning_service_name(&self) -> &str {
        &self.owning_service_name
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote_enabled
    }

    pub fn log_target(&self) -> &str {
        &self.log_target
    }

    /// Log an INFO level message.
    #[track_caller]
    pub fn info(&self, msg: &str, labels: &[&str]) -> LogResult<()> {
        self.emit(LogLevel::Info, msg, labels, Location::caller())
    }

    /// Accepted for API symmetry; trace messages are discarded.
    pub fn trace(&self, _msg: &str, _labels: &[&str]) {}

    /// Log a DEBUG level message.
    #[track_caller]
    pub fn debug(&self, msg: &str, labels: &[&str]) -> LogResult<()> {
        self.emit(LogLevel::Debug, msg, labels, Location::caller())
    }

    /// Log a WARN level message.
    #[track_caller]
    pub fn warn(&self, msg: &str, labels: &[&str]) -> LogResult<()> {
        self.emit(LogLevel::Warn, msg, labels, Location::caller())
    }

    /// Log an ERROR level message.
    #[track_caller]
    pub fn error(&self, msg: &str, labels: &[&str]) -> LogResult<()> {
        self.emit(LogLevel::Error, msg, labels, Location::caller())
    }

    /// Log at a level chosen at runtime. `Trace` behaves like [`Self::trace`].
    #[track_caller]
    pub fn log_at(&self, level: LogLevel, msg: &str, labels: &[&str]) -> LogResult<()> {
        if level == LogLevel::Trace {
            self.trace(msg, labels);
            return Ok(());
        }
        self.emit(level, msg, labels, Location::caller())
    }

    /// Build the entry that would be posted for this message.
    pub fn build_log_entry(&self, level: LogLevel, msg: &str, labels: &[&str]) -> LogEntry {
        LogEntry::new(level, msg, labels, &self.owning_service_name)
    }

    fn emit(
        &self,
        level: LogLevel,
        msg: &str,
        labels: &[&str],
        location: &Location<'_>,
    ) -> LogResult<()> {
        let _ = self.stdout.println_with_prefix(&level.prefix(), msg, location);
        self.log(level, msg, labels, location)
    }

    fn log(
        &self,
        level: LogLevel,
        msg: &str,
        labels: &[&str],
        location: &Location<'_>,
    ) -> LogResult<()> {
        if !self.remote_enabled {
            return file_sink::save_to_log_file(
                &self.file_logger,
                &self.stdout,
                &self.log_target,
                level,
                msg,
                location,
            );
        }

        let entry = self.build_log_entry(level, msg, labels);
        remote::send_log(&self.http, &self.stdout, &self.log_target, &entry)
    }
}

impl std::fmt::Debug for LoggingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingClient")
            .field("owning_service_name", &self.owning_service_name)
            .field("remote_enabled", &self.remote_enabled)
            .field("log_target", &self.log_target)
            .finish_non_exhaustive()
    }
}
