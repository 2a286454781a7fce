//! Observability for the client itself.
//!
//! # Data Flow
//! ```text
//! client subsystems produce:
//!     → logging.rs (tracing subscriber for binaries)
//!     → metrics.rs (counters for dispatched and lost entries)
//! ```
//!
//! # Design Decisions
//! - Internal diagnostics go through `tracing`, never through the client's own sinks
//! - Metrics use the `metrics` facade; installing an exporter is the host's job

pub mod logging;
pub mod metrics;
