//! Fire-and-forget HTTP sink.
//!
//! # Responsibilities
//! - Encode a [`LogEntry`] as JSON and build the POST request
//! - Hand the request to a detached task and return immediately
//!
//! # Design Decisions
//! - Encoding and request-building errors are returned to the caller
//! - Transport errors and non-2xx statuses are printed by the detached task only
//! - No retry, no timeout beyond the HTTP client default, no ordering between sends

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request};
use std::sync::{Arc, OnceLock};
use tokio::runtime::{Builder, Handle, Runtime};

use crate::client::entry::LogEntry;
use crate::client::error::{LogError, LogResult};
use crate::client::line::LineLogger;
use crate::observability::metrics;

/// Post `entry` to `target` without waiting for the outcome.
pub(crate) fn send_log(
    http: &Client,
    console: &Arc<LineLogger>,
    target: &str,
    entry: &LogEntry,
) -> LogResult<()> {
    if target.is_empty() {
        return Ok(());
    }

    let body = serde_json::to_vec(entry).map_err(|e| {
        console.print_plain(&e.to_string());
        LogError::Serialize(e)
    })?;

    let request = http
        .post(target)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .build()
        .map_err(|e| {
            console.print_plain(&e.to_string());
            LogError::BuildRequest(e)
        })?;

    metrics::record_entry(entry.level, metrics::SINK_REMOTE);
    tracing::debug!(
        target_url = %request.url(),
        level = %entry.level,
        "Dispatching remote log entry"
    );

    spawn_detached(http, request, console.clone());
    Ok(())
}

async fn make_request(http: Client, request: Request, console: Arc<LineLogger>) {
    let url = request.url().clone();
    match http.execute(request).await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                console.print_plain(&format!(
                    "Log collector {} responded with status {}",
                    url, status
                ));
                metrics::record_remote_failure(metrics::FAILURE_STATUS);
                tracing::warn!(url = %url, status = %status, "Remote log entry rejected");
            }
        }
        Err(e) => {
            console.print_plain(&e.to_string());
            metrics::record_remote_failure(metrics::FAILURE_TRANSPORT);
            tracing::warn!(url = %url, error = %e, "Remote log entry lost");
        }
    }
}

/// Execute `request` on the ambient Tokio runtime, or on the shared
/// background runtime when called from synchronous code.
fn spawn_detached(http: &Client, request: Request, console: Arc<LineLogger>) {
    let task = make_request(http.clone(), request, console.clone());
    if let Ok(handle) = Handle::try_current() {
        handle.spawn(task);
        return;
    }

    match background_runtime() {
        Some(rt) => {
            rt.spawn(task);
        }
        None => {
            console.print_plain("Error starting log sender runtime");
            metrics::record_remote_failure(metrics::FAILURE_RUNTIME);
        }
    }
}

/// Runtime that drives sends issued outside any Tokio context. Built on
/// first use and kept for the life of the process.
fn background_runtime() -> Option<&'static Runtime> {
    static RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();
    RUNTIME
        .get_or_init(|| {
            Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("log-sender")
                .enable_all()
                .build()
                .map_err(|e| tracing::warn!(error = %e, "Failed to start log sender runtime"))
                .ok()
        })
        .as_ref()
}
