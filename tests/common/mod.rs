//! Shared utilities for integration tests.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub const LOGS_PATH: &str = "/api/v1/logs";

/// In-memory stand-in for stdout.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[allow(dead_code)]
impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// Poll until `pred` holds for the captured text or `timeout` elapses.
    pub async fn wait_for(&self, timeout: Duration, pred: impl Fn(&str) -> bool) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            if pred(&self.text()) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        pred(&self.text())
    }
}

/// A request received by the mock collector.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct CollectorState {
    tx: mpsc::UnboundedSender<Received>,
    status: StatusCode,
}

/// Mock logging collector listening on an ephemeral local port.
pub struct MockCollector {
    pub url: String,
    rx: mpsc::UnboundedReceiver<Received>,
}

#[allow(dead_code)]
impl MockCollector {
    /// Wait up to `timeout` for the next posted entry.
    pub async fn next(&mut self, timeout: Duration) -> Option<Received> {
        tokio::time::timeout(timeout, self.rx.recv()).await.ok().flatten()
    }

    /// Entry already received, without waiting.
    pub fn try_next(&mut self) -> Option<Received> {
        self.rx.try_recv().ok()
    }
}

/// Start a collector that answers every POST with `status`.
pub async fn start_collector(status: StatusCode) -> MockCollector {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = Router::new()
        .route(LOGS_PATH, post(receive))
        .with_state(CollectorState { tx, status });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockCollector {
        url: format!("http://{}{}", addr, LOGS_PATH),
        rx,
    }
}

async fn receive(
    State(state): State<CollectorState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    let _ = state.tx.send(Received { content_type, body });
    state.status
}

/// HTTP client that ignores proxy environment variables.
#[allow(dead_code)]
pub fn direct_http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
