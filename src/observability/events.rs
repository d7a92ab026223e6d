//! Structured log events.
//!
//! Every event serializes to one flat JSON object:
//!
//! ```text
//! {"severity":"INFO","service":"svc1","event":"ping_success","detail":"status=200 bytes=31","time":"2026-10-14T09:30:00Z"}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Request-cycle events are all `INFO`, failures included. Fatal
/// diagnostics go through `tracing` at `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Node bound its listener.
    Startup,
    /// Outbound call and body read both succeeded.
    PingSuccess,
    /// Outbound call failed before a response arrived.
    PingFailed,
    /// Response headers arrived but the body could not be read.
    PingReadFailed,
    /// Target node accepted a forwarded ping.
    Request,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Startup => "startup",
            EventKind::PingSuccess => "ping_success",
            EventKind::PingFailed => "ping_failed",
            EventKind::PingReadFailed => "ping_read_failed",
            EventKind::Request => "request",
        }
    }

    /// Whether this kind records the outcome of a relayed ping.
    pub fn is_ping_outcome(&self) -> bool {
        matches!(
            self,
            EventKind::PingSuccess | EventKind::PingFailed | EventKind::PingReadFailed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub severity: Severity,

    /// Identifying name. Absent only for the target's startup event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    pub event: EventKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(serialize_with = "rfc3339_seconds")]
    pub time: DateTime<Utc>,
}

impl LogEvent {
    fn info(event: EventKind, service: Option<&str>, detail: Option<String>) -> Self {
        Self {
            severity: Severity::Info,
            service: service.map(str::to_string),
            event,
            detail,
            time: Utc::now(),
        }
    }

    pub fn startup(service: Option<&str>, detail: impl Into<String>) -> Self {
        Self::info(EventKind::Startup, service, Some(detail.into()))
    }

    pub fn ping_success(service: &str, status: u16, bytes: usize) -> Self {
        Self::info(
            EventKind::PingSuccess,
            Some(service),
            Some(format!("status={} bytes={}", status, bytes)),
        )
    }

    pub fn ping_failed(service: &str, error: impl Into<String>) -> Self {
        Self::info(EventKind::PingFailed, Some(service), Some(error.into()))
    }

    pub fn ping_read_failed(service: &str, error: impl Into<String>) -> Self {
        Self::info(EventKind::PingReadFailed, Some(service), Some(error.into()))
    }

    /// The target's record of an accepted ping; carries no detail.
    pub fn request(service: &str) -> Self {
        Self::info(EventKind::Request, Some(service), None)
    }
}

/// RFC3339, UTC, whole seconds, `Z` suffix.
fn rfc3339_seconds<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Secs, true))
}
