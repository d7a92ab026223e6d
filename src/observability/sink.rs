//! Destinations for [`LogEvent`]s.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::observability::events::LogEvent;

/// Receives every structured event a node produces.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LogEvent);
}

/// Writes each event as one JSON line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn emit(&self, event: LogEvent) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = write_json_line(&mut stdout, &event) {
            tracing::warn!(error = %e, event = event.event.as_str(), "Failed to write log event");
        }
    }
}

/// Write `event` as one newline-terminated JSON object and flush.
pub fn write_json_line<W: Write>(out: &mut W, event: &LogEvent) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Keeps events in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
