//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request outcomes:
//!     → events.rs (typed LogEvent, one per outcome)
//!     → sink.rs (EventSink → one JSON line on stdout)
//!     → metrics.rs (outcome counters, ping latency)
//!
//! Operational diagnostics (startup, bind/serve failures, config errors):
//!     → logging.rs (tracing subscriber, JSON lines on stderr)
//! ```
//!
//! # Design Decisions
//! - Both nodes share one event type so field names cannot drift
//! - Events are written synchronously before the response is returned
//! - Handlers hold the sink as `Arc<dyn EventSink>` so tests can capture events

pub mod events;
pub mod logging;
pub mod metrics;
pub mod sink;

pub use events::{EventKind, LogEvent, Severity};
pub use sink::{EventSink, MemorySink, StdoutSink};
