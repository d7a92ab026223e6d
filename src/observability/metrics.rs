//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_pings_total` (counter): relayed pings by outcome
//! - `relay_ping_duration_seconds` (histogram): inbound-to-outcome latency
//! - `target_requests_total` (counter): target `/log` calls by outcome
//!
//! Recording is a no-op until an exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::observability::events::EventKind;

/// Start the Prometheus scrape endpoint. Must run inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_ping(outcome: EventKind, start: Instant) {
    counter!("relay_pings_total", "outcome" => outcome.as_str()).increment(1);
    histogram!("relay_ping_duration_seconds", "outcome" => outcome.as_str())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_target_request(outcome: &'static str) {
    counter!("target_requests_total", "outcome" => outcome).increment(1);
}
