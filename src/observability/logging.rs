//! Operational logging.
//!
//! Diagnostics go through `tracing`, formatted as one JSON object per line on
//! stderr so they never interleave with the event stream on stdout. The
//! filter comes from `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "ping_relay=info,relay_node=info,target_node=info,tower_http=info";

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
