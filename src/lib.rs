//! Two-node ping relay.
//!
//! # Architecture Overview
//!
//! ```text
//!   Caller                Relay Node                         Target Node
//!   ──────               ────────────                        ─────────────
//!   GET /ping  ───────▶  relay::handlers::ping
//!                             │ outbound_url(TARGET_URL, SERVICE_NAME)
//!                             │ forward() ── GET ?service=<name> ──▶ target::handlers::log
//!                             │                                          │ emit `request`
//!                             │ ◀──────── {"status":"ok",...} ──────────┘
//!                             │ emit ping_success | ping_failed | ping_read_failed
//!   ◀──────────────────  200 body | 502 {"error","service"}
//!
//!   Cross-cutting: config (immutable, Arc), observability (events on stdout,
//!   tracing on stderr, metrics), lifecycle (graceful shutdown)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod target;

pub use config::{RelayConfig, TargetConfig};
pub use lifecycle::Shutdown;
pub use relay::RelayServer;
pub use target::TargetServer;
