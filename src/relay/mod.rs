//! Relay node.
//!
//! # Request Cycle
//! ```text
//! GET /ping
//!     → handlers.rs (method check)
//!     → forward.rs (build outbound URL, one call, bounded by timeout)
//!     → classify: Ok(Relayed) | Transport | Read
//!     → emit exactly one event (ping_success / ping_failed / ping_read_failed)
//!     → 200 with downstream body | 502 JSON
//! ```
//!
//! # Design Decisions
//! - Never retries
//! - Downstream status is reported in the event, not forwarded to the caller
//! - The reqwest client is built once per node and shared across requests

pub mod forward;
pub mod handlers;
pub mod server;

pub use forward::{forward, outbound_url, RelayError, Relayed};
pub use server::{RelayServer, RelayState};
