//! Configuration for the relay and target nodes.
//!
//! # Data Flow
//! ```text
//! CLI flags / environment (PORT, TARGET_URL, SERVICE_NAME, METRICS_ADDR)
//!     → loader.rs (RelaySettings, raw optional strings)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup and never mutated afterwards
//! - The target node has no runtime settings; its address is fixed
//! - Any invalid required setting is fatal before the listener is bound

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, RelaySettings};
pub use schema::{RelayConfig, TargetConfig, DEFAULT_PORT, OUTBOUND_TIMEOUT};
