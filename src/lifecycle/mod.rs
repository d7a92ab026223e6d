//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup (bin/*.rs):
//!     Init logging → Load config → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Shutdown::trigger() or SIGINT → stop accepting → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners are bound before the server task starts, so callers can
//!   connect as soon as `run` is spawned

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
