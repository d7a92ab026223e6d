//! Target node.
//!
//! `/log?service=<name>` acknowledges a relayed ping and records one
//! `request` event. A missing `service` is answered with 400 and no event.

pub mod handlers;
pub mod server;

pub use server::{TargetServer, TargetState};
