//! HTTP plumbing shared by both nodes.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, graceful shutdown)
//!     → request.rs (x-request-id assigned, trace span)
//!     → node router (relay::handlers / target::handlers)
//!     → response.rs (JSON bodies, health reply)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{with_request_layers, X_REQUEST_ID};
pub use response::health;
pub use server::serve;
