//! Response bodies shared by the nodes.
//!
//! Field order in these structs is the field order on the wire.

use axum::http::StatusCode;
use serde::Serialize;

/// Body of the target's 400 reply.
pub const MISSING_SERVICE: &str = "missing service parameter";

/// Relay reply when the outbound call or its body read failed.
#[derive(Debug, Serialize)]
pub struct GatewayFailure<'a> {
    pub error: String,
    pub service: &'a str,
}

/// Target reply for a rejected request.
#[derive(Debug, Serialize)]
pub struct ValidationFailure {
    pub error: &'static str,
}

/// Target reply for an accepted ping.
#[derive(Debug, Serialize)]
pub struct Acknowledgement<'a> {
    pub status: &'static str,
    pub service: &'a str,
}

impl<'a> Acknowledgement<'a> {
    pub fn ok(service: &'a str) -> Self {
        Self { status: "ok", service }
    }
}

/// Liveness reply, identical for every method.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
