//! Relay node handlers.

use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::http::response::GatewayFailure;
use crate::http::X_REQUEST_ID;
use crate::observability::{metrics, LogEvent};
use crate::relay::forward::{forward, outbound_url, RelayError};
use crate::relay::server::RelayState;

/// `/ping`: relay one call to the target and report the outcome.
pub async fn ping(State(state): State<RelayState>, method: Method, headers: HeaderMap) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "method not allowed").into_response();
    }

    let start = Instant::now();
    let service = state.config.service_name.as_str();
    let url = outbound_url(&state.config.target_url, service);

    tracing::debug!(url = %url, "Relaying ping");

    let outcome = forward(&state.client, url, headers.get(X_REQUEST_ID)).await;

    let event = match &outcome {
        Ok(relayed) => LogEvent::ping_success(service, relayed.status.as_u16(), relayed.body.len()),
        Err(e @ RelayError::Transport(_)) => LogEvent::ping_failed(service, e.detail()),
        Err(e @ RelayError::Read(_)) => LogEvent::ping_read_failed(service, e.detail()),
    };
    metrics::record_ping(event.event, start);
    state.events.emit(event);

    match outcome {
        Ok(relayed) => relayed.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Ping relay failed");
            let body = GatewayFailure {
                error: e.to_string(),
                service,
            };
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}
