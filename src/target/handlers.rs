//! Target node handlers.

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::response::{Acknowledgement, ValidationFailure, MISSING_SERVICE};
use crate::observability::{metrics, LogEvent};
use crate::target::server::TargetState;

/// First `service` value in the query string; empty counts as missing.
pub fn service_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "service")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// `/log`: validate `service`, record it, acknowledge.
pub async fn log(State(state): State<TargetState>, RawQuery(query): RawQuery) -> Response {
    let Some(service) = service_param(query.as_deref()) else {
        metrics::record_target_request("missing_service");
        let body = ValidationFailure {
            error: MISSING_SERVICE,
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    state.events.emit(LogEvent::request(&service));
    metrics::record_target_request("request");

    (StatusCode::OK, Json(Acknowledgement::ok(&service))).into_response()
}
