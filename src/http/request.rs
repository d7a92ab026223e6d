//! Request identification and tracing.
//!
//! Every inbound request gets an `x-request-id` (kept if the caller sent one)
//! before the trace span opens, and the same id is echoed on the response.
//! The relay also forwards it on its outbound call.

use axum::http::HeaderName;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub const X_REQUEST_ID: &str = "x-request-id";

/// Wrap a node router with request-id and trace middleware.
pub fn with_request_layers(router: Router) -> Router {
    let header = HeaderName::from_static(X_REQUEST_ID);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(header.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(header)),
    )
}
