//! Target node server setup.

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::http::{health, serve, with_request_layers};
use crate::observability::{EventSink, LogEvent};
use crate::target::handlers::log;

#[derive(Clone)]
pub struct TargetState {
    pub events: Arc<dyn EventSink>,
}

/// HTTP server for the target node.
pub struct TargetServer {
    router: Router,
    events: Arc<dyn EventSink>,
}

impl TargetServer {
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        let state = TargetState {
            events: events.clone(),
        };

        let router = Router::new()
            .route("/log", any(log))
            .route("/health", any(health))
            .with_state(state);

        Self {
            router: with_request_layers(router),
            events,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until shutdown. Emits the startup event first.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        self.events
            .emit(LogEvent::startup(None, format!("listening on {}", addr)));

        serve("target", listener, self.router, shutdown).await
    }
}
