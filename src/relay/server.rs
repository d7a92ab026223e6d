//! Relay node server setup.

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::RelayConfig;
use crate::http::{health, serve, with_request_layers};
use crate::observability::{EventSink, LogEvent};
use crate::relay::handlers::ping;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<RelayConfig>,
    pub client: reqwest::Client,
    pub events: Arc<dyn EventSink>,
}

/// HTTP server for the relay node.
pub struct RelayServer {
    router: Router,
    state: RelayState,
}

impl RelayServer {
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(config: RelayConfig, events: Arc<dyn EventSink>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.outbound_timeout)
            .build()?;

        let state = RelayState {
            config: Arc::new(config),
            client,
            events,
        };

        let router = Self::build_router(state.clone());
        Ok(Self { router, state })
    }

    fn build_router(state: RelayState) -> Router {
        let router = Router::new()
            .route("/ping", any(ping))
            .route("/health", any(health))
            .with_state(state);

        with_request_layers(router)
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
        let config = &self.state.config;

        tracing::info!(
            address = %addr,
            service = %config.service_name,
            target_url = %config.target_url,
            timeout_secs = config.outbound_timeout.as_secs_f64(),
            "Relay configured"
        );
        self.state.events.emit(LogEvent::startup(
            Some(&config.service_name),
            format!("listening on {}", addr),
        ));

        serve("relay", listener, self.router, shutdown).await
    }
}
