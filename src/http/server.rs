//! Serving a node router on a bound listener.

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::lifecycle::shutdown_signal;

/// Serve `router` until the shutdown broadcast fires or Ctrl+C arrives.
pub async fn serve(
    node: &'static str,
    listener: TcpListener,
    router: Router,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(node, address = %addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!(node, "HTTP server stopped");
    Ok(())
}
