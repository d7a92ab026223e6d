use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use ping_relay::observability::{logging::init_logging, StdoutSink};
use ping_relay::{Shutdown, TargetConfig, TargetServer};

/// The listen address is fixed at 0.0.0.0:8080.
#[derive(Parser)]
#[command(name = "target-node", version)]
#[command(about = "Acknowledges relayed pings on GET /log?service=<name>", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let _ = Cli::parse();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(event = "server_failed", error = %e, "Target node exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = TargetConfig::default();
    let listener = TcpListener::bind(config.bind_address).await?;

    let shutdown = Shutdown::new();
    TargetServer::new(Arc::new(StdoutSink))
        .run(listener, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
