use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use ping_relay::config::{RelayConfig, RelaySettings};
use ping_relay::observability::{logging::init_logging, metrics::init_metrics, StdoutSink};
use ping_relay::{RelayServer, Shutdown};

#[derive(Parser)]
#[command(name = "relay-node", version)]
#[command(about = "Relays each GET /ping to the target node", long_about = None)]
struct Cli {
    /// Listen port (default 8080)
    #[arg(long, env = "PORT")]
    port: Option<String>,

    /// Downstream base URL, e.g. http://target:8080/log
    #[arg(long, env = "TARGET_URL")]
    target_url: Option<String>,

    /// Identifying name sent downstream and stamped on every event
    #[arg(long, env = "SERVICE_NAME")]
    service_name: Option<String>,

    /// Prometheus exporter address, e.g. 0.0.0.0:9100
    #[arg(long, env = "METRICS_ADDR")]
    metrics_addr: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let settings = RelaySettings {
        port: cli.port,
        target_url: cli.target_url,
        service_name: cli.service_name,
        metrics_address: cli.metrics_addr,
    };
    let config = match settings.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(event = "config_invalid", error = %e, "Relay node cannot start");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(event = "server_failed", error = %e, "Relay node exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: RelayConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(addr) = config.metrics_address {
        init_metrics(addr);
    }

    let listener = TcpListener::bind(config.bind_address).await?;
    let server = RelayServer::new(config, Arc::new(StdoutSink))?;

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
