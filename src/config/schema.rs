//! Configuration schema definitions.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use url::Url;

/// Port the relay listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Deadline for the whole outbound call, body included.
pub const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(20);

/// Fixed listen port of the target node.
pub const TARGET_PORT: u16 = 8080;

/// Relay node configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the inbound listener binds to (all interfaces).
    pub bind_address: SocketAddr,

    /// Downstream base address; `service=<name>` is appended per call.
    pub target_url: Url,

    /// Identifying name sent downstream and stamped on every event.
    pub service_name: String,

    /// Timeout applied to each outbound call.
    pub outbound_timeout: Duration,

    /// Prometheus exporter address, disabled when `None`.
    pub metrics_address: Option<SocketAddr>,
}

impl RelayConfig {
    /// Config with the production defaults for everything but the required settings.
    pub fn new(target_url: Url, service_name: impl Into<String>) -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            target_url,
            service_name: service_name.into(),
            outbound_timeout: OUTBOUND_TIMEOUT,
            metrics_address: None,
        }
    }
}

/// Target node configuration.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    /// Always `0.0.0.0:8080`.
    pub bind_address: SocketAddr,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, TARGET_PORT)),
        }
    }
}
