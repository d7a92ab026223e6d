//! Turning raw settings into a validated [`RelayConfig`].

use std::net::{AddrParseError, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

use crate::config::schema::{RelayConfig, OUTBOUND_TIMEOUT};
use crate::config::validation::{
    validate_metrics_address, validate_port, validate_service_name, validate_target_url,
};

/// Error type for configuration loading. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid TARGET_URL {value:?}: {source}")]
    InvalidTargetUrl {
        value: String,
        source: url::ParseError,
    },

    #[error("TARGET_URL {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("invalid METRICS_ADDR {value:?}: {source}")]
    InvalidMetricsAddress {
        value: String,
        source: AddrParseError,
    },
}

/// Raw relay settings as read from flags or the environment.
#[derive(Debug, Clone, Default)]
pub struct RelaySettings {
    pub port: Option<String>,
    pub target_url: Option<String>,
    pub service_name: Option<String>,
    pub metrics_address: Option<String>,
}

impl RelaySettings {
    /// Validate in startup order: port, target URL, service name, metrics.
    pub fn load(&self) -> Result<RelayConfig, ConfigError> {
        let port = validate_port(self.port.as_deref())?;
        let target_url = validate_target_url(self.target_url.as_deref())?;
        let service_name = validate_service_name(self.service_name.as_deref())?;
        let metrics_address = validate_metrics_address(self.metrics_address.as_deref())?;

        Ok(RelayConfig {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            target_url,
            service_name,
            outbound_timeout: OUTBOUND_TIMEOUT,
            metrics_address,
        })
    }
}
