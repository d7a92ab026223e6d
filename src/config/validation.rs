//! Configuration validation.
//!
//! Each check is a pure function from the raw setting to its typed value.
//! An empty string counts as an absent setting.

use std::net::SocketAddr;

use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::DEFAULT_PORT;

/// Filter out unset and empty values.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn validate_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match present(value) {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidPort {
            value: raw.to_string(),
            source,
        }),
    }
}

pub fn validate_target_url(value: Option<&str>) -> Result<Url, ConfigError> {
    let raw = present(value).ok_or(ConfigError::Missing("TARGET_URL"))?;
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidTargetUrl {
        value: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

/// The name is used verbatim; surrounding whitespace is only ignored when
/// deciding whether it was set at all.
pub fn validate_service_name(value: Option<&str>) -> Result<String, ConfigError> {
    present(value).ok_or(ConfigError::Missing("SERVICE_NAME"))?;
    Ok(value.unwrap_or_default().to_string())
}

pub fn validate_metrics_address(value: Option<&str>) -> Result<Option<SocketAddr>, ConfigError> {
    present(value)
        .map(|raw| {
            raw.parse().map_err(|source| ConfigError::InvalidMetricsAddress {
                value: raw.to_string(),
                source,
            })
        })
        .transpose()
}
