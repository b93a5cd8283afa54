//! Server configuration.
//!
//! Settings come from the environment, with defaults suitable for running
//! from the repository root.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable naming the station snapshot file.
pub const STATIONS_PATH_VAR: &str = "ROUTE_STATIONS_PATH";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "ROUTE_BIND_ADDR";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address is not a valid socket address
    #[error("invalid ROUTE_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration for the route server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// JSON file holding the station records.
    pub stations_path: PathBuf,

    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stations_path: impl Into<PathBuf>, bind_addr: SocketAddr) -> Self {
        Self {
            stations_path: stations_path.into(),
            bind_addr,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        if let Some(path) = get(STATIONS_PATH_VAR) {
            config.stations_path = PathBuf::from(path);
        }

        if let Some(value) = get(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from("data/stations.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
