//! Server configuration from the environment.
//!
//! | Variable                   | Default        |
//! |----------------------------|----------------|
//! | `CREDENCE_ADDR`            | `0.0.0.0:5000` |
//! | `CREDENCE_FETCH_TIMEOUT`   | `10` seconds   |
//! | `CREDENCE_REQUEST_TIMEOUT` | `30` seconds   |

use std::net::SocketAddr;
use std::time::Duration;

use credence_core::{CredenceError, FetchConfig, Result};

const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Used for every URL the API fetches.
    pub fetch: FetchConfig,
    /// Upper bound on handling one request, fetch included.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            fetch: FetchConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("CREDENCE_ADDR") {
            config.addr = addr
                .trim()
                .parse()
                .map_err(|_| CredenceError::ConfigError(format!("CREDENCE_ADDR is not a socket address: {}", addr)))?;
        }

        if let Some(secs) = lookup("CREDENCE_FETCH_TIMEOUT") {
            config.fetch.timeout = parse_seconds("CREDENCE_FETCH_TIMEOUT", &secs)?;
        }

        if let Some(secs) = lookup("CREDENCE_REQUEST_TIMEOUT") {
            config.request_timeout = Duration::from_secs(parse_seconds("CREDENCE_REQUEST_TIMEOUT", &secs)?);
        }

        Ok(config)
    }
}

fn parse_seconds(key: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(CredenceError::ConfigError(format!(
            "{} must be a positive number of seconds, got {:?}",
            key, value
        ))),
        Ok(secs) => Ok(secs),
    }
}
