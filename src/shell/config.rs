// Service settings, read from the environment (and `.env` when present).
//
// IRRF_API_BASE              base URL of the tax computation service
// IRRF_BIND_ADDR             address the HTTP server listens on
// IRRF_REQUEST_TIMEOUT_SECS  per-row timeout for calls to the service
// IRRF_PRINT_COMMAND         optional command memos are piped into, e.g. `lp`

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid IRRF_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid IRRF_REQUEST_TIMEOUT_SECS {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub print_command: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_base = read("IRRF_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let bind_addr = read("IRRF_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let request_timeout = match read("IRRF_REQUEST_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self {
            api_base,
            bind_addr,
            request_timeout,
            print_command: read("IRRF_PRINT_COMMAND"),
        })
    }
}
