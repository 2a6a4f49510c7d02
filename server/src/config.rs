//! Server configuration.
//!
//! Settings are resolved from positional arguments (`calc-server [addr]
//! [workers]`), then the `CALC_SERVER_ADDR` / `CALC_SERVER_WORKERS`
//! environment variables, then the defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9090);
pub const DEFAULT_WORKER_THREADS: usize = 4;

pub const ADDR_VAR: &str = "CALC_SERVER_ADDR";
pub const WORKERS_VAR: &str = "CALC_SERVER_WORKERS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid worker thread count {0:?}: expected a positive integer")]
    InvalidWorkers(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub worker_threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from the process environment and `args`
    /// (program name already stripped).
    pub fn load(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())?.with_args(args)
    }

    /// Builds a configuration from environment-style variables.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(addr) = lookup(ADDR_VAR) {
            config.addr = parse_addr(&addr)?;
        }
        if let Some(workers) = lookup(WORKERS_VAR) {
            config.worker_threads = parse_workers(&workers)?;
        }
        Ok(config)
    }

    /// Overrides settings with positional arguments: `[addr] [workers]`.
    pub fn with_args(
        mut self,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        if let Some(addr) = args.next() {
            self.addr = parse_addr(&addr)?;
        }
        if let Some(workers) = args.next() {
            self.worker_threads = parse_workers(&workers)?;
        }
        Ok(self)
    }
}

fn parse_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidAddr {
        value: value.to_string(),
        source,
    })
}

fn parse_workers(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidWorkers(value.to_string())),
    }
}
