use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// ============================================================================
// Service Configuration
// ============================================================================
//
// Only transport settings are configurable. Recipes and the initial stock
// are compiled in.
//
// ============================================================================

pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_METRICS_PORT: u16 = 9090;
pub const DEFAULT_LOG_FILTER: &str = "info,cooking_agent=debug";

const HOST_VAR: &str = "COOKING_AGENT_HOST";
const PORT_VAR: &str = "COOKING_AGENT_PORT";
const METRICS_PORT_VAR: &str = "COOKING_AGENT_METRICS_PORT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_addr: SocketAddr,
    pub metrics_addr: SocketAddr,
    /// Used when RUST_LOG is unset
    pub default_log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let host = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
        Self {
            api_addr: SocketAddr::new(host, DEFAULT_API_PORT),
            metrics_addr: SocketAddr::new(host, DEFAULT_METRICS_PORT),
            default_log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            let host: IpAddr = host
                .parse()
                .with_context(|| format!("{} is not an IP address: {:?}", HOST_VAR, host))?;
            config.api_addr.set_ip(host);
            config.metrics_addr.set_ip(host);
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.api_addr.set_port(parse_port(PORT_VAR, &port)?);
        }

        if let Some(port) = lookup(METRICS_PORT_VAR) {
            config.metrics_addr.set_port(parse_port(METRICS_PORT_VAR, &port)?);
        }

        Ok(config)
    }
}

fn parse_port(var: &str, value: &str) -> Result<u16> {
    value
        .parse()
        .with_context(|| format!("{} is not a valid port: {:?}", var, value))
}
