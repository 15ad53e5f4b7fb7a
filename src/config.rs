//! Runtime configuration read from the environment (and `.env`, via `dotenvy`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{ensure, Context, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset keys fall back to defaults;
    /// set but unparsable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().with_context(|| format!("BIND_ADDR must be a socket address, got `{raw}`"))?,
            None => DEFAULT_BIND_ADDR,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().with_context(|| format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        ensure!(max_connections > 0, "DATABASE_MAX_CONNECTIONS must be at least 1");

        Ok(Self { database_url, bind_addr, max_connections })
    }
}
