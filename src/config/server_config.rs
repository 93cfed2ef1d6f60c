//! HTTP listener configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// HTTP listener environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEnvConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let bind_address = lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Failed to parse PORT '{}'", raw))?,
            None => defaults.port,
        };

        Ok(Self { bind_address, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| format!("Invalid BIND_ADDRESS '{}'", self.bind_address))
    }
}
