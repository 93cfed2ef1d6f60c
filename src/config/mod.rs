//! Configuration module for billcast.
//!
//! Settings come from environment variables (optionally seeded from a `.env`
//! file by the binary), split by concern: HTTP listener and artifact paths.

mod artifact_config;
mod server_config;

pub use artifact_config::ArtifactEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::Result;
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub artifacts: ArtifactEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Self {
            server: ServerEnvConfig::from_lookup(lookup)?,
            artifacts: ArtifactEnvConfig::from_lookup(lookup),
        })
    }
}
