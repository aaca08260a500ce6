use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::services::excel::FractionalPolicy;

fn default_max_file_size() -> u64 {
    // 10 MB in bytes
    10 * 1024 * 1024
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_file_size: u64,
    pub fractional_policy: FractionalPolicy,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_file_size: default_max_file_size(),
            fractional_policy: FractionalPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("Invalid BIND_ADDR '{}'", addr))?;
        }
        if let Some(size) = lookup("MAX_FILE_SIZE") {
            config.max_file_size = size
                .parse()
                .with_context(|| format!("Invalid MAX_FILE_SIZE '{}'", size))?;
        }
        if let Some(policy) = lookup("FRACTIONAL_POLICY") {
            config.fractional_policy = policy
                .parse()
                .map_err(|e: String| anyhow::anyhow!("Invalid FRACTIONAL_POLICY: {}", e))?;
        }

        if let Some(filter) = lookup("LOG_FILTER") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

pub fn load_config() -> Result<Config> {
    // Load .env file first
    dotenv().ok();

    Config::from_lookup(|key| std::env::var(key).ok())
}
