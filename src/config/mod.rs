//! Process Configuration
//!
//! Values come from the environment first, then command-line flags override them:
//!
//! | Setting         | Env var             | Flag         | Default          |
//! |-----------------|---------------------|--------------|------------------|
//! | Listen address  | `BIND_ADDR`         | `--bind`     | `127.0.0.1:3000` |
//! | REST store URL  | `KV_REST_API_URL`   | `--kv-url`   | none             |
//! | REST store auth | `KV_REST_API_TOKEN` | `--kv-token` | none             |
//! | Log level       | `LOG_LEVEL`         | `--log-level`| `info`           |
//!
//! With both store settings present the REST store is used, otherwise the
//! process keeps its lists in memory.

use crate::storage::{MemoryStore, RestStore, SharedStore};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Memory,
    Rest { url: String, token: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub backend: StoreBackend,
    pub log_level: tracing::Level,
}

impl ServerConfig {
    /// Reads the real process environment and arguments.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(&args, |name| std::env::var(name).ok())
    }

    /// `args` excludes the program name.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = env("BIND_ADDR");
        let mut kv_url = env("KV_REST_API_URL");
        let mut kv_token = env("KV_REST_API_TOKEN");
        let mut log_level = env("LOG_LEVEL");

        let mut i = 0;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--bind" => &mut bind,
                "--kv-url" => &mut kv_url,
                "--kv-token" => &mut kv_token,
                "--log-level" => &mut log_level,
                other => anyhow::bail!("Unknown argument: {}", other),
            };
            let value = args
                .get(i + 1)
                .with_context(|| format!("{} needs a value", args[i]))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let bind = bind.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;

        let log_level = match log_level {
            Some(level) => level
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid log level: {}", level))?,
            None => tracing::Level::INFO,
        };

        let backend = match (non_empty(kv_url), non_empty(kv_token)) {
            (Some(url), Some(token)) => StoreBackend::Rest { url, token },
            _ => StoreBackend::Memory,
        };

        Ok(Self {
            bind_addr,
            backend,
            log_level,
        })
    }

    pub fn build_store(&self) -> SharedStore {
        match &self.backend {
            StoreBackend::Memory => {
                tracing::warn!("KV_REST_API_URL/KV_REST_API_TOKEN not set, lists are kept in memory");
                Arc::new(MemoryStore::new())
            }
            StoreBackend::Rest { url, token } => {
                tracing::info!("Using REST key-value store at {}", url);
                Arc::new(RestStore::new(url, token))
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
