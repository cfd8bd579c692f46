//! Process configuration, read from the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use storehook_inventory::StockItem;
use storehook_webhooks::WebhookConfig;

pub const BIND_ADDR_ENV: &str = "STOREHOOK_BIND_ADDR";
pub const STOCK_ITEMS_ENV: &str = "STOREHOOK_STOCK_ITEMS";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STOREHOOK_BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// JSON array of stock items used to seed the in-memory repository.
    pub stock_items_path: Option<PathBuf>,
    pub webhook: WebhookConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let stock_items_path = lookup(STOCK_ITEMS_ENV)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            stock_items_path,
            webhook: WebhookConfig::from_lookup(&lookup),
        })
    }
}

/// Read seed stock items from a JSON file.
pub fn load_stock_items(path: &Path) -> anyhow::Result<Vec<StockItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stock items from {}", path.display()))?;
    let items = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse stock items in {}", path.display()))?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.stock_items_path.is_none());
        assert!(!config.webhook.active);
    }

    #[test]
    fn reads_overrides() {
        let config = from_pairs(&[
            (BIND_ADDR_ENV, "127.0.0.1:9000"),
            (STOCK_ITEMS_ENV, "/tmp/items.json"),
            ("STOREHOOK_WEBHOOK_ACTIVE", "true"),
            ("STOREHOOK_WEBHOOK_TOKEN", "tok"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.stock_items_path, Some(PathBuf::from("/tmp/items.json")));
        assert!(config.webhook.active);
        assert_eq!(config.webhook.token, "tok");
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = from_pairs(&[(BIND_ADDR_ENV, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let err = load_stock_items(Path::new("/nonexistent/storehook/items.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read stock items"));
    }
}
