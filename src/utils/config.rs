use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use anyhow::Context;

use crate::services::inventory_service::{Inventory, DEFAULT_STOCK};

const ENVIRONMENTS: [&str; 3] = ["development", "test", "production"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    /// Opening stock per item id, after any `STOCK_<ID>` overrides.
    pub stock: BTreeMap<String, u32>,
}

impl Config {
    /// Loads `.env` (or the given file) and reads configuration from the process environment.
    pub fn from_env(env_file: Option<&Path>) -> anyhow::Result<Self> {
        match env_file {
            Some(path) => {
                dotenv::from_path(path)
                    .with_context(|| format!("Failed to load config file {}", path.display()))?;
            }
            None => {
                dotenv::dotenv().ok();
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut stock: BTreeMap<String, u32> = DEFAULT_STOCK
            .iter()
            .map(|(id, count)| (id.to_string(), *count))
            .collect();

        for (id, count) in stock.iter_mut() {
            let key = stock_key(id);
            if let Some(raw) = lookup(&key) {
                *count = raw
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("{} must be a non-negative integer, got '{}'", key, raw))?;
            }
        }

        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            stock,
        };

        config.validate()?;
        tracing::debug!("Config: loaded for {} environment", config.environment);
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !ENVIRONMENTS.contains(&self.environment.as_str()) {
            return Err(anyhow::anyhow!(
                "APP_ENV must be one of {}, got '{}'",
                ENVIRONMENTS.join(", "),
                self.environment
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("LOG_LEVEL must not be empty"));
        }

        Ok(())
    }

    /// Fresh inventory seeded from the configured opening stock.
    pub fn inventory(&self) -> Inventory {
        Inventory::new(self.stock.iter().map(|(id, count)| (id.clone(), *count)))
    }
}

fn stock_key(item_id: &str) -> String {
    format!("STOCK_{}", item_id.to_uppercase())
}
