//! Session configuration.

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use entrygrid_products::{BATCH_SIZE, RuleSet, Validator};

pub const ENV_AGE_RULE: &str = "ENTRYGRID_AGE_RULE";
pub const ENV_DISCOUNT_BOUND: &str = "ENTRYGRID_DISCOUNT_BOUND";
pub const ENV_IMAGE_RULE: &str = "ENTRYGRID_IMAGE_RULE";
pub const ENV_GRID_ROWS: &str = "ENTRYGRID_GRID_ROWS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub rules: RuleSet,
    /// Maximum number of rows in the bulk entry grid.
    pub grid_rows: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            grid_rows: BATCH_SIZE,
        }
    }
}

impl SessionConfig {
    pub fn validator(&self) -> Validator {
        Validator::new(self.rules)
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw).context("invalid session config")?;
        anyhow::ensure!(config.grid_rows > 0, "grid_rows must be at least 1");
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Defaults overridden by `ENTRYGRID_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(age) = choice(&lookup, ENV_AGE_RULE) {
            config.rules.age = age;
        }
        if let Some(discount) = choice(&lookup, ENV_DISCOUNT_BOUND) {
            config.rules.discount = discount;
        }
        if let Some(image) = choice(&lookup, ENV_IMAGE_RULE) {
            config.rules.image = image;
        }
        if let Some(raw) = lookup(ENV_GRID_ROWS) {
            match raw.trim().parse::<usize>() {
                Ok(rows) if rows > 0 => config.grid_rows = rows,
                _ => tracing::warn!(
                    key = ENV_GRID_ROWS,
                    value = %raw,
                    "invalid grid row count; using default {}",
                    config.grid_rows
                ),
            }
        }

        config
    }
}

/// Parse an enum setting by its serde name (e.g. `upper_inclusive`).
fn choice<T: DeserializeOwned>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase())) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid setting");
            None
        }
    }
}
