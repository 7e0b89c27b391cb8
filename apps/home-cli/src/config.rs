use anyhow::{Context, Result};
use intent_parser::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// YAML device registry; the built-in home when unset.
    pub registry_path: Option<String>,
    pub highlight_ms: u64,
    pub processing_cooldown_ms: u64,
    /// Used when RUST_LOG is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: None,
            highlight_ms: 3000,
            processing_cooldown_ms: 0,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            let contents =
                fs::read_to_string(path).with_context(|| format!("reading config: {path}"))?;
            serde_json::from_str(&contents).with_context(|| format!("parsing config: {path}"))
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing config: {path}"))?;
        Ok(())
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            highlight: Duration::from_millis(self.highlight_ms),
            processing_cooldown: Duration::from_millis(self.processing_cooldown_ms),
        }
    }
}
