use crate::constants::{DEFAULT_CLUE_SOURCE_URL, DEFAULT_LISTING_URL, DEFAULT_OUTPUT_DIR};
use crate::error::{ConverterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listing_url: String,
    pub clue_source_url: String,
    pub output_dir: String,
    /// Pause between per-show fetches
    pub delay_ms: u64,
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            clue_source_url: DEFAULT_CLUE_SOURCE_URL.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            delay_ms: 0,
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Load the config file if present, then apply environment overrides.
    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = if config_path.exists() {
            let config_content = fs::read_to_string(config_path).map_err(|e| {
                ConverterError::Config(format!(
                    "Failed to read config file '{}': {}",
                    config_path.display(),
                    e
                ))
            })?;
            Self::from_toml(&config_content)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.listing_url.trim().is_empty() || config.clue_source_url.trim().is_empty() {
            return Err(ConverterError::Config(
                "listing_url and clue_source_url must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(v) = non_empty_env("JARCHIVE_LISTING_URL") {
            self.listing_url = v;
        }
        if let Some(v) = non_empty_env("JARCHIVE_CLUE_SOURCE_URL") {
            self.clue_source_url = v;
        }
        if let Some(v) = non_empty_env("JARCHIVE_OUTPUT_DIR") {
            self.output_dir = v;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
