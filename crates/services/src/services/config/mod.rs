use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::validation::{MAX_EVENT_CLOCK_SKEW_SECS, ValidationRules};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Default cache TTL in seconds (5 minutes)
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Config {
    pub validation: ValidationRules,
    pub cache: CacheConfig,
}

impl Config {
    /// Rejects settings that cannot be applied.
    pub fn check(&self) -> Result<(), ConfigError> {
        if let Some(range) = self.validation.grade_range
            && range.min > range.max
        {
            return Err(ConfigError::ValidationError(format!(
                "grade_range min {} is greater than max {}",
                range.min, range.max
            )));
        }
        if self.validation.max_event_clock_skew_secs > MAX_EVENT_CLOCK_SKEW_SECS {
            return Err(ConfigError::ValidationError(format!(
                "validation.max_event_clock_skew_secs must be at most {MAX_EVENT_CLOCK_SKEW_SECS}"
            )));
        }
        if self.cache.max_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "cache.max_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<String> for Config {
    fn from(raw_config: String) -> Self {
        match serde_json::from_str::<Config>(&raw_config) {
            Ok(config) => match config.check() {
                Ok(()) => config,
                Err(e) => {
                    tracing::warn!("Invalid config, using defaults: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to parse config, using defaults: {}", e);
                Config::default()
            }
        }
    }
}

/// Will always return config, falling back to defaults when the file is missing or invalid
pub async fn load_config_from_file(config_path: &Path) -> Config {
    match tokio::fs::read_to_string(config_path).await {
        Ok(raw_config) => Config::from(raw_config),
        Err(_) => {
            tracing::info!("No config file found at {}, using defaults", config_path.display());
            Config::default()
        }
    }
}

/// Saves the config to the given path
pub async fn save_config_to_file(config: &Config, config_path: &Path) -> Result<(), ConfigError> {
    config.check()?;
    let raw_config = serde_json::to_string_pretty(config)?;
    tokio::fs::write(config_path, raw_config).await?;
    Ok(())
}
