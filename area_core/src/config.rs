//! Tracker configuration with TOML persistence.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Runtime settings for the tracking engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Milliseconds between sweeps.
    pub tick_interval_ms: u64,

    /// Upper bound on sweeps run by a single `AreaPoller::update` call.
    /// Backlog beyond this is dropped, not replayed.
    pub max_ticks_per_update: u32,

    /// Log filter used by `init_logging` (e.g. "debug", "info,area_core=trace").
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            max_ticks_per_update: 1,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a config from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded tracker config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject settings the scheduler cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        if self.max_ticks_per_update == 0 {
            return Err(ConfigError::InvalidTickBudget);
        }
        Ok(())
    }
}
