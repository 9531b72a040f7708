use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::decide::Preference;
use crate::error::{Result, ScoutError};
use crate::product::Platform;

/// Global shopscout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-platform listing cap for searches
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Persona to side with when no flag is given
    #[serde(default)]
    pub preference: Preference,

    /// Platforms searched by default
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    /// How long cached search outcomes stay valid
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_max_results() -> usize {
    10
}

fn default_platforms() -> Vec<Platform> {
    Platform::ALL.to_vec()
}

fn default_cache_ttl() -> u64 {
    crate::cache::DEFAULT_TTL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            preference: Preference::default(),
            platforms: default_platforms(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScoutError::ConfigError(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "shopscout").ok_or_else(|| {
            ScoutError::ConfigError("Could not determine config directory".into())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}
