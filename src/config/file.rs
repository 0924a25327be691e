//! Configuration file handling

use super::EndpointConfig;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Monitored endpoints, in display order
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,

    /// Disabled endpoints
    #[serde(default)]
    pub disabled_endpoints: DisabledEndpoints,
}

/// Global settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Seconds between poll cycles
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Per-probe deadline in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Longest accepted poll interval (one day)
pub const MAX_INTERVAL_SECS: u64 = 86_400;

fn default_interval() -> u64 {
    60
}

fn default_timeout() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Settings {
    /// Reject zero durations and intervals longer than [`MAX_INTERVAL_SECS`]
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "interval_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if self.interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::InvalidSetting {
                name: "interval_secs",
                reason: format!("must be at most {} (one day)", MAX_INTERVAL_SECS),
            }
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Refresh interval handed to the poller
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Probe deadline, kept strictly below the refresh interval
    pub fn timeout(&self) -> Duration {
        let timeout = Duration::from_secs(self.timeout_secs);
        let interval = self.interval();
        if timeout >= interval {
            tracing::warn!(
                "timeout {}s is not shorter than interval {}s, clamping",
                self.timeout_secs,
                self.interval_secs
            );
            interval.mul_f64(0.9)
        } else {
            timeout
        }
    }
}

/// Disabled endpoints configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisabledEndpoints {
    /// List of URLs to disable
    #[serde(default)]
    pub urls: Vec<String>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rpc-monitor")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path();
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        config.settings.validate()?;
        Ok(config)
    }

    /// Save to a specific path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::InvalidFile(format!("Failed to create directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if an endpoint URL is disabled
    pub fn is_endpoint_disabled(&self, url: &str) -> bool {
        self.disabled_endpoints.urls.iter().any(|u| u == url)
    }

    /// Endpoints that will actually be polled, in configured order
    pub fn active_endpoints(&self) -> Vec<EndpointConfig> {
        self.endpoints
            .iter()
            .filter(|e| e.enabled && !self.is_endpoint_disabled(&e.url))
            .cloned()
            .collect()
    }
}
