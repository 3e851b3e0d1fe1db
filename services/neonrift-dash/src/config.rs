//! Configuration types for the neonrift dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub auto_refresh: AutoRefreshConfig,
}

/// Where the device lives and which endpoints to poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_info_path")]
    pub info_path: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_path: default_health_path(),
            info_path: default_info_path(),
        }
    }
}

/// Auto-refresh timer configuration.
///
/// Only the period is configurable; auto-refresh always starts off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoRefreshConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl AutoRefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for AutoRefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://neonrift.local".to_string()
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_info_path() -> String {
    "/info".to_string()
}

fn default_interval_ms() -> u64 {
    2000
}

impl Config {
    /// Reject values the dashboard cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.auto_refresh.interval_ms == 0 {
            return Err(crate::DashError::Config(
                "auto_refresh.interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DashError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
