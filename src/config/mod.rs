// ABOUTME: Application configuration loaded from config.toml with CLI overrides
// Missing files fall back to defaults; malformed files are reported as errors

pub mod error;

pub use error::ConfigError;

use crate::alerts::{AlertSettings, AUTO_CLOSE_DELAY};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// Milliseconds before an alert closes itself.
    pub auto_close_ms: u64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: u64::try_from(AUTO_CLOSE_DELAY.as_millis()).unwrap_or(8000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Most toasts drawn at once; older ones are summarised.
    pub max_visible: usize,
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_visible: 5,
            tick_rate_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub alerts: AlertsConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Platform config file, e.g. `~/.config/alert-box/config.toml` on Linux.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "alert-box")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, or from the platform location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_from_path(&Self::default_path()?),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.alerts.auto_close_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn alert_settings(&self) -> AlertSettings {
        AlertSettings {
            auto_close: self.auto_close(),
        }
    }
}
