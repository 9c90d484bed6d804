use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{BoardError, BoardResult};

pub const DEFAULT_SLOT: &str = "taskboard-cards";
pub const DEBUG_LOG_ENV: &str = "TASKBOARD_DEBUG_LOG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the slot files. Falls back to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            slot: default_slot(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub debug_log: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            debug_log: None,
        }
    }
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_level() -> String {
    "warn".to_string()
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path. Never fails: a missing or
    /// unparsable file yields the defaults.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default();
        config.apply_env();
        config
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> BoardResult<Self> {
        toml::from_str(content).map_err(|e| BoardError::Config(e.to_string()))
    }

    fn apply_env(&mut self) {
        if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
            if !log_path.trim().is_empty() {
                self.logging.debug_log = Some(PathBuf::from(log_path));
            }
        }
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("taskboard")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
