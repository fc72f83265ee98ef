use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::PairOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pair_order: PairOrder,
    #[serde(default = "default_export_format")]
    pub export_format: ExportFormat,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_export_format() -> ExportFormat {
    ExportFormat::Csv
}
fn default_log_filter() -> String {
    "pairtime=warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pair_order: PairOrder::default(),
            export_format: default_export_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let dir_name = if cfg!(target_os = "windows") {
            "pairtime"
        } else {
            ".pairtime"
        };
        base.unwrap_or_else(|| PathBuf::from(".")).join(dir_name)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pairtime.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
