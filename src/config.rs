use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory holding the tracker state files
    pub data_dir: ConfigValue<PathBuf>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(dir) = file_config.data_dir {
                // Resolve relative paths against config file's directory
                let resolved = if dir.is_relative() {
                    path.parent().map(|p| p.join(&dir)).unwrap_or(dir)
                } else {
                    dir
                };
                data_dir = ConfigValue::new(resolved, ConfigSource::File);
            }
        }

        if let Ok(dir) = std::env::var("FITTRACK_DATA_DIR") {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }

        Ok(Self {
            data_dir,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/fittrack/
    /// - macOS: ~/Library/Application Support/fittrack/
    /// - Windows: %APPDATA%/fittrack/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fittrack")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/fittrack/
    /// - macOS: ~/Library/Application Support/fittrack/
    /// - Windows: %APPDATA%/fittrack/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fittrack")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {}", .0.display(), .1)]
    ReadError(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config file '{}': {}", .0.display(), .1)]
    ParseError(PathBuf, #[source] serde_yaml::Error),
}
