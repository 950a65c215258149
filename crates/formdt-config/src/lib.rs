use formdt_engine::{DEFAULT_LINE_LENGTH, FormatOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project config file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".formdt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid line_length in {config_path}: must be at least 1")]
    InvalidLineLength { config_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub line_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.line_length == 0 {
            return Err(ConfigError::InvalidLineLength {
                config_path: config_path.to_path_buf(),
            });
        }

        log::debug!("loaded config from {}: {config:?}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(Self::config_path()).map(Option::unwrap_or_default)
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// A command-line width wins over the file.
    pub fn with_line_length_override(mut self, line_length: Option<usize>) -> Self {
        if let Some(line_length) = line_length {
            self.line_length = line_length;
        }
        self
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(self.line_length)
    }
}
