//! Typed storage configuration.
//!
//! Host applications point the engine at a data directory through a
//! small YAML file. Every field has a default, so an empty or partial
//! file is valid -- the same default-merge posture the persisted state
//! itself uses.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use engagement_types::STATE_KEY;

/// Errors that can occur when loading storage configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted blob files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key under which the engagement state blob is stored.
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl StorageConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `ENGAGEMENT_DATA_DIR` environment variable, when set and
    /// non-empty, overrides `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("ENGAGEMENT_DATA_DIR") {
            if !dir.is_empty() {
                self.data_dir = PathBuf::from(dir);
            }
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            state_key: default_state_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".engagement")
}

fn default_state_key() -> String {
    String::from(STATE_KEY)
}
