//! Configuration file handling.
//!
//! An optional `.ormat.json` in the current directory (or a file named with
//! `--config`) supplies build options and per-command defaults. Every key is
//! optional; command line flags take precedence over what the file says.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::Options;

pub const DEFAULT_CONFIG_FILE: &str = ".ormat.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Options for the field transformation pipeline
    pub options: Options,
    pub model: ModelConfig,
    pub proto: ProtoConfig,
    pub sql: SqlConfig,
    pub rapier: RapierConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    pub out: Option<PathBuf>,
    pub package: Option<String>,
    pub merge: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoConfig {
    pub out: Option<PathBuf>,
    pub package: Option<String>,
    /// File options, e.g. `go_package`
    pub options: BTreeMap<String, String>,
    pub style: Option<String>,
    pub disable_bool: bool,
    pub disable_timestamp: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SqlConfig {
    pub out: Option<PathBuf>,
    pub merge: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RapierConfig {
    pub out: Option<PathBuf>,
    pub package: Option<String>,
    pub model_import_path: Option<String>,
}

impl ConfigFile {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `.ormat.json` in the current
    /// directory is used when present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => Self::discover(Path::new(".")),
        }
    }

    /// Read `.ormat.json` from `dir`, or defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::from_path(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
