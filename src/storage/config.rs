//! Configuration handling
//!
//! Configuration is read from `--config <path>` when given, otherwise from
//! `{config_dir}/task-cli/config.toml` when that file exists. Every key is
//! optional; command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File holding pending tasks
    pub pending_file: PathBuf,

    /// File holding completed tasks
    pub completed_file: PathBuf,

    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pending_file: PathBuf::from("task.txt"),
            completed_file: PathBuf::from("completed.txt"),
            default_format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from an explicit file, or from the user config directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::load_from(path)
            }
            None => match Self::global_config_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "task", "task-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the path of the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        pending_file: Option<PathBuf>,
        completed_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = pending_file {
            self.pending_file = path;
        }
        if let Some(path) = completed_file {
            self.completed_file = path;
        }
        self
    }
}
