//! Configuration management.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (DAY_SCHEDULE_*)
//! 3. Config file (~/.config/day-schedule/config.toml)
//! 4. Default values
//!
//! Defaults reproduce the plain interactive behavior: a 10:00-22:00
//! window, a half-hour break after noon, text-order due dates, and
//! `tasks_schedule.txt` in the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dispatching::DueDateOrder;
use crate::models::WorkdayWindow;
use crate::report::DEFAULT_OUTPUT;
use crate::{Error, Result};

/// Environment variable overriding the output path.
pub const ENV_OUTPUT: &str = "DAY_SCHEDULE_OUTPUT";

/// Output configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Schedule file, overwritten each run
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Task ordering configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// How due dates are compared
    pub due_date: DueDateOrder,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration
    pub output: OutputConfig,
    /// Workday window and break rule
    pub workday: WorkdayWindow,
    /// Ordering configuration
    pub ordering: OrderingConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and check configuration text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/day-schedule/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("day-schedule").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - DAY_SCHEDULE_OUTPUT: schedule file path
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(ENV_OUTPUT) {
            if !path.is_empty() {
                self.output.path = PathBuf::from(path);
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output.path = path;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        config_path: Option<&Path>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let base = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };
        Ok(base.with_env_overrides().with_cli_overrides(output))
    }

    /// Reject settings the packer cannot work with
    pub fn check(&self) -> Result<()> {
        self.workday.check().map_err(Error::Config)?;
        if self.output.path.as_os_str().is_empty() {
            return Err(Error::Config("output path must not be empty".to_string()));
        }
        Ok(())
    }
}
