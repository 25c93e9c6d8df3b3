//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

/// Directory holding a project-local config, relative to the working directory
pub const LOCAL_CONFIG_DIR: &str = ".typemaster";

const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Get the global config directory path (~/.typemaster/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(LOCAL_CONFIG_DIR)
    }

    /// Get the global config file path (~/.typemaster/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join(CONFIG_FILE)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration for a working directory.
    ///
    /// Looks for `<dir>/.typemaster/config.toml`, then the global config.
    /// Falls back to defaults when neither exists.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local = dir.join(LOCAL_CONFIG_DIR).join(CONFIG_FILE);
        if local.exists() {
            tracing::debug!("Loading config from {}", local.display());
            return Self::from_file(&local);
        }

        let global = Self::global_config_path();
        if global.exists() {
            tracing::debug!("Loading config from {}", global.display());
            return Self::from_file(&global);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load an explicitly given config file, or discover one from `work_dir`
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(work_dir),
        }
    }
}
