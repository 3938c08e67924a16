//! Configuration management for termprobe
//!
//! Configuration lives in ~/.config/termprobe/config.toml. Missing files and
//! missing keys fall back to defaults, so a fresh install works without any
//! setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Raw input probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Idle gap in milliseconds that ends a captured sequence
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
}

pub fn default_idle_timeout_ms() -> u64 {
    10
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: default_idle_timeout_ms(),
        }
    }
}

/// Sweep output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Pause for Enter between escape-sweep sections
    #[serde(default)]
    pub pause: bool,
}

impl Config {
    /// Get the config file path (~/.config/termprobe/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (~/.config/termprobe)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("termprobe"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}
