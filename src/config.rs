//! Configuration parsing and defaults.
//!
//! A small TOML file controls where the frontend tree lives; every field
//! is defaulted, so a missing file means built-in defaults. The deletion
//! manifest itself is never configurable.

use crate::manifest::DEFAULT_FRONTEND_DIR;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Core settings.
    #[serde(default)]
    pub core: CoreConfig,
}

/// Core settings: where the frontend tree lives.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Directory the `assets/` tree hangs off.
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,
}

/// The built-in frontend root.
fn default_frontend_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FRONTEND_DIR)
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            frontend_dir: default_frontend_dir(),
        }
    }
}

impl Config {
    /// Loads configuration from the given path, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
