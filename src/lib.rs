#![warn(missing_docs)]

//! # asset-sweep
//!
//! A small maintenance tool that deletes a built-in manifest of unused
//! frontend asset files from two fixed directories (`assets/images` and
//! `assets/icons`) under a frontend root, reporting how many files were
//! deleted and how many were already gone.
//!
//! The manifest is pre-computed outside this tool; nothing here scans
//! source code for asset usage. A run is idempotent: sweeping a tree a
//! second time deletes nothing and reports every listed file as not found.
//!
//! ## Modules
//!
//! - [`commands`]: CLI command implementations (sweep, status)
//! - [`manifest`]: the built-in filename lists and sweep targets
//! - [`sweep`]: the check-then-delete-then-count engine
//! - [`config`]: TOML configuration for the frontend root
//! - [`output`]: verbosity-aware colored output helpers

/// CLI command implementations.
pub mod commands;

/// Configuration loading and defaults.
pub mod config;

/// Built-in filename manifests and sweep targets.
pub mod manifest;

/// Output formatting and verbosity control.
pub mod output;

/// The check-then-delete-then-count engine.
pub mod sweep;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the sweep binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/asset-sweep/config.toml";

/// Central context for a sweep run.
///
/// Holds the resolved frontend root and the loaded configuration. The
/// frontend root is resolved in order of precedence: explicit override
/// (`--root` flag or `ASSET_SWEEP_ROOT`), then the configuration file,
/// then the built-in default.
#[derive(Debug, Clone)]
pub struct SweepContext {
    /// Directory the `assets/` tree hangs off.
    pub frontend_dir: PathBuf,

    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl SweepContext {
    /// Creates a context, loading configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined or the
    /// configuration file exists but cannot be parsed.
    pub fn new(root_override: Option<PathBuf>) -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var("ASSET_SWEEP_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        Self::new_with_config_path(root_override, config_path)
    }

    /// Creates a context with an explicit configuration path.
    ///
    /// # Errors
    /// Returns an error if the configuration file exists but cannot be
    /// parsed.
    pub fn new_with_config_path(
        root_override: Option<PathBuf>,
        config_path: PathBuf,
    ) -> Result<Self> {
        let config = config::Config::load(&config_path)?;
        let frontend_dir = root_override.unwrap_or_else(|| config.core.frontend_dir.clone());

        Ok(Self {
            frontend_dir,
            config_path,
            config,
        })
    }

    /// The sweep targets under this context's frontend root.
    #[must_use]
    pub fn targets(&self) -> Vec<manifest::SweepTarget> {
        manifest::targets(&self.frontend_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_context_root_override_wins() -> Result<()> {
        let temp = tempdir()?;
        let config_path = temp.path().join("config.toml");
        let root = temp.path().join("frontend");

        let ctx = SweepContext::new_with_config_path(Some(root.clone()), config_path)?;
        assert_eq!(ctx.frontend_dir, root);

        Ok(())
    }

    #[test]
    fn test_context_falls_back_to_config_default() -> Result<()> {
        let temp = tempdir()?;
        let config_path = temp.path().join("config.toml");

        let ctx = SweepContext::new_with_config_path(None, config_path)?;
        assert_eq!(ctx.frontend_dir, config::Config::default().core.frontend_dir);

        Ok(())
    }

    #[test]
    fn test_context_has_two_targets() -> Result<()> {
        let temp = tempdir()?;
        let config_path = temp.path().join("config.toml");

        let ctx = SweepContext::new_with_config_path(
            Some(temp.path().to_path_buf()),
            config_path,
        )?;
        assert_eq!(ctx.targets().len(), 2);

        Ok(())
    }
}
