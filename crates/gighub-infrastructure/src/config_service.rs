//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/gighub/config.toml).

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use gighub_core::config::RootConfig;
use gighub_core::error::Result;

use crate::paths::GighubPaths;

/// Configuration service that loads and caches the root configuration.
///
/// The file is read on first access and cached until
/// [`invalidate_cache`](Self::invalidate_cache) is called. A missing file
/// yields the defaults; a malformed one is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Location of config.toml
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService for the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(GighubPaths::config_file()?))
    }

    /// Creates a ConfigService for a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns `GighubError::Serialization` if the file is not valid TOML
    /// for [`RootConfig`], or `GighubError::Io` if it cannot be read.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "[Config] No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: RootConfig = toml::from_str(&content)?;

        tracing::debug!(path = %self.path.display(), "[Config] Loaded configuration");
        Ok(config)
    }
}
