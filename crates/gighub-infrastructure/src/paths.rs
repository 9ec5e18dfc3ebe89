//! Unified path management for gighub configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/gighub/            # Config directory
//! ├── config.toml              # Application configuration
//! └── conversations.toml       # Optional conversation fixture
//! ```

use std::path::PathBuf;

use gighub_core::error::{GighubError, Result};

const APP_DIR: &str = "gighub";
const CONFIG_FILE: &str = "config.toml";
const CONVERSATIONS_FILE: &str = "conversations.toml";

/// Resolves gighub file locations for the current platform.
pub struct GighubPaths;

impl GighubPaths {
    /// Returns the gighub configuration directory (e.g. `~/.config/gighub/`).
    ///
    /// # Errors
    ///
    /// Returns `GighubError::Config` if the platform config directory cannot
    /// be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| GighubError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the path of the default conversation fixture.
    pub fn conversations_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONVERSATIONS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_in_config_dir() {
        // Skip on hosts without a resolvable config dir
        let Ok(dir) = GighubPaths::config_dir() else {
            return;
        };

        assert!(dir.ends_with(APP_DIR));
        assert_eq!(GighubPaths::config_file().unwrap(), dir.join(CONFIG_FILE));
        assert_eq!(
            GighubPaths::conversations_file().unwrap(),
            dir.join(CONVERSATIONS_FILE)
        );
    }
}
