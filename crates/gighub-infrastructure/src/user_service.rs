//! Configuration-based identity provider.
//!
//! Reads the `[user]` section of config.toml through [`ConfigService`].

use gighub_core::user::{IdentityProvider, UserProfile};

use crate::config_service::ConfigService;

/// Identity provider that loads the user profile from config.toml.
///
/// Falls back to the default profile when the configuration cannot be
/// loaded, so a broken config never prevents messaging.
///
/// # Example
///
/// ```
/// use gighub_core::user::IdentityProvider;
/// use gighub_infrastructure::{ConfigBasedIdentityProvider, ConfigService};
///
/// let provider = ConfigBasedIdentityProvider::new(ConfigService::with_path("missing.toml"));
/// assert_eq!(provider.current_user_display_name(), "You");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBasedIdentityProvider {
    config: ConfigService,
}

impl ConfigBasedIdentityProvider {
    pub fn new(config: ConfigService) -> Self {
        Self { config }
    }
}

impl IdentityProvider for ConfigBasedIdentityProvider {
    fn current_user(&self) -> UserProfile {
        match self.config.get_config() {
            Ok(config) => config.user,
            Err(e) => {
                tracing::warn!(error = %e, "[Config] Failed to load user profile, using default");
                UserProfile::default()
            }
        }
    }
}
