//! Identity provider for the current session user.
//!
//! Authentication itself lives outside the messaging core; sessions only need
//! to know who "self" is when stamping own messages.

use super::model::UserProfile;

/// Supplies the identity of the signed-in user.
///
/// Implementations are read once when a session is opened and treated as
/// read-only afterwards.
pub trait IdentityProvider: Send + Sync {
    /// Returns the current user's id.
    fn current_user_id(&self) -> String {
        self.current_user().id
    }

    /// Returns the current user's display name.
    fn current_user_display_name(&self) -> String {
        self.current_user().display_name
    }

    /// Returns the complete user profile.
    fn current_user(&self) -> UserProfile;
}

/// Provider backed by a fixed profile.
///
/// # Example
///
/// ```
/// use gighub_core::user::{DefaultIdentityProvider, IdentityProvider};
///
/// let provider = DefaultIdentityProvider::default();
/// assert_eq!(provider.current_user_display_name(), "You");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultIdentityProvider {
    profile: UserProfile,
}

impl DefaultIdentityProvider {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

impl IdentityProvider for DefaultIdentityProvider {
    fn current_user(&self) -> UserProfile {
        self.profile.clone()
    }
}
