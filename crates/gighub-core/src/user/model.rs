//! UserProfile domain model.

use serde::{Deserialize, Serialize};

/// Identity of the local session user.
///
/// Stamped onto every own message at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Stable user identifier, compared against `Message::sender_id`
    pub id: String,
    /// Human-readable name shown next to own messages
    pub display_name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: "current-user".to_string(),
            display_name: "You".to_string(),
        }
    }
}
