//! Conversation message type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserProfile;

/// Display label stamped on messages created during the live session.
pub const JUST_NOW: &str = "Just now";

/// One exchanged utterance in a conversation.
///
/// Messages are immutable once created; the session only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique, time-ordered identifier (UUIDv7)
    #[serde(default = "generate_id")]
    pub id: String,
    /// Author identifier; equal to the session user's id for own messages
    pub sender_id: String,
    /// Author name, denormalized at creation time
    pub sender_display_name: String,
    /// Exact text that passed moderation
    pub content: String,
    /// Display-formatted send time ("Just now", "10:42 AM", ...)
    pub timestamp: String,
    /// Creation instant (RFC 3339)
    #[serde(default)]
    pub created_at: String,
    /// True when `sender_id` matches the current session user
    #[serde(default)]
    pub is_own: bool,
}

impl Message {
    /// Creates a message authored by `sender` right now.
    pub fn new(
        sender_id: impl Into<String>,
        sender_display_name: impl Into<String>,
        content: impl Into<String>,
        is_own: bool,
    ) -> Self {
        Self {
            id: generate_id(),
            sender_id: sender_id.into(),
            sender_display_name: sender_display_name.into(),
            content: content.into(),
            timestamp: JUST_NOW.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            is_own,
        }
    }

    /// Creates an own message for the given user.
    pub fn own(user: &UserProfile, content: impl Into<String>) -> Self {
        Self::new(user.id.clone(), user.display_name.clone(), content, true)
    }
}

fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
