//! Conversation domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::message::Message;

/// Role the other party plays in the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CounterpartRole {
    Client,
    Freelancer,
}

/// An addressable message thread between the current user and one counterpart.
///
/// `messages` is kept in insertion order, which is also chronological order.
/// The session never reorders or deduplicates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier
    pub id: String,
    /// Identifier used as `sender_id` on counterpart messages
    pub counterpart_id: String,
    /// Display name of the other party
    pub counterpart_name: String,
    /// Marketplace role of the other party
    pub counterpart_role: CounterpartRole,
    /// Contextual label for the job this thread is about
    pub project_title: String,
    /// Message history, oldest first
    #[serde(default, rename = "message")]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Creates a counterpart-authored message for this thread.
    pub fn counterpart_message(&self, content: impl Into<String>) -> Message {
        Message::new(
            self.counterpart_id.clone(),
            self.counterpart_name.clone(),
            content,
            false,
        )
    }

    /// Builds the list-row view of this conversation.
    pub fn summary(&self) -> ConversationSummary {
        let last = self.messages.last();
        ConversationSummary {
            id: self.id.clone(),
            counterpart_name: self.counterpart_name.clone(),
            counterpart_role: self.counterpart_role,
            project_title: self.project_title.clone(),
            last_message: last.map(|m| m.content.clone()),
            last_timestamp: last.map(|m| m.timestamp.clone()),
            message_count: self.messages.len(),
        }
    }
}

/// Row shown by the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub counterpart_name: String,
    pub counterpart_role: CounterpartRole,
    pub project_title: String,
    pub last_message: Option<String>,
    pub last_timestamp: Option<String>,
    pub message_count: usize,
}
