use serde::{Deserialize, Serialize};

use super::message::Message;

/// Presentation feed published by a live conversation session.
///
/// Views subscribe to these to render the thread: every `MessageAppended`
/// is also the cue to bring the newest message into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the thread.
    MessageAppended {
        conversation_id: String,
        message: Message,
    },
    /// The counterpart typing indicator changed.
    TypingChanged {
        conversation_id: String,
        is_typing: bool,
    },
    /// A submit was rejected by moderation; nothing was appended.
    SubmitBlocked {
        conversation_id: String,
        reasons: Vec<String>,
        detected_patterns: Vec<String>,
    },
}

impl SessionEvent {
    pub fn conversation_id(&self) -> &str {
        match self {
            Self::MessageAppended {
                conversation_id, ..
            }
            | Self::TypingChanged {
                conversation_id, ..
            }
            | Self::SubmitBlocked {
                conversation_id, ..
            } => conversation_id,
        }
    }
}
