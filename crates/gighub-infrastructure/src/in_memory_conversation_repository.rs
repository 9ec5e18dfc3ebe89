//! In-memory ConversationRepository implementation.

use async_trait::async_trait;
use gighub_core::conversation::{Conversation, ConversationRepository};
use gighub_core::error::Result;
use gighub_core::user::UserProfile;

use crate::seed::demo_conversations;

/// Repository over a fixed list of conversations held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Vec<Conversation>,
}

impl InMemoryConversationRepository {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    /// Repository seeded with demo marketplace threads, with own messages
    /// authored by `user`.
    pub fn with_demo_data(user: &UserProfile) -> Self {
        Self::new(demo_conversations(&user.id, &user.display_name))
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn find_by_id(&self, conversation_id: &str) -> Result<Option<Conversation>> {
        Ok(self
            .conversations
            .iter()
            .find(|c| c.id == conversation_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Conversation>> {
        Ok(self.conversations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_data_is_addressable() {
        let user = UserProfile::default();
        let repo = InMemoryConversationRepository::with_demo_data(&user);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 3);

        let first = repo.find_by_id(&all[0].id).await.unwrap().unwrap();
        assert_eq!(first, all[0]);
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_demo_own_messages_use_current_user() {
        let user = UserProfile {
            id: "user-42".to_string(),
            display_name: "Sam".to_string(),
        };
        let repo = InMemoryConversationRepository::with_demo_data(&user);

        let conversation = repo.find_by_id("conv-landing-page").await.unwrap().unwrap();
        let own: Vec<_> = conversation.messages.iter().filter(|m| m.is_own).collect();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].sender_id, "user-42");
        assert_eq!(own[0].sender_display_name, "Sam");
    }
}
