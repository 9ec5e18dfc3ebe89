//! Conversation data source trait.

use super::model::Conversation;
use crate::error::Result;
use async_trait::async_trait;

/// Read-only source of conversation metadata and initial history.
///
/// Sessions copy what they are given and append to their own copy; they never
/// write back or reload mid-session.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Finds a conversation by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Conversation))`: Conversation found
    /// - `Ok(None)`: Conversation not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, conversation_id: &str) -> Result<Option<Conversation>>;

    /// Lists all conversations in display order.
    async fn list_all(&self) -> Result<Vec<Conversation>>;
}
