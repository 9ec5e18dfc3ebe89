use std::sync::Arc;

use gighub_core::conversation::{ConversationRepository, ConversationSummary};
use gighub_core::error::{GighubError, Result};
use tokio::sync::RwLock;

use super::cache::SessionCache;
use super::controller::{ConversationSession, SubmitOutcome};
use super::factory::SessionFactory;

/// Tracks the conversation list and which conversation is active.
///
/// `ConversationManager` is responsible for:
/// - Listing conversations from the data source
/// - Opening a session the first time a conversation is selected
/// - Switching the active conversation
/// - Routing submits to the active session
///
/// Sessions are kept after switching away, so a reply scheduled in one
/// conversation always lands in that conversation, never in whichever one is
/// active when it fires.
pub struct ConversationManager {
    /// Data source for conversation metadata and initial history
    repository: Arc<dyn ConversationRepository>,
    /// Builds sessions with shared collaborators
    factory: SessionFactory,
    /// Opened sessions
    sessions: SessionCache,
    /// ID of the selected conversation
    active_id: RwLock<Option<String>>,
}

impl ConversationManager {
    /// Creates a new `ConversationManager`.
    ///
    /// # Arguments
    ///
    /// * `repository` - The data source for conversations
    /// * `factory` - Factory used to open sessions
    pub fn new(repository: Arc<dyn ConversationRepository>, factory: SessionFactory) -> Self {
        Self {
            repository,
            factory,
            sessions: SessionCache::new(),
            active_id: RwLock::new(None),
        }
    }

    /// Lists conversation summaries in data-source order.
    ///
    /// Conversations with an open session report its live state.
    ///
    /// # Errors
    ///
    /// Returns an error if the data source fails.
    pub async fn list_conversations(&self) -> Result<Vec<ConversationSummary>> {
        let conversations = self.repository.list_all().await?;
        let mut summaries = Vec::with_capacity(conversations.len());

        for conversation in conversations {
            let summary = match self.sessions.get(&conversation.id).await {
                Some(session) => session.summary().await,
                None => conversation.summary(),
            };
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Makes `conversation_id` the active conversation.
    ///
    /// Opens a session on first selection; later selections return the
    /// existing one with its messages and pending replies intact.
    ///
    /// # Errors
    ///
    /// Returns `GighubError::NotFound` if the data source has no such
    /// conversation.
    pub async fn select_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Arc<ConversationSession>> {
        let session = match self.sessions.get(conversation_id).await {
            Some(session) => session,
            None => {
                let conversation = self
                    .repository
                    .find_by_id(conversation_id)
                    .await?
                    .ok_or_else(|| GighubError::not_found("Conversation", conversation_id))?;

                self.sessions
                    .get_or_insert_with(conversation_id, || self.factory.open(conversation))
                    .await
            }
        };

        *self.active_id.write().await = Some(conversation_id.to_string());
        tracing::info!(conversation_id, "[ConversationManager] Conversation selected");

        Ok(session)
    }

    /// Returns the ID of the active conversation.
    pub async fn active_conversation_id(&self) -> Option<String> {
        self.active_id.read().await.clone()
    }

    /// Returns the active session.
    ///
    /// # Returns
    ///
    /// `Some(session)` if a conversation is selected, `None` otherwise.
    pub async fn active_session(&self) -> Option<Arc<ConversationSession>> {
        let active_id = self.active_id.read().await.clone()?;
        self.sessions.get(&active_id).await
    }

    /// Returns the session of `conversation_id` if it has been opened.
    pub async fn session(&self, conversation_id: &str) -> Option<Arc<ConversationSession>> {
        self.sessions.get(conversation_id).await
    }

    /// Submits `text` to the active conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if no conversation is selected.
    pub async fn submit(&self, text: impl Into<String>) -> Result<SubmitOutcome> {
        let session = self
            .active_session()
            .await
            .ok_or_else(|| GighubError::internal("No active conversation"))?;

        Ok(session.submit(text).await)
    }

    /// Closes an opened conversation, cancelling its pending replies.
    ///
    /// Clears the selection if it was the active one. Closing a conversation
    /// that was never opened is a no-op.
    pub async fn close_conversation(&self, conversation_id: &str) {
        let Some(session) = self.sessions.remove(conversation_id).await else {
            return;
        };
        session.cancel_pending_replies().await;

        let mut active_id = self.active_id.write().await;
        if active_id.as_deref() == Some(conversation_id) {
            *active_id = None;
        }

        tracing::info!(conversation_id, "[ConversationManager] Conversation closed");
    }

    /// Closes every opened conversation.
    pub async fn close_all(&self) {
        for session in self.sessions.drain().await {
            session.cancel_pending_replies().await;
        }
        *self.active_id.write().await = None;
    }
}
