use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::controller::ConversationSession;

/// In-memory cache of opened conversation sessions.
///
/// A session stays cached after the user switches away, so its messages and
/// pending replies survive until the conversation is closed.
pub struct SessionCache {
    /// Sessions keyed by conversation ID
    sessions: Arc<RwLock<HashMap<String, Arc<ConversationSession>>>>,
}

impl SessionCache {
    /// Creates a new empty SessionCache.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets a cached session by conversation ID.
    pub async fn get(&self, conversation_id: &str) -> Option<Arc<ConversationSession>> {
        let sessions = self.sessions.read().await;
        sessions.get(conversation_id).cloned()
    }

    /// Returns the cached session, or inserts the one built by `init`.
    ///
    /// `init` runs under the write lock, so two callers never build
    /// competing sessions for the same conversation.
    pub async fn get_or_insert_with<F>(
        &self,
        conversation_id: &str,
        init: F,
    ) -> Arc<ConversationSession>
    where
        F: FnOnce() -> ConversationSession,
    {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(init()))
            .clone()
    }

    /// Removes a session from the cache, returning it if present.
    pub async fn remove(&self, conversation_id: &str) -> Option<Arc<ConversationSession>> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(conversation_id)
    }

    /// Removes and returns all cached sessions.
    pub async fn drain(&self) -> Vec<Arc<ConversationSession>> {
        let mut sessions = self.sessions.write().await;
        sessions.drain().map(|(_, session)| session).collect()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
