//! TOML-based ConversationRepository implementation.
//!
//! Reads a read-only fixture file:
//!
//! ```toml
//! [[conversation]]
//! id = "conv-1"
//! counterpart_id = "client-7"
//! counterpart_name = "Maria Lopez"
//! counterpart_role = "client"
//! project_title = "Landing page redesign"
//!
//! [[conversation.message]]
//! sender_id = "client-7"
//! sender_display_name = "Maria Lopez"
//! content = "Could you share a rough timeline?"
//! timestamp = "9:31 AM"
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gighub_core::conversation::{Conversation, ConversationRepository};
use gighub_core::error::{GighubError, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ConversationFile {
    #[serde(default, rename = "conversation")]
    conversations: Vec<Conversation>,
}

/// Repository backed by a TOML fixture.
///
/// The file is re-read on each call and never written.
pub struct TomlConversationRepository {
    path: PathBuf,
}

impl TomlConversationRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Conversation>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            GighubError::io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let file: ConversationFile = toml::from_str(&content)?;

        tracing::debug!(
            path = %self.path.display(),
            conversations = file.conversations.len(),
            "[ConversationRepository] Loaded fixture"
        );
        Ok(file.conversations)
    }
}

#[async_trait]
impl ConversationRepository for TomlConversationRepository {
    async fn find_by_id(&self, conversation_id: &str) -> Result<Option<Conversation>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|c| c.id == conversation_id))
    }

    async fn list_all(&self) -> Result<Vec<Conversation>> {
        self.load().await
    }
}
