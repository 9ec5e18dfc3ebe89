use std::sync::Arc;
use std::time::Duration;

use gighub_core::config::MessagingSettings;
use gighub_core::conversation::Conversation;
use gighub_core::moderation::ContentClassifier;
use gighub_core::user::IdentityProvider;

use super::controller::ConversationSession;
use super::reply::ReplyPool;
use crate::warning::WarningSurface;

/// Factory for creating [`ConversationSession`] instances from conversation data.
///
/// Holds the collaborators every session shares: the identity provider, the
/// classifier, the warning surface, and the reply settings.
pub struct SessionFactory {
    /// Source of the current user's identity
    identity: Arc<dyn IdentityProvider>,
    /// Classifier applied to every outgoing message
    classifier: Arc<ContentClassifier>,
    /// Receives blocked-message verdicts
    warning_surface: Arc<dyn WarningSurface>,
    reply_pool: ReplyPool,
    reply_delay: Duration,
}

impl SessionFactory {
    /// Creates a new SessionFactory.
    ///
    /// # Arguments
    ///
    /// * `identity` - Provider for the current user's identity
    /// * `classifier` - Content classifier shared by all sessions
    /// * `warning_surface` - Surface that displays blocked-message warnings
    /// * `settings` - Reply delay and reply pool
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        classifier: Arc<ContentClassifier>,
        warning_surface: Arc<dyn WarningSurface>,
        settings: &MessagingSettings,
    ) -> Self {
        Self {
            identity,
            classifier,
            warning_surface,
            reply_pool: ReplyPool::new(settings.reply_pool.clone()),
            reply_delay: settings.reply_delay(),
        }
    }

    /// Opens a session over the given conversation.
    ///
    /// The current user is read from the identity provider once, here.
    pub fn open(&self, conversation: Conversation) -> ConversationSession {
        tracing::debug!(
            conversation_id = %conversation.id,
            messages = conversation.messages.len(),
            "[SessionFactory] Opening session"
        );

        ConversationSession::new(
            conversation,
            self.identity.current_user(),
            self.classifier.clone(),
            self.warning_surface.clone(),
            self.reply_pool.clone(),
            self.reply_delay,
        )
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }
}
