//! Conversation session controller.
//!
//! A [`ConversationSession`] owns the live message list of one conversation.
//! Every submit is classified first; blocked text goes to the warning surface
//! and is never posted, admitted text is appended at once and triggers a
//! simulated counterpart reply after the configured delay.

use std::sync::Arc;
use std::time::Duration;

use gighub_core::conversation::{Conversation, ConversationSummary, Message, SessionEvent};
use gighub_core::moderation::{ContentClassifier, ModerationVerdict};
use gighub_core::user::UserProfile;
use serde::Serialize;
use tokio::sync::{RwLock, broadcast};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::reply::ReplyPool;
use crate::warning::WarningSurface;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// What a call to [`ConversationSession::submit`] did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The draft was blank; nothing changed.
    Ignored,
    /// Moderation rejected the draft; nothing was appended and the draft was kept.
    Blocked { verdict: ModerationVerdict },
    /// The message was appended and a counterpart reply was scheduled.
    Accepted { message: Message },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Ephemeral per-conversation state.
#[derive(Debug)]
struct SessionState {
    conversation: Conversation,
    draft_text: String,
    /// Next index into the reply pool; advanced once per accepted submit
    reply_cursor: usize,
    /// Replies scheduled but not yet delivered or cancelled
    pending_replies: usize,
    /// Parent of the tokens handed to pending replies
    reply_token: CancellationToken,
}

struct SessionInner {
    conversation_id: String,
    user: UserProfile,
    classifier: Arc<ContentClassifier>,
    warning_surface: Arc<dyn WarningSurface>,
    reply_pool: ReplyPool,
    reply_delay: Duration,
    state: RwLock<SessionState>,
    events: broadcast::Sender<SessionEvent>,
    shutdown: CancellationToken,
}

impl SessionInner {
    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    fn publish_appended(&self, message: Message) {
        self.publish(SessionEvent::MessageAppended {
            conversation_id: self.conversation_id.clone(),
            message,
        });
    }

    fn publish_typing(&self, is_typing: bool) {
        self.publish(SessionEvent::TypingChanged {
            conversation_id: self.conversation_id.clone(),
            is_typing,
        });
    }

    /// Settles one pending reply, appending `content` when it was delivered.
    async fn finish_reply(&self, content: Option<String>) {
        let mut state = self.state.write().await;
        state.pending_replies = state.pending_replies.saturating_sub(1);

        if state.pending_replies == 0 {
            self.publish_typing(false);
        }

        match content {
            Some(content) => {
                let message = state.conversation.counterpart_message(content);
                state.conversation.messages.push(message.clone());
                tracing::debug!(
                    conversation_id = %self.conversation_id,
                    message_id = %message.id,
                    "[Session] Counterpart reply delivered"
                );
                self.publish_appended(message);
            }
            None => {
                tracing::debug!(
                    conversation_id = %self.conversation_id,
                    "[Session] Pending reply cancelled"
                );
            }
        }
    }
}

/// Live session for one conversation.
///
/// Dropping the session cancels its outstanding replies.
pub struct ConversationSession {
    inner: Arc<SessionInner>,
}

impl ConversationSession {
    /// Creates a session over `conversation` for the given user.
    ///
    /// `is_own` on the initial history is recomputed against `user`.
    pub fn new(
        mut conversation: Conversation,
        user: UserProfile,
        classifier: Arc<ContentClassifier>,
        warning_surface: Arc<dyn WarningSurface>,
        reply_pool: ReplyPool,
        reply_delay: Duration,
    ) -> Self {
        for message in &mut conversation.messages {
            message.is_own = message.sender_id == user.id;
        }

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let shutdown = CancellationToken::new();

        Self {
            inner: Arc::new(SessionInner {
                conversation_id: conversation.id.clone(),
                user,
                classifier,
                warning_surface,
                reply_pool,
                reply_delay,
                state: RwLock::new(SessionState {
                    conversation,
                    draft_text: String::new(),
                    reply_cursor: 0,
                    pending_replies: 0,
                    reply_token: shutdown.child_token(),
                }),
                events,
                shutdown,
            }),
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.inner.conversation_id
    }

    /// The user own messages are stamped with.
    pub fn user(&self) -> &UserProfile {
        &self.inner.user
    }

    /// Subscribes to this session's presentation feed.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the conversation, including every appended message.
    pub async fn conversation(&self) -> Conversation {
        self.inner.state.read().await.conversation.clone()
    }

    /// Snapshot of the ordered message list.
    pub async fn messages(&self) -> Vec<Message> {
        self.inner.state.read().await.conversation.messages.clone()
    }

    pub async fn message_count(&self) -> usize {
        self.inner.state.read().await.conversation.messages.len()
    }

    pub async fn summary(&self) -> ConversationSummary {
        self.inner.state.read().await.conversation.summary()
    }

    pub async fn draft(&self) -> String {
        self.inner.state.read().await.draft_text.clone()
    }

    pub async fn update_draft(&self, text: impl Into<String>) {
        self.inner.state.write().await.draft_text = text.into();
    }

    /// True while at least one counterpart reply is pending.
    pub async fn is_counterpart_typing(&self) -> bool {
        self.inner.state.read().await.pending_replies > 0
    }

    pub async fn reply_cursor(&self) -> usize {
        self.inner.state.read().await.reply_cursor
    }

    pub async fn pending_replies(&self) -> usize {
        self.inner.state.read().await.pending_replies
    }

    /// Submits the current draft.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft().await;
        self.submit(draft).await
    }

    /// Classifies `draft_text` and posts it if admitted.
    ///
    /// - Blank text is ignored without touching any state.
    /// - Blocked text is kept as the draft, its verdict goes to the warning
    ///   surface, and nothing is appended.
    /// - Admitted text is appended immediately, the draft is cleared, and a
    ///   counterpart reply is scheduled. Replies already pending keep running.
    pub async fn submit(&self, draft_text: impl Into<String>) -> SubmitOutcome {
        let draft_text = draft_text.into();
        if draft_text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let verdict = self.inner.classifier.classify(&draft_text);
        if let ModerationVerdict::Blocked {
            reasons,
            detected_patterns,
        } = &verdict
        {
            self.inner.state.write().await.draft_text = draft_text;

            tracing::info!(
                conversation_id = %self.inner.conversation_id,
                patterns = ?detected_patterns,
                "[Session] Message blocked by moderation"
            );
            self.inner
                .warning_surface
                .show_warning(reasons, detected_patterns);
            self.inner.publish(SessionEvent::SubmitBlocked {
                conversation_id: self.inner.conversation_id.clone(),
                reasons: reasons.clone(),
                detected_patterns: detected_patterns.clone(),
            });

            return SubmitOutcome::Blocked { verdict };
        }

        let message = Message::own(&self.inner.user, draft_text);
        let deadline = Instant::now() + self.inner.reply_delay;

        let (reply_index, token) = {
            let mut state = self.inner.state.write().await;
            state.conversation.messages.push(message.clone());
            state.draft_text.clear();

            let reply_index = state.reply_cursor;
            state.reply_cursor += 1;
            state.pending_replies += 1;

            self.inner.publish_appended(message.clone());
            if state.pending_replies == 1 {
                self.inner.publish_typing(true);
            }

            (reply_index, state.reply_token.child_token())
        };

        tracing::debug!(
            conversation_id = %self.inner.conversation_id,
            message_id = %message.id,
            reply_index,
            "[Session] Message accepted"
        );

        self.schedule_reply(reply_index, deadline, token);
        SubmitOutcome::Accepted { message }
    }

    /// Cancels every reply scheduled so far.
    ///
    /// Later submits schedule replies as usual.
    pub async fn cancel_pending_replies(&self) {
        let mut state = self.inner.state.write().await;
        state.reply_token.cancel();
        state.reply_token = self.inner.shutdown.child_token();
    }

    fn schedule_reply(&self, reply_index: usize, deadline: Instant, token: CancellationToken) {
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => inner.finish_reply(None).await,
                _ = tokio::time::sleep_until(deadline) => {
                    let content = inner.reply_pool.reply_at(reply_index).to_string();
                    inner.finish_reply(Some(content)).await;
                }
            }
        });
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        self.inner.shutdown.cancel();
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("conversation_id", &self.inner.conversation_id)
            .finish_non_exhaustive()
    }
}
