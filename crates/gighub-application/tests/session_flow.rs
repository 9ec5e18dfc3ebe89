use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gighub_application::{ConversationManager, SessionFactory, SubmitOutcome, WarningSurface};
use gighub_core::config::MessagingSettings;
use gighub_core::conversation::{Conversation, ConversationRepository, CounterpartRole};
use gighub_core::error::Result;
use gighub_core::moderation::ContentClassifier;
use gighub_core::user::{DefaultIdentityProvider, UserProfile};

const DELAY: Duration = Duration::from_millis(1_500);

struct FixedRepository {
    conversations: Vec<Conversation>,
}

#[async_trait]
impl ConversationRepository for FixedRepository {
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

#[derive(Default)]
struct RecordingWarningSurface {
    warnings: Mutex<Vec<(Vec<String>, Vec<String>)>>,
}

impl WarningSurface for RecordingWarningSurface {
    fn show_warning(&self, reasons: &[String], detected_patterns: &[String]) {
        self.warnings
            .lock()
            .unwrap()
            .push((reasons.to_vec(), detected_patterns.to_vec()));
    }
}

fn thread(id: &str, counterpart: &str, opener: &str) -> Conversation {
    let mut conversation = Conversation {
        id: id.to_string(),
        counterpart_id: format!("{id}-counterpart"),
        counterpart_name: counterpart.to_string(),
        counterpart_role: CounterpartRole::Client,
        project_title: format!("{counterpart}'s project"),
        messages: Vec::new(),
    };
    conversation
        .messages
        .push(conversation.counterpart_message(opener));
    conversation
}

fn manager_with(warnings: Arc<RecordingWarningSurface>) -> ConversationManager {
    let repository = Arc::new(FixedRepository {
        conversations: vec![
            thread("conv-a", "Maria Lopez", "Can you start Monday?"),
            thread("conv-b", "Dev Patel", "Sent over the brief."),
        ],
    });
    let identity = Arc::new(DefaultIdentityProvider::new(UserProfile {
        id: "user-42".to_string(),
        display_name: "Sam".to_string(),
    }));
    let settings = MessagingSettings {
        reply_delay_ms: DELAY.as_millis() as u64,
        reply_pool: vec!["Thanks!".to_string(), "Got it.".to_string()],
    };
    let factory = SessionFactory::new(
        identity,
        Arc::new(ContentClassifier::builtin().unwrap()),
        warnings,
        &settings,
    );

    ConversationManager::new(repository, factory)
}

fn manager() -> ConversationManager {
    manager_with(Arc::default())
}

async fn settle() {
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
}

#[tokio::test(start_paused = true)]
async fn test_list_conversations_in_source_order() {
    let manager = manager();

    let summaries = manager.list_conversations().await.unwrap();
    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["conv-a", "conv-b"]);
    assert_eq!(summaries[0].message_count, 1);
    assert!(manager.active_conversation_id().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_select_unknown_conversation_is_not_found() {
    let manager = manager();

    let err = manager.select_conversation("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(manager.active_session().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_submit_without_selection_fails() {
    let manager = manager();
    assert!(manager.submit("hello").await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_accepted_message_and_reply_through_manager() {
    let manager = manager();
    let session = manager.select_conversation("conv-a").await.unwrap();

    let outcome = manager.submit("Monday works for me").await.unwrap();
    let SubmitOutcome::Accepted { message } = outcome else {
        panic!("expected accepted outcome");
    };
    assert_eq!(message.sender_id, "user-42");
    assert_eq!(message.sender_display_name, "Sam");
    assert!(message.is_own);
    assert_eq!(session.message_count().await, 2);

    settle().await;
    let messages = session.messages().await;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].content, "Thanks!");
    assert_eq!(messages[2].sender_id, "conv-a-counterpart");

    let summaries = manager.list_conversations().await.unwrap();
    assert_eq!(summaries[0].message_count, 3);
    assert_eq!(summaries[0].last_message.as_deref(), Some("Thanks!"));
}

#[tokio::test(start_paused = true)]
async fn test_blocked_message_reaches_warning_surface() {
    let warnings = Arc::new(RecordingWarningSurface::default());
    let manager = manager_with(warnings.clone());
    let session = manager.select_conversation("conv-a").await.unwrap();

    let outcome = manager
        .submit("Send it to my whatsapp, number is 555 123 4567")
        .await
        .unwrap();
    assert!(outcome.is_blocked());
    assert_eq!(session.message_count().await, 1);
    assert_eq!(
        session.draft().await,
        "Send it to my whatsapp, number is 555 123 4567"
    );

    let recorded = warnings.warnings.lock().unwrap().clone();
    assert_eq!(recorded.len(), 1);
    let (reasons, patterns) = &recorded[0];
    assert_eq!(
        reasons,
        &vec![
            "Phone numbers are not allowed".to_string(),
            "Sharing WhatsApp contact details is not allowed".to_string(),
        ]
    );
    assert_eq!(
        patterns,
        &vec!["Phone number".to_string(), "WhatsApp".to_string()]
    );

    settle().await;
    assert_eq!(session.message_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_switching_keeps_replies_in_their_conversation() {
    let manager = manager();

    let first = manager.select_conversation("conv-a").await.unwrap();
    manager.submit("I'll have a draft by Friday").await.unwrap();

    let second = manager.select_conversation("conv-b").await.unwrap();
    assert_eq!(manager.active_conversation_id().await.as_deref(), Some("conv-b"));
    assert!(!second.is_counterpart_typing().await);
    assert_eq!(second.reply_cursor().await, 0);

    settle().await;
    assert_eq!(first.message_count().await, 3);
    assert_eq!(second.message_count().await, 1);

    // Switching back returns the same live session
    let again = manager.select_conversation("conv-a").await.unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(again.reply_cursor().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_close_conversation_cancels_pending_reply() {
    let manager = manager();
    let session = manager.select_conversation("conv-a").await.unwrap();

    manager.submit("Quick question about scope").await.unwrap();
    manager.close_conversation("conv-a").await;
    assert!(manager.active_conversation_id().await.is_none());

    settle().await;
    assert_eq!(session.message_count().await, 2);
    assert!(!session.is_counterpart_typing().await);

    // Reopening starts from the data source again
    let reopened = manager.select_conversation("conv-a").await.unwrap();
    assert!(!Arc::ptr_eq(&session, &reopened));
    assert_eq!(reopened.message_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_close_all_clears_selection() {
    let manager = manager();
    manager.select_conversation("conv-a").await.unwrap();
    manager.select_conversation("conv-b").await.unwrap();

    manager.close_all().await;
    assert!(manager.active_session().await.is_none());
    assert!(manager.session("conv-a").await.is_none());
    assert!(manager.session("conv-b").await.is_none());
}
