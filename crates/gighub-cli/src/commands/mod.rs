pub mod chat;
pub mod classify;
pub mod conversations;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use gighub_application::{ConversationManager, SessionFactory, WarningSurface};
use gighub_core::config::RootConfig;
use gighub_core::conversation::ConversationRepository;
use gighub_core::moderation::ContentClassifier;
use gighub_core::user::IdentityProvider;
use gighub_infrastructure::{
    ConfigBasedIdentityProvider, ConfigService, GighubPaths, InMemoryConversationRepository,
    TomlConversationRepository,
};

/// Prints blocked-message warnings to stderr.
pub struct ConsoleWarningSurface;

impl WarningSurface for ConsoleWarningSurface {
    fn show_warning(&self, reasons: &[String], detected_patterns: &[String]) {
        eprintln!("Message not sent:");
        for reason in reasons {
            eprintln!("  - {reason}");
        }
        if !detected_patterns.is_empty() {
            eprintln!("Detected: {}", detected_patterns.join(", "));
        }
    }
}

/// Picks the conversation source: an explicit fixture, the default fixture
/// if one exists, or the demo threads.
fn build_repository(
    fixture: Option<PathBuf>,
    identity: &dyn IdentityProvider,
) -> Arc<dyn ConversationRepository> {
    let fixture = match fixture {
        Some(path) => Some(path),
        None => GighubPaths::conversations_file()
            .ok()
            .filter(|path| path.exists()),
    };

    match fixture {
        Some(path) => {
            tracing::info!(path = %path.display(), "[CLI] Using conversation fixture");
            Arc::new(TomlConversationRepository::with_path(path))
        }
        None => Arc::new(InMemoryConversationRepository::with_demo_data(
            &identity.current_user(),
        )),
    }
}

pub fn build_manager(
    config_service: &ConfigService,
    config: &RootConfig,
    fixture: Option<PathBuf>,
) -> Result<Arc<ConversationManager>> {
    let identity = Arc::new(ConfigBasedIdentityProvider::new(config_service.clone()));
    let repository = build_repository(fixture, identity.as_ref());
    let classifier = ContentClassifier::from_settings(&config.moderation)
        .context("Failed to build moderation rules")?;

    let factory = SessionFactory::new(
        identity,
        Arc::new(classifier),
        Arc::new(ConsoleWarningSurface),
        &config.messaging,
    );

    Ok(Arc::new(ConversationManager::new(repository, factory)))
}
