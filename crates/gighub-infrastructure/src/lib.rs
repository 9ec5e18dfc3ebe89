//! Infrastructure adapters for Gighub.
//!
//! File locations, the configuration loader, the config-backed identity
//! provider, and the conversation data sources.

pub mod config_service;
pub mod in_memory_conversation_repository;
pub mod paths;
mod seed;
pub mod toml_conversation_repository;
pub mod user_service;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_conversation_repository::InMemoryConversationRepository;
pub use crate::paths::GighubPaths;
pub use crate::toml_conversation_repository::TomlConversationRepository;
pub use crate::user_service::ConfigBasedIdentityProvider;
