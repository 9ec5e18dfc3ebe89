//! Conversation session services.
//!
//! This module contains the per-conversation session controller, the cache
//! of opened sessions, and the manager that tracks which conversation is
//! active.

mod cache;
mod controller;
mod factory;
mod manager;
mod reply;

pub use cache::SessionCache;
pub use controller::{ConversationSession, SubmitOutcome};
pub use factory::SessionFactory;
pub use manager::ConversationManager;
pub use reply::ReplyPool;
