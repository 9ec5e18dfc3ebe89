//! Domain layer for Gighub in-platform messaging.
//!
//! Holds the conversation and message model, the content classifier that
//! gates every outgoing message, the identity and data-source traits the
//! application layer consumes, and the shared error type.

pub mod config;
pub mod conversation;
pub mod error;
pub mod moderation;
pub mod user;

// Re-export common error type
pub use error::GighubError;
