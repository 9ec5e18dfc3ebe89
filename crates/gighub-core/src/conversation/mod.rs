//! Conversation domain module.
//!
//! This module contains the conversation thread model, the message type
//! exchanged inside a thread, the data-source trait that supplies threads,
//! and the events a live session publishes.
//!
//! # Module Structure
//!
//! - `message`: A single exchanged utterance (`Message`)
//! - `model`: Thread metadata and history (`Conversation`, `CounterpartRole`)
//! - `repository`: Read-only conversation data source (`ConversationRepository`)
//! - `event`: Presentation feed published by sessions (`SessionEvent`)

mod event;
mod message;
mod model;
mod repository;

// Re-export public API
pub use event::SessionEvent;
pub use message::{JUST_NOW, Message};
pub use model::{Conversation, ConversationSummary, CounterpartRole};
pub use repository::ConversationRepository;
