//! Application layer for Gighub messaging.
//!
//! Coordinates the domain pieces into live conversations: the session
//! controller that gates and posts messages and simulates the counterpart,
//! and the manager behind the conversation list.

pub mod session;
pub mod warning;

pub use session::{
    ConversationManager, ConversationSession, ReplyPool, SessionCache, SessionFactory,
    SubmitOutcome,
};
pub use warning::{NoopWarningSurface, TracingWarningSurface, WarningSurface};
