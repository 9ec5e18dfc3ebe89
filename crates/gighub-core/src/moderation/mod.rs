//! Content moderation for in-platform messages.
//!
//! Every outgoing message is classified before it is posted. The classifier
//! looks for contact details, external platforms and payment rails, links,
//! and phrases that try to move the conversation off-platform.
//!
//! # Module Structure
//!
//! - `verdict`: Classification result (`ModerationVerdict`)
//! - `rule`: Declarative rule table (`Rule`, `Matcher`, `RuleSet`)
//! - `patterns`: The built-in table contents
//! - `classifier`: Rule evaluation and merging (`ContentClassifier`)

mod classifier;
mod patterns;
mod rule;
mod verdict;

// Re-export public API
pub use classifier::ContentClassifier;
pub use patterns::{OFF_PLATFORM_PHRASES, OFF_PLATFORM_REASON, PHRASE_RULE_ID};
pub use rule::{ClassifierInput, Label, Matcher, Rule, RuleCategory, RuleHit, RuleSet};
pub use verdict::ModerationVerdict;
