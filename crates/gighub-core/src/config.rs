//! Root configuration model.
//!
//! Mirrors `~/.config/gighub/config.toml`. Every section falls back to its
//! defaults so a partial (or missing) file is always valid.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Default delay before the counterpart's simulated reply lands.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1_500;

/// Canned counterpart replies, used round-robin.
pub const DEFAULT_REPLY_POOL: &[&str] = &[
    "Thanks for the update! I'll take a look and get back to you shortly.",
    "Sounds good. Let me know if you need anything else from my side.",
    "Great, that works for me. Looking forward to the next milestone.",
    "Got it. I'll review the details and confirm by end of day.",
    "Perfect, thanks for keeping me in the loop!",
];

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub user: UserProfile,
    #[serde(default)]
    pub messaging: MessagingSettings,
    #[serde(default)]
    pub moderation: ModerationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Timing and canned content for the simulated counterpart.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessagingSettings {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default = "default_reply_pool")]
    pub reply_pool: Vec<String>,
}

impl Default for MessagingSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            reply_pool: default_reply_pool(),
        }
    }
}

impl MessagingSettings {
    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reply_delay_ms)
    }
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_reply_pool() -> Vec<String> {
    DEFAULT_REPLY_POOL.iter().map(|s| s.to_string()).collect()
}

/// Adjustments applied on top of the built-in moderation rule table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModerationSettings {
    /// Rule ids removed from the table (e.g. `"discord"`).
    #[serde(default)]
    pub disabled_rules: Vec<String>,
    /// Extra off-platform phrases, appended after the built-in list.
    #[serde(default)]
    pub extra_phrases: Vec<String>,
    /// Whether the Twitter/X and LinkedIn rules take part in blocking.
    #[serde(default = "default_true")]
    pub social_profiles: bool,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            extra_phrases: Vec::new(),
            social_profiles: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
