//! Moderation verdict type.

use serde::{Deserialize, Serialize};

/// Outcome of classifying one message.
///
/// A verdict is transient: it is handed to the caller (and to the warning
/// surface) and never stored. Match on it before reading reasons so the
/// blocked case cannot be skipped by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModerationVerdict {
    /// No rule matched; the message may be posted.
    Admitted,
    /// At least one rule matched.
    Blocked {
        /// Rule explanations, first occurrence order, no duplicates
        reasons: Vec<String>,
        /// Labels of the matched signals, first occurrence order, no duplicates
        detected_patterns: Vec<String>,
    },
}

impl ModerationVerdict {
    /// Builds a verdict from already de-duplicated lists.
    ///
    /// An empty `reasons` list always yields `Admitted`.
    pub fn from_findings(reasons: Vec<String>, detected_patterns: Vec<String>) -> Self {
        if reasons.is_empty() {
            Self::Admitted
        } else {
            Self::Blocked {
                reasons,
                detected_patterns,
            }
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Rule explanations; empty when admitted.
    pub fn reasons(&self) -> &[String] {
        match self {
            Self::Admitted => &[],
            Self::Blocked { reasons, .. } => reasons,
        }
    }

    /// Matched signal labels; empty when admitted.
    pub fn detected_patterns(&self) -> &[String] {
        match self {
            Self::Admitted => &[],
            Self::Blocked {
                detected_patterns, ..
            } => detected_patterns,
        }
    }
}
