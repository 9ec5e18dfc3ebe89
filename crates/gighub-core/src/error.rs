//! Error types for the Gighub messaging core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Gighub crates.
///
/// A blocked message is not an error: the classifier reports it as a
/// [`ModerationVerdict`](crate::moderation::ModerationVerdict). These variants
/// cover setup concerns such as loading configuration or resolving a
/// conversation id.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GighubError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A moderation rule pattern failed to compile
    #[error("Invalid pattern for rule '{rule}': {message}")]
    InvalidPattern { rule: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GighubError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidPattern error
    pub fn invalid_pattern(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GighubError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for GighubError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<regex::Error> for GighubError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern {
            rule: "<unnamed>".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GighubError>`.
pub type Result<T> = std::result::Result<T, GighubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = GighubError::not_found("Conversation", "conv-9");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Conversation 'conv-9'");
    }

    #[test]
    fn test_toml_error_is_serialization() {
        let err: GighubError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_regex_error_is_invalid_pattern() {
        let err: GighubError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, GighubError::InvalidPattern { .. }));
    }
}
