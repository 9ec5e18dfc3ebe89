//! Content classifier.

use super::rule::{ClassifierInput, RuleSet};
use super::verdict::ModerationVerdict;
use crate::config::ModerationSettings;
use crate::error::Result;

/// Classifies message text against a [`RuleSet`].
///
/// Classification is pure and synchronous: the same text always yields the
/// same verdict, and no input can make it fail. Every rule is evaluated; the
/// findings are merged in table order with duplicates removed.
#[derive(Debug, Clone)]
pub struct ContentClassifier {
    rules: RuleSet,
}

impl ContentClassifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Classifier over the full built-in table.
    pub fn builtin() -> Result<Self> {
        RuleSet::builtin().map(Self::new)
    }

    /// Classifier over the built-in table adjusted by configuration.
    pub fn from_settings(settings: &ModerationSettings) -> Result<Self> {
        RuleSet::from_settings(settings).map(Self::new)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classifies `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use gighub_core::moderation::ContentClassifier;
    ///
    /// let classifier = ContentClassifier::builtin().unwrap();
    /// let verdict = classifier.classify("Contact me at jane@example.com");
    /// assert!(verdict.is_blocked());
    /// assert!(verdict.detected_patterns().contains(&"Email address".to_string()));
    /// ```
    pub fn classify(&self, text: &str) -> ModerationVerdict {
        if text.is_empty() {
            return ModerationVerdict::Admitted;
        }

        let input = ClassifierInput::new(text);
        let mut reasons: Vec<String> = Vec::new();
        let mut detected_patterns: Vec<String> = Vec::new();

        for rule in self.rules.rules() {
            let Some(hit) = rule.evaluate(&input) else {
                continue;
            };
            tracing::trace!(rule = %hit.rule_id, category = %rule.category, "[Classifier] Rule matched");

            push_unique(&mut reasons, hit.reason);
            for label in hit.labels {
                push_unique(&mut detected_patterns, label);
            }
        }

        ModerationVerdict::from_findings(reasons, detected_patterns)
    }
}

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}
