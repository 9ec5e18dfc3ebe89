//! Declarative moderation rules.
//!
//! A [`Rule`] pairs one or more [`Matcher`]s with the reason and label it
//! reports. The classifier evaluates every rule in a [`RuleSet`] the same
//! way, so adding or removing a rule is a table change.

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::patterns::{BUILTIN_RULES, OFF_PLATFORM_PHRASES, OFF_PLATFORM_REASON, PHRASE_RULE_ID};
use crate::config::ModerationSettings;
use crate::error::{GighubError, Result};

/// Coarse grouping of rules, used for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleCategory {
    ContactInfo,
    ExternalPlatform,
    SocialProfile,
    ExternalPayment,
    Cryptocurrency,
    ExternalLink,
    OffPlatformSolicitation,
}

/// Text prepared once per classification.
#[derive(Debug)]
pub struct ClassifierInput<'a> {
    pub raw: &'a str,
    /// Lowercased, with typographic apostrophes folded to `'`
    pub lowered: String,
    /// `raw` with all whitespace removed
    pub compact: String,
}

impl<'a> ClassifierInput<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase().replace(['\u{2018}', '\u{2019}'], "'"),
            compact: raw.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }
}

/// A single signal detector.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Regular expression applied to the raw text.
    Pattern(Regex),
    /// `min_len` or more consecutive ASCII digits once whitespace is removed.
    DigitRun { min_len: usize },
    /// Lowercase substring contained in the lowercased text.
    Phrase(String),
}

impl Matcher {
    /// Returns the matched signal, if any.
    pub fn find(&self, input: &ClassifierInput<'_>) -> Option<String> {
        match self {
            Self::Pattern(regex) => regex.find(input.raw).map(|m| m.as_str().to_string()),
            Self::DigitRun { min_len } => longest_digit_run(&input.compact)
                .filter(|run| run.len() >= *min_len)
                .map(str::to_string),
            Self::Phrase(phrase) => input.lowered.contains(phrase.as_str()).then(|| phrase.clone()),
        }
    }
}

fn longest_digit_run(text: &str) -> Option<&str> {
    let mut best: Option<&str> = None;
    let mut start = None;

    for (idx, ch) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
        match (ch.is_ascii_digit(), start) {
            (true, None) => start = Some(idx),
            (false, Some(begin)) => {
                let run = &text[begin..idx];
                if best.is_none_or(|b| run.len() > b.len()) {
                    best = Some(run);
                }
                start = None;
            }
            _ => {}
        }
    }

    best
}

/// How a rule labels what it found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Always the same label, e.g. "Email address".
    Fixed(String),
    /// The matched signal, wrapped in double quotes.
    Matched,
}

/// One entry of the rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub category: RuleCategory,
    pub matchers: Vec<Matcher>,
    pub reason: String,
    pub label: Label,
    /// Stop scanning this rule's matchers at the first hit.
    pub stop_on_match: bool,
}

/// Findings of one rule that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule_id: String,
    pub reason: String,
    pub labels: Vec<String>,
}

impl Rule {
    /// Runs the rule's matchers in order.
    pub fn evaluate(&self, input: &ClassifierInput<'_>) -> Option<RuleHit> {
        let mut labels = Vec::new();

        for matcher in &self.matchers {
            let Some(signal) = matcher.find(input) else {
                continue;
            };
            labels.push(match &self.label {
                Label::Fixed(label) => label.clone(),
                Label::Matched => format!("\"{}\"", signal),
            });
            if self.stop_on_match {
                break;
            }
        }

        (!labels.is_empty()).then(|| RuleHit {
            rule_id: self.id.clone(),
            reason: self.reason.clone(),
            labels,
        })
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in table with every rule enabled.
    pub fn builtin() -> Result<Self> {
        Self::from_settings(&ModerationSettings::default())
    }

    /// The built-in table adjusted by configuration.
    ///
    /// # Errors
    ///
    /// Returns `GighubError::InvalidPattern` if a table pattern fails to compile.
    pub fn from_settings(settings: &ModerationSettings) -> Result<Self> {
        let mut rules = Vec::with_capacity(BUILTIN_RULES.len() + 1);

        for spec in BUILTIN_RULES {
            if spec.category == RuleCategory::SocialProfile && !settings.social_profiles {
                continue;
            }

            let mut matchers = spec
                .patterns
                .iter()
                .map(|source| {
                    Regex::new(source)
                        .map(Matcher::Pattern)
                        .map_err(|e| GighubError::invalid_pattern(spec.id, e.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            if let Some(min_len) = spec.digit_run {
                matchers.push(Matcher::DigitRun { min_len });
            }

            rules.push(Rule {
                id: spec.id.to_string(),
                category: spec.category,
                matchers,
                reason: spec.reason.to_string(),
                label: Label::Fixed(spec.label.to_string()),
                stop_on_match: false,
            });
        }

        let phrases = OFF_PLATFORM_PHRASES
            .iter()
            .map(|p| p.to_string())
            .chain(
                settings
                    .extra_phrases
                    .iter()
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty()),
            )
            .map(Matcher::Phrase)
            .collect();
        rules.push(Rule {
            id: PHRASE_RULE_ID.to_string(),
            category: RuleCategory::OffPlatformSolicitation,
            matchers: phrases,
            reason: OFF_PLATFORM_REASON.to_string(),
            label: Label::Matched,
            stop_on_match: true,
        });

        rules.retain(|rule| !settings.disabled_rules.contains(&rule.id));
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, rule_id: &str) -> bool {
        self.rules.iter().any(|rule| rule.id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_digit_run() {
        assert_eq!(longest_digit_run("abc"), None);
        assert_eq!(longest_digit_run("a12b3456c"), Some("3456"));
        assert_eq!(longest_digit_run("5551234567"), Some("5551234567"));
    }

    #[test]
    fn test_digit_run_ignores_whitespace() {
        let input = ClassifierInput::new("555 123 4567");
        let matcher = Matcher::DigitRun { min_len: 10 };
        assert_eq!(matcher.find(&input).as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_digit_run_below_threshold() {
        let input = ClassifierInput::new("order 123456789");
        assert!(Matcher::DigitRun { min_len: 10 }.find(&input).is_none());
    }

    #[test]
    fn test_phrase_matching_folds_case_and_apostrophes() {
        let input = ClassifierInput::new("LET\u{2019}S TAKE THIS OFFLINE");
        let matcher = Matcher::Phrase("let's take this offline".to_string());
        assert!(matcher.find(&input).is_some());
    }

    #[test]
    fn test_stop_on_match_keeps_first_label_only() {
        let rule = Rule {
            id: "phrases".to_string(),
            category: RuleCategory::OffPlatformSolicitation,
            matchers: vec![
                Matcher::Phrase("call me".to_string()),
                Matcher::Phrase("text me".to_string()),
            ],
            reason: "reason".to_string(),
            label: Label::Matched,
            stop_on_match: true,
        };

        let hit = rule
            .evaluate(&ClassifierInput::new("text me or call me"))
            .unwrap();
        assert_eq!(hit.labels, vec!["\"call me\"".to_string()]);
    }

    #[test]
    fn test_builtin_contains_every_rule() {
        let rules = RuleSet::builtin().unwrap();
        for id in ["email", "phone", "whatsapp", "zelle", "crypto", "url", PHRASE_RULE_ID] {
            assert!(rules.contains(id), "missing rule {id}");
        }
    }

    #[test]
    fn test_settings_disable_and_extend() {
        let settings = ModerationSettings {
            disabled_rules: vec!["discord".to_string()],
            extra_phrases: vec!["  Ping Me Later ".to_string(), "   ".to_string()],
            social_profiles: false,
        };
        let rules = RuleSet::from_settings(&settings).unwrap();

        assert!(!rules.contains("discord"));
        assert!(!rules.contains("twitter"));
        assert!(!rules.contains("linkedin"));

        let phrase_rule = rules
            .rules()
            .iter()
            .find(|r| r.id == PHRASE_RULE_ID)
            .unwrap();
        assert_eq!(phrase_rule.matchers.len(), OFF_PLATFORM_PHRASES.len() + 1);
        assert!(phrase_rule
            .evaluate(&ClassifierInput::new("ping me later"))
            .is_some());
    }
}
