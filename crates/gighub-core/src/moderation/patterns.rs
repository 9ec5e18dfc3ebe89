//! Built-in moderation table.

use super::rule::RuleCategory;

/// Static description of a pattern-based rule.
#[derive(Debug)]
pub(crate) struct RuleSpec {
    pub id: &'static str,
    pub category: RuleCategory,
    /// Any pattern matching fires the rule.
    pub patterns: &'static [&'static str],
    /// Also fire on a run of this many digits once whitespace is stripped.
    pub digit_run: Option<usize>,
    pub reason: &'static str,
    pub label: &'static str,
}

pub const PHRASE_RULE_ID: &str = "off_platform_phrases";

pub const OFF_PLATFORM_REASON: &str =
    "Message contains suspicious content attempting to move conversation off-platform";

const EXTERNAL_PAYMENT_REASON: &str = "External payment methods are not allowed";

pub(crate) const BUILTIN_RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "email",
        category: RuleCategory::ContactInfo,
        patterns: &[r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b"],
        digit_run: None,
        reason: "Email addresses are not allowed",
        label: "Email address",
    },
    RuleSpec {
        id: "phone",
        category: RuleCategory::ContactInfo,
        patterns: &[r"(?:\+?[0-9]{1,3}[\s.-]?)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}\b"],
        digit_run: Some(10),
        reason: "Phone numbers are not allowed",
        label: "Phone number",
    },
    RuleSpec {
        id: "whatsapp",
        category: RuleCategory::ExternalPlatform,
        patterns: &[r"(?i)\bwhats\s*app\b"],
        digit_run: None,
        reason: "Sharing WhatsApp contact details is not allowed",
        label: "WhatsApp",
    },
    RuleSpec {
        id: "telegram",
        category: RuleCategory::ExternalPlatform,
        patterns: &[r"(?i)\btelegram\b"],
        digit_run: None,
        reason: "Sharing Telegram contact details is not allowed",
        label: "Telegram",
    },
    RuleSpec {
        id: "skype",
        category: RuleCategory::ExternalPlatform,
        patterns: &[r"(?i)\bskype\b"],
        digit_run: None,
        reason: "Sharing Skype contact details is not allowed",
        label: "Skype",
    },
    RuleSpec {
        id: "discord",
        category: RuleCategory::ExternalPlatform,
        patterns: &[r"(?i)\bdiscord\b"],
        digit_run: None,
        reason: "Sharing Discord contact details is not allowed",
        label: "Discord",
    },
    RuleSpec {
        id: "instagram",
        category: RuleCategory::ExternalPlatform,
        patterns: &[r"(?i)\b(?:instagram|insta)\b"],
        digit_run: None,
        reason: "Sharing Instagram profiles is not allowed",
        label: "Instagram",
    },
    RuleSpec {
        id: "facebook",
        category: RuleCategory::ExternalPlatform,
        patterns: &[r"(?i)\b(?:facebook|fb)\b"],
        digit_run: None,
        reason: "Sharing Facebook profiles is not allowed",
        label: "Facebook",
    },
    RuleSpec {
        id: "twitter",
        category: RuleCategory::SocialProfile,
        patterns: &[r"(?i)\b(?:twitter|x\.com)\b"],
        digit_run: None,
        reason: "Sharing Twitter/X profiles is not allowed",
        label: "Twitter/X",
    },
    RuleSpec {
        id: "linkedin",
        category: RuleCategory::SocialProfile,
        patterns: &[r"(?i)\blinked\s*in\b"],
        digit_run: None,
        reason: "Sharing LinkedIn profiles is not allowed",
        label: "LinkedIn",
    },
    RuleSpec {
        id: "paypal",
        category: RuleCategory::ExternalPayment,
        patterns: &[r"(?i)\bpay\s*pal\b"],
        digit_run: None,
        reason: EXTERNAL_PAYMENT_REASON,
        label: "PayPal",
    },
    RuleSpec {
        id: "venmo",
        category: RuleCategory::ExternalPayment,
        patterns: &[r"(?i)\bvenmo\b"],
        digit_run: None,
        reason: EXTERNAL_PAYMENT_REASON,
        label: "Venmo",
    },
    RuleSpec {
        id: "cash_app",
        category: RuleCategory::ExternalPayment,
        patterns: &[r"(?i)\bcash\s*app\b", r"\$[A-Z]*[a-z][A-Za-z0-9_-]{0,19}\b"],
        digit_run: None,
        reason: EXTERNAL_PAYMENT_REASON,
        label: "Cash App",
    },
    RuleSpec {
        id: "zelle",
        category: RuleCategory::ExternalPayment,
        patterns: &[r"(?i)\bzelle\b"],
        digit_run: None,
        reason: EXTERNAL_PAYMENT_REASON,
        label: "Zelle",
    },
    RuleSpec {
        id: "crypto",
        category: RuleCategory::Cryptocurrency,
        patterns: &[r"(?i)\b(?:bitcoin|btc|ethereum|eth|crypto|wallet\s+address)\b"],
        digit_run: None,
        reason: "Cryptocurrency payments are not allowed",
        label: "Cryptocurrency",
    },
    RuleSpec {
        id: "url",
        category: RuleCategory::ExternalLink,
        patterns: &[
            r"(?i)\b(?:https?://)?(?:www\.)?[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,6}\b(?:/\S*)?",
            r"(?i)\b[a-z0-9-]+\s*\.\s*com\b",
        ],
        digit_run: None,
        reason: "External links and websites are not allowed",
        label: "Website/URL",
    },
];

/// Scanned in order; only the first hit is reported.
pub const OFF_PLATFORM_PHRASES: &[&str] = &[
    "email me",
    "call me",
    "text me",
    "dm me",
    "message me on",
    "contact me at",
    "contact me on",
    "reach me at",
    "reach me on",
    "my number is",
    "my phone number",
    "my email is",
    "my email address",
    "share my number",
    "give you my number",
    "send me your number",
    "send me your email",
    "what's your number",
    "what's your email",
    "let's take this offline",
    "take this offline",
    "talk outside",
    "outside the platform",
    "outside of the platform",
    "off the platform",
    "off platform",
    "off-platform",
    "pay me directly",
    "pay directly",
    "direct payment",
    "payment outside",
    "avoid the fees",
    "avoid fees",
    "skip the fees",
    "bypass the platform",
    "add me on",
    "find me on",
    "hit me up on",
];
