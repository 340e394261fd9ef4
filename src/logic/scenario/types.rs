//! Scenario Types
//!
//! Wire format for the authored dataset plus the in-memory record.
//! No logic beyond wire -> record conversion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// One record as authored in scenarios.json (camelCase keys).
///
/// `kind` and `content` are kept loose on purpose: unrecognized message
/// types must degrade to a generic rendering, never fail the whole load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScenario {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
    #[serde(rename = "isPhish")]
    pub is_phish: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Email payload fields. All optional in the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmailContent {
    #[serde(rename = "fromDisplay", default)]
    pub from_display: String,
    #[serde(rename = "fromEmail", default)]
    pub from_email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub links: Vec<EmailLink>,
}

/// A link embedded in an email: the visible text and the actual target.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmailLink {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub href: String,
}

/// SMS payload fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmsContent {
    #[serde(rename = "fromDisplay", default)]
    pub from_display: String,
    #[serde(default)]
    pub body: String,
}

// ============================================================================
// IN-MEMORY RECORD
// ============================================================================

/// Message payload as a closed set of display shapes.
///
/// Anything that is not a well-formed email or sms lands in `Generic`,
/// which carries the raw payload for a structured dump.
#[derive(Debug, Clone, Serialize)]
pub enum ScenarioContent {
    Email(EmailContent),
    Sms(SmsContent),
    Generic(Value),
}

/// One simulated message with its ground-truth label and reason codes.
///
/// Reason codes outside the known vocabulary are kept verbatim; the
/// presenter falls back to the literal code when no label exists.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRecord {
    pub id: usize,
    pub content: ScenarioContent,
    pub is_phish: bool,
    pub reasons: Vec<String>,
}

impl ScenarioRecord {
    /// Convert a wire record into a typed one.
    ///
    /// An email/sms payload that fails to decode falls back to Generic
    /// with the original payload intact, matching the unknown-type path.
    pub fn from_raw(id: usize, raw: RawScenario) -> Self {
        let content = match raw.kind.as_str() {
            "email" => match serde_json::from_value::<EmailContent>(raw.content.clone()) {
                Ok(email) => ScenarioContent::Email(email),
                Err(e) => {
                    log::warn!("Scenario {}: malformed email content ({}), using generic dump", id, e);
                    ScenarioContent::Generic(raw.content)
                }
            },
            "sms" => match serde_json::from_value::<SmsContent>(raw.content.clone()) {
                Ok(sms) => ScenarioContent::Sms(sms),
                Err(e) => {
                    log::warn!("Scenario {}: malformed sms content ({}), using generic dump", id, e);
                    ScenarioContent::Generic(raw.content)
                }
            },
            other => {
                if !other.is_empty() {
                    log::debug!("Scenario {}: unrecognized type '{}', using generic dump", id, other);
                }
                ScenarioContent::Generic(raw.content)
            }
        };

        Self {
            id,
            content,
            is_phish: raw.is_phish,
            reasons: raw.reasons,
        }
    }
}
