//! Reason Labels
//!
//! Fixed vocabulary of reason codes and their human-readable labels.
//! Codes cover both phishing red flags and legitimate-message trust
//! signals. Unknown codes pass through as their raw literal.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::FeedbackView;

static REASON_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("urgency", "Urgency pressure"),
        ("lookalike-domain", "Lookalike/misspelled domain"),
        ("sensitive-info-request", "Requests sensitive info (bank/PAN/password)"),
        ("misspelled-domain", "Misspelled domain"),
        ("mismatched-link-text", "Link text does not match actual URL"),
        ("threat", "Threat of account lock/ban"),
        ("unusual-request", "Unusual out-of-policy request"),
        ("external-sender", "External/personal sender for official matter"),
        ("urgency-secrecy", "Urgency or secrecy instruction"),
        ("official-domain", "Official sender/domain"),
        ("no-credentials-requested", "No credentials requested"),
        ("expected-context", "Expected/normal context"),
        ("http-not-https", "Uses HTTP (not HTTPS)"),
        ("unexpected-reset", "Unexpected password reset request"),
        ("non-official-domain", "Non-official domain"),
        ("login-request", "Asks you to log in via provided link"),
        ("promise-of-money", "Too-good-to-be-true refund/payout"),
        ("too-good-to-be-true", "Too-good-to-be-true reward"),
        ("unfamiliar-domain", "Unfamiliar or brand-new domain"),
        ("wallet-connect", "Requests wallet connect"),
        ("common-context", "Common, non-suspicious context"),
    ])
});

/// Human-readable label for a reason code, or the code itself when it is
/// outside the known vocabulary.
pub fn reason_label(code: &str) -> String {
    REASON_LABELS
        .get(code)
        .map(|s| s.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Map a round verdict to its feedback display.
pub fn describe_feedback(correct: bool, reasons: &[String]) -> FeedbackView {
    FeedbackView {
        correct,
        headline: if correct {
            "Correct".to_string()
        } else {
            "Not quite".to_string()
        },
        reasons: reasons.iter().map(|r| reason_label(r)).collect(),
    }
}
