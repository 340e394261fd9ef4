//! Scenario Rendering
//!
//! Maps a scenario record to its display shape. Every free-text field is
//! neutralized here so dataset-authored text can never be interpreted as
//! markup by whatever surface renders it. That contract is load-bearing,
//! not cosmetic.

use crate::logic::scenario::{ScenarioContent, ScenarioRecord};

use super::types::{LinkView, ScenarioView};

/// HTML-escape markup characters and strip ASCII control characters
/// (newline and tab survive).
pub fn neutralize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' | '\t' => out.push(ch),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Map a record to its display shape, neutralizing all free text.
pub fn describe_scenario(record: &ScenarioRecord) -> ScenarioView {
    match &record.content {
        ScenarioContent::Email(email) => {
            let from_display = if email.from_display.is_empty() {
                "Unknown".to_string()
            } else {
                neutralize(&email.from_display)
            };

            ScenarioView::Email {
                from_display,
                from_email: neutralize(&email.from_email),
                subject: email
                    .subject
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .map(neutralize),
                body: neutralize(&email.body),
                links: email
                    .links
                    .iter()
                    .map(|l| LinkView {
                        // Fall back to the target when no display text exists
                        text: if l.text.is_empty() {
                            neutralize(&l.href)
                        } else {
                            neutralize(&l.text)
                        },
                        href: neutralize(&l.href),
                    })
                    .collect(),
            }
        }

        ScenarioContent::Sms(sms) => {
            let from_display = if sms.from_display.is_empty() {
                "SMS".to_string()
            } else {
                neutralize(&sms.from_display)
            };

            ScenarioView::Sms {
                from_display,
                body: neutralize(&sms.body),
            }
        }

        ScenarioContent::Generic(value) => {
            let dump = serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| value.to_string());
            ScenarioView::Generic {
                dump: neutralize(&dump),
            }
        }
    }
}
