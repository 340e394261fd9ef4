use super::render::neutralize;
use super::results::share_url;
use super::*;
use crate::logic::scenario::{EmailContent, EmailLink, ScenarioContent, ScenarioRecord, SmsContent};
use crate::logic::session::SessionResults;

fn email_record(body: &str) -> ScenarioRecord {
    ScenarioRecord {
        id: 0,
        content: ScenarioContent::Email(EmailContent {
            from_display: "Support".to_string(),
            from_email: "support@example.com".to_string(),
            subject: Some("Hello".to_string()),
            body: body.to_string(),
            links: vec![EmailLink {
                text: "click".to_string(),
                href: "https://example.com".to_string(),
            }],
        }),
        is_phish: false,
        reasons: vec![],
    }
}

fn results(score: u32, total: usize, tally: Vec<(&str, u32)>) -> SessionResults {
    SessionResults {
        score,
        total,
        miss_tally: tally
            .into_iter()
            .map(|(c, n)| (c.to_string(), n))
            .collect(),
        duration_secs: Some(30),
    }
}

// ============================================================================
// NEUTRALIZATION
// ============================================================================

#[test]
fn test_neutralize_escapes_markup_characters() {
    assert_eq!(
        neutralize(r#"<b>&"'</b>"#),
        "&lt;b&gt;&amp;&quot;&#39;&lt;/b&gt;"
    );
}

#[test]
fn test_neutralize_strips_control_chars_keeps_whitespace() {
    assert_eq!(neutralize("a\u{0}b\u{1b}c\nd\te"), "abc\nd\te");
}

#[test]
fn test_describe_scenario_neutralizes_email_text() {
    let record = email_record("<script>alert('x')</script>");
    match describe_scenario(&record) {
        ScenarioView::Email { body, .. } => {
            assert!(!body.contains('<'));
            assert!(!body.contains('>'));
            assert!(body.contains("&lt;script&gt;"));
        }
        other => panic!("expected email view, got {:?}", other),
    }
}

#[test]
fn test_describe_scenario_email_sender_fallback() {
    let record = ScenarioRecord {
        id: 0,
        content: ScenarioContent::Email(EmailContent::default()),
        is_phish: false,
        reasons: vec![],
    };
    match describe_scenario(&record) {
        ScenarioView::Email { from_display, subject, .. } => {
            assert_eq!(from_display, "Unknown");
            assert!(subject.is_none());
        }
        other => panic!("expected email view, got {:?}", other),
    }
}

#[test]
fn test_describe_scenario_sms_sender_fallback() {
    let record = ScenarioRecord {
        id: 0,
        content: ScenarioContent::Sms(SmsContent::default()),
        is_phish: false,
        reasons: vec![],
    };
    match describe_scenario(&record) {
        ScenarioView::Sms { from_display, .. } => assert_eq!(from_display, "SMS"),
        other => panic!("expected sms view, got {:?}", other),
    }
}

#[test]
fn test_describe_scenario_generic_dump_is_escaped() {
    let record = ScenarioRecord {
        id: 0,
        content: ScenarioContent::Generic(serde_json::json!({"note": "<img src=x>"})),
        is_phish: true,
        reasons: vec![],
    };
    match describe_scenario(&record) {
        ScenarioView::Generic { dump } => {
            assert!(dump.contains("note"));
            assert!(!dump.contains("<img"));
        }
        other => panic!("expected generic view, got {:?}", other),
    }
}

// ============================================================================
// FEEDBACK LABELS
// ============================================================================

#[test]
fn test_known_reason_codes_map_to_labels() {
    assert_eq!(reason_label("urgency"), "Urgency pressure");
    assert_eq!(reason_label("official-domain"), "Official sender/domain");
}

#[test]
fn test_unknown_reason_code_passes_through() {
    assert_eq!(reason_label("brand-new-code"), "brand-new-code");
}

#[test]
fn test_describe_feedback_headline_and_labels() {
    let feedback = describe_feedback(
        false,
        &["threat".to_string(), "mystery-code".to_string()],
    );
    assert!(!feedback.correct);
    assert_eq!(feedback.headline, "Not quite");
    assert_eq!(
        feedback.reasons,
        vec!["Threat of account lock/ban", "mystery-code"]
    );

    assert_eq!(describe_feedback(true, &[]).headline, "Correct");
}

// ============================================================================
// RESULTS & BADGES
// ============================================================================

#[test]
fn test_badge_thresholds_are_inclusive() {
    assert_eq!(Badge::from_percent(100.0), Badge::CyberSentinel);
    assert_eq!(Badge::from_percent(90.0), Badge::CyberSentinel);
    assert_eq!(Badge::from_percent(89.9), Badge::CyberScout);
    assert_eq!(Badge::from_percent(70.0), Badge::CyberScout);
    assert_eq!(Badge::from_percent(69.9), Badge::AlertLearner);
    assert_eq!(Badge::from_percent(50.0), Badge::AlertLearner);
    assert_eq!(Badge::from_percent(49.9), Badge::GettingStarted);
    assert_eq!(Badge::from_percent(0.0), Badge::GettingStarted);
}

#[test]
fn test_badge_boundary_scores_out_of_ten() {
    let cases = [
        (9, Badge::CyberSentinel),
        (7, Badge::CyberScout),
        (5, Badge::AlertLearner),
        (4, Badge::GettingStarted),
    ];
    for (score, expected) in cases {
        let view = describe_results(&results(score, 10, vec![]));
        assert_eq!(view.badge, Some(expected), "score {}/10", score);
    }
}

#[test]
fn test_zero_total_skips_percentage_and_badge() {
    let view = describe_results(&results(0, 0, vec![]));
    assert!(view.percent.is_none());
    assert!(view.badge.is_none());
}

#[test]
fn test_blind_spots_ranked_desc_with_stable_ties() {
    let view = describe_results(&results(
        5,
        10,
        vec![("urgency", 1), ("threat", 3), ("login-request", 1)],
    ));

    let labels: Vec<&str> = view.blind_spots.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Threat of account lock/ban",
            "Urgency pressure",
            "Asks you to log in via provided link",
        ]
    );
    assert_eq!(view.blind_spots[0].misses, Some(3));
    assert_eq!(view.blind_spots[1].misses, Some(1));
}

#[test]
fn test_empty_tally_yields_placeholder() {
    let view = describe_results(&results(10, 10, vec![]));
    assert_eq!(view.blind_spots.len(), 1);
    assert!(view.blind_spots[0].misses.is_none());
    assert!(view.blind_spots[0].label.contains("No consistent blind spots"));
}

#[test]
fn test_share_url_is_percent_encoded() {
    let url = share_url(7, 10);
    assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
    assert!(url.contains("I%20scored%207%2F10"));
    assert!(url.ends_with("Simulator%21"));
    // Nothing unencoded should remain past the query marker
    let query = url.split_once("text=").unwrap().1;
    assert!(!query.contains(' '));
    assert!(!query.contains('/'));
}

#[test]
fn test_results_view_carries_duration() {
    let view = describe_results(&results(5, 10, vec![]));
    assert_eq!(view.duration_secs, Some(30));
}
