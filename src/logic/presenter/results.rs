//! Results Shaping
//!
//! Maps a finished session's tallies to the results display: percentage,
//! badge tier, ranked blind spots, and the outbound share link.

use crate::constants::{APP_NAME, SHARE_INTENT_URL};
use crate::logic::session::SessionResults;

use super::labels::reason_label;
use super::types::{Badge, BlindSpotView, ResultsView};

/// Map final tallies to the results display.
pub fn describe_results(results: &SessionResults) -> ResultsView {
    // Guard the unreachable zero-round case instead of fabricating 0%
    let percent = if results.total > 0 {
        Some(results.score as f64 / results.total as f64 * 100.0)
    } else {
        None
    };
    let badge = percent.map(Badge::from_percent);

    ResultsView {
        score: results.score,
        total: results.total,
        percent,
        badge,
        blind_spots: rank_blind_spots(&results.miss_tally),
        share_url: share_url(results.score, results.total),
        duration_secs: results.duration_secs,
    }
}

/// Rank miss-tally entries by descending count. The sort is stable and the
/// tally is insertion-ordered, so ties keep first-occurrence order. An
/// empty tally yields a single placeholder line.
fn rank_blind_spots(tally: &[(String, u32)]) -> Vec<BlindSpotView> {
    if tally.is_empty() {
        return vec![BlindSpotView {
            label: "No consistent blind spots detected. Great job!".to_string(),
            misses: None,
        }];
    }

    let mut ranked: Vec<&(String, u32)> = tally.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .map(|(code, count)| BlindSpotView {
            label: reason_label(code),
            misses: Some(*count),
        })
        .collect()
}

/// Build the social-sharing intent link. One-way hyperlink target, never a
/// network call made here.
pub fn share_url(score: u32, total: usize) -> String {
    let summary = format!("I scored {}/{} on the {}!", score, total, APP_NAME);
    format!("{}{}", SHARE_INTENT_URL, percent_encode(&summary))
}

// RFC 3986: unreserved characters pass through, everything else is %XX.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
