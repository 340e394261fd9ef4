//! Presenter Types
//!
//! Display structures handed to the presentation surface. All free-text
//! fields in these shapes have already been markup-neutralized; the
//! surface may render them verbatim.

use serde::Serialize;

// ============================================================================
// SCENARIO VIEWS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub text: String,
    pub href: String,
}

/// Variant display shape per message type.
#[derive(Debug, Clone, Serialize)]
pub enum ScenarioView {
    Email {
        from_display: String,
        from_email: String,
        subject: Option<String>,
        body: String,
        links: Vec<LinkView>,
    },
    Sms {
        from_display: String,
        body: String,
    },
    /// Pretty-printed structured dump for anything unrecognized.
    Generic { dump: String },
}

// ============================================================================
// FEEDBACK & RESULTS VIEWS
// ============================================================================

/// Per-round feedback after a judgment.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackView {
    pub correct: bool,
    pub headline: String,
    /// Human-readable reason labels (literal code when unknown).
    pub reasons: Vec<String>,
}

/// Badge tier assigned from the final score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    CyberSentinel,
    CyberScout,
    AlertLearner,
    GettingStarted,
}

impl Badge {
    /// Inclusive thresholds: >=90, >=70, >=50, else.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Badge::CyberSentinel
        } else if percent >= 70.0 {
            Badge::CyberScout
        } else if percent >= 50.0 {
            Badge::AlertLearner
        } else {
            Badge::GettingStarted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::CyberSentinel => "Cyber Sentinel",
            Badge::CyberScout => "Cyber Scout",
            Badge::AlertLearner => "Alert Learner",
            Badge::GettingStarted => "Getting Started",
        }
    }
}

/// One ranked blind-spot line. `misses` is None for the placeholder shown
/// when no weakness recurred.
#[derive(Debug, Clone, Serialize)]
pub struct BlindSpotView {
    pub label: String,
    pub misses: Option<u32>,
}

/// End-of-session summary.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub score: u32,
    pub total: usize,
    /// None when total is zero.
    pub percent: Option<f64>,
    pub badge: Option<Badge>,
    pub blind_spots: Vec<BlindSpotView>,
    pub share_url: String,
    pub duration_secs: Option<i64>,
}
