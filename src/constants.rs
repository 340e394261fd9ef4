//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the dataset location or session shape, only edit this file.

/// Default dataset source (path or URL)
///
/// This is the fallback when no environment variable is set.
/// Can point at a local file or an `http(s)://` location.
pub const DEFAULT_SCENARIOS_SOURCE: &str = "scenarios.json";

/// Number of rounds drawn per session (fewer if the pool is smaller)
pub const ROUNDS_PER_SESSION: usize = 10;

/// Fetch timeout for remote dataset sources (seconds)
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Base URL for the outbound share intent link
pub const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet?text=";

/// Start-screen title rotation
pub const START_TITLES: [&str; 3] = [
    "Trust or Trap?",
    "Don't Take the Bait",
    "Spot the Scam",
];

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Phishing Awareness Simulator";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the dataset source from environment or use default
pub fn get_scenarios_source() -> String {
    std::env::var("SCENARIOS_SOURCE")
        .unwrap_or_else(|_| DEFAULT_SCENARIOS_SOURCE.to_string())
}
