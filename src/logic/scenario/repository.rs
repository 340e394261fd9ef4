//! Scenario Repository
//!
//! One-shot loader for the authored scenario pool. The source is either a
//! filesystem path or an http(s) URL; a single attempt is made per process
//! lifetime, no retry. On failure the caller degrades to an empty pool.

use std::fs;
use std::time::Duration;

use thiserror::Error;

use super::types::{RawScenario, ScenarioRecord};
use crate::constants::FETCH_TIMEOUT_SECS;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch scenarios from '{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to read scenarios from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("scenarios document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// REPOSITORY
// ============================================================================

/// Holds the full pool of scenario records for the process lifetime.
#[derive(Debug)]
pub struct ScenarioRepository {
    pool: Vec<ScenarioRecord>,
}

impl ScenarioRepository {
    /// Load the pool from a file path or http(s) URL.
    pub fn load(source: &str) -> Result<Self, LoadError> {
        let document = if source.starts_with("http://") || source.starts_with("https://") {
            fetch_remote(source)?
        } else {
            fs::read_to_string(source).map_err(|e| LoadError::Io {
                path: source.to_string(),
                source: e,
            })?
        };

        let raw: Vec<RawScenario> = serde_json::from_str(&document)?;
        let pool: Vec<ScenarioRecord> = raw
            .into_iter()
            .enumerate()
            .map(|(id, r)| ScenarioRecord::from_raw(id, r))
            .collect();

        log::info!("Loaded {} scenarios from {}", pool.len(), source);
        Ok(Self { pool })
    }

    /// Degraded state when the source is unreachable or malformed.
    pub fn empty() -> Self {
        Self { pool: Vec::new() }
    }

    pub fn pool(&self) -> &[ScenarioRecord] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let response = ureq::get(url)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .call()
        .map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    response.into_string().map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
