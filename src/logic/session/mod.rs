//! Session Module - Game State Machine
//!
//! One play-through of the quiz: a sampled subset of the pool, a cursor,
//! a score, and a per-reason miss tally. Phases are explicit and every
//! transition is guarded, so a round can never be scored twice.
//!
//! Lifecycle: Idle -> InRound -> AwaitingNext -> InRound ... -> Finished,
//! back to Idle via reset.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::constants::ROUNDS_PER_SESSION;
use crate::logic::scenario::ScenarioRecord;


// ============================================================================
// PHASES & ERRORS
// ============================================================================

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    InRound,
    AwaitingNext,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::InRound => "in_round",
            Phase::AwaitingNext => "awaiting_next",
            Phase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no scenarios available to start a session")]
    EmptyPool,

    #[error("'{action}' is not allowed in the {phase} phase")]
    InvalidTransition { action: &'static str, phase: Phase },
}

// ============================================================================
// ROUND VERDICT & FINAL RESULTS
// ============================================================================

/// Outcome of a single judged round, for feedback display.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub correct: bool,
    pub is_phish: bool,
    pub reasons: Vec<String>,
}

/// Aggregate outcome of a finished session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResults {
    pub score: u32,
    pub total: usize,
    /// Reason code -> miss count, in order of first occurrence.
    pub miss_tally: Vec<(String, u32)>,
    pub duration_secs: Option<i64>,
}

// ============================================================================
// SESSION STATE
// ============================================================================

/// One play-through. Owns its sampled subset of the pool; shuffling and
/// truncation never touch the shared pool.
pub struct SessionState {
    session_id: Uuid,
    phase: Phase,
    active_set: Vec<ScenarioRecord>,
    cursor: usize,
    score: u32,
    miss_tally: Vec<(String, u32)>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            phase: Phase::Idle,
            active_set: Vec::new(),
            cursor: 0,
            score: 0,
            miss_tally: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based round number for progress display.
    pub fn round_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn total_rounds(&self) -> usize {
        self.active_set.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sample min(ROUNDS_PER_SESSION, |pool|) records without replacement
    /// and begin the first round. Only valid from Idle; an empty pool is
    /// rejected rather than starting a zero-round game.
    pub fn start(&mut self, pool: &[ScenarioRecord]) -> Result<(), SessionError> {
        if self.phase != Phase::Idle {
            return Err(SessionError::InvalidTransition {
                action: "start",
                phase: self.phase,
            });
        }
        if pool.is_empty() {
            return Err(SessionError::EmptyPool);
        }

        let mut set = pool.to_vec();
        set.shuffle(&mut rand::thread_rng());
        set.truncate(ROUNDS_PER_SESSION);

        self.session_id = Uuid::new_v4();
        self.active_set = set;
        self.cursor = 0;
        self.score = 0;
        self.miss_tally.clear();
        self.started_at = Some(Utc::now());
        self.finished_at = None;
        self.phase = Phase::InRound;

        log::info!(
            "Session {} started: {} rounds from a pool of {}",
            self.session_id,
            self.active_set.len(),
            pool.len()
        );
        Ok(())
    }

    /// The scenario the user is currently judging. InRound only.
    pub fn current_scenario(&self) -> Result<&ScenarioRecord, SessionError> {
        if self.phase != Phase::InRound {
            return Err(SessionError::InvalidTransition {
                action: "current_scenario",
                phase: self.phase,
            });
        }
        Ok(&self.active_set[self.cursor])
    }

    /// Judge the current round. Exactly one submit is scored per round:
    /// the phase moves to AwaitingNext, and a second call is rejected
    /// without touching score or tally.
    pub fn submit(&mut self, guess_is_phish: bool) -> Result<Verdict, SessionError> {
        if self.phase != Phase::InRound {
            return Err(SessionError::InvalidTransition {
                action: "submit",
                phase: self.phase,
            });
        }

        let scenario = &self.active_set[self.cursor];
        let correct = guess_is_phish == scenario.is_phish;
        let verdict = Verdict {
            correct,
            is_phish: scenario.is_phish,
            reasons: scenario.reasons.clone(),
        };

        if correct {
            self.score += 1;
        } else {
            for code in &verdict.reasons {
                bump_tally(&mut self.miss_tally, code);
            }
        }

        self.phase = Phase::AwaitingNext;
        Ok(verdict)
    }

    /// Move past the feedback screen. AwaitingNext only. Returns the new
    /// phase so the caller knows whether another round follows.
    pub fn advance(&mut self) -> Result<Phase, SessionError> {
        if self.phase != Phase::AwaitingNext {
            return Err(SessionError::InvalidTransition {
                action: "advance",
                phase: self.phase,
            });
        }

        self.cursor += 1;
        if self.cursor >= self.active_set.len() {
            self.finished_at = Some(Utc::now());
            self.phase = Phase::Finished;
            log::info!(
                "Session {} finished: {}/{}",
                self.session_id,
                self.score,
                self.active_set.len()
            );
        } else {
            self.phase = Phase::InRound;
        }
        Ok(self.phase)
    }

    /// Final tallies. Finished only.
    pub fn results(&self) -> Result<SessionResults, SessionError> {
        if self.phase != Phase::Finished {
            return Err(SessionError::InvalidTransition {
                action: "results",
                phase: self.phase,
            });
        }

        let duration_secs = match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end.signed_duration_since(start).num_seconds()),
            _ => None,
        };

        Ok(SessionResults {
            score: self.score,
            total: self.active_set.len(),
            miss_tally: self.miss_tally.clone(),
            duration_secs,
        })
    }

    /// Discard everything and return to Idle so a fresh sample can be
    /// drawn from the same pool.
    pub fn reset(&mut self) {
        self.active_set.clear();
        self.cursor = 0;
        self.score = 0;
        self.miss_tally.clear();
        self.started_at = None;
        self.finished_at = None;
        self.phase = Phase::Idle;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// Insertion order is preserved so the blind-spot tie-break is stable.
fn bump_tally(tally: &mut Vec<(String, u32)>, code: &str) {
    if let Some(entry) = tally.iter_mut().find(|(c, _)| c == code) {
        entry.1 += 1;
    } else {
        tally.push((code.to_string(), 1));
    }
}
