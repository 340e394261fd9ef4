//! Scenario Module - Dataset Types & Loading
//!
//! Wire format, typed records, and the one-shot repository loader.

pub mod repository;
pub mod types;


pub use repository::{LoadError, ScenarioRepository};
pub use types::{EmailContent, EmailLink, RawScenario, ScenarioContent, ScenarioRecord, SmsContent};
