//! Presenter Module - Display Shaping
//!
//! Pure, stateless mapping from records and tallies to display structures.
//! No mutation, no I/O; the presentation surface renders what comes out of
//! here without further escaping.

pub mod labels;
pub mod render;
pub mod results;
pub mod types;

#[cfg(test)]
mod tests;

pub use labels::{describe_feedback, reason_label};
pub use render::describe_scenario;
pub use results::describe_results;
pub use types::{Badge, BlindSpotView, FeedbackView, LinkView, ResultsView, ScenarioView};
