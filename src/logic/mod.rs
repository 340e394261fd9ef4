//! Logic Module - Core Engines
//!
//! - `scenario/` - dataset wire types and the one-shot repository loader
//! - `session/` - the per-play-through scoring state machine
//! - `presenter/` - pure display shaping for the presentation surface

pub mod presenter;
pub mod scenario;
pub mod session;
