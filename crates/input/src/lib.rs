//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::BowlingAction`]s. It is
//! independent of any rendering code and of the scoring engine.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
