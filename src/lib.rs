//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the member crates as `tui_bowling::{core,input,term,types}` and
//! hosts the pieces shared by the binaries: environment configuration, logging
//! setup, and the [`session::Session`] that drives a game from input actions.

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;

pub mod config;
pub mod logging;
pub mod session;

pub use config::SessionConfig;
pub use session::Session;
