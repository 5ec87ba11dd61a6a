//! Terminal scorecard rendering.
//!
//! A small rendering layer for terminal play. It draws into a plain
//! framebuffer that is then flushed to the terminal backend, keeping the
//! snapshot-to-cells mapping pure and testable.

pub mod fb;
pub mod renderer;
pub mod scorecard_view;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scorecard_view::{AnchorY, ScorecardView, Viewport};
