//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and formatting, making
//! them usable in any context (scoring engine, terminal rendering, input mapping).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_GAME` | 10 | Frames each player bowls |
//! | `LAST_FRAME` | 10 | Index of the frame that may hold fill balls |
//! | `PINS_PER_RACK` | 10 | Pins standing on a fresh rack |
//! | `MAX_ROLLS_PER_FRAME` | 2 | Deliveries in frames 1-9 |
//! | `MAX_ROLLS_LAST_FRAME` | 3 | Deliveries in frame 10 (with fill balls) |
//! | `MAX_SCORE` | 300 | Score of a perfect game |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{BowlingAction, PlayerId, FRAMES_PER_GAME, PINS_PER_RACK};
//!
//! let action = BowlingAction::from_str("pins:7").unwrap();
//! assert_eq!(action, BowlingAction::Pins(7));
//!
//! let strike = BowlingAction::from_str("x").unwrap();
//! assert_eq!(strike, BowlingAction::Pins(PINS_PER_RACK));
//!
//! assert_eq!(PlayerId(2).to_string(), "2");
//! assert_eq!(FRAMES_PER_GAME, 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Frames each player bowls in one game.
pub const FRAMES_PER_GAME: u8 = 10;

/// The final frame, the only one allowed fill balls.
pub const LAST_FRAME: u8 = FRAMES_PER_GAME;

/// Pins standing on a fresh rack.
pub const PINS_PER_RACK: u8 = 10;

/// Deliveries allowed in frames 1-9.
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Deliveries allowed in frame 10 when a strike or spare earns fill balls.
pub const MAX_ROLLS_LAST_FRAME: usize = 3;

/// Score of twelve consecutive strikes.
pub const MAX_SCORE: u16 = 300;

/// Player identifier.
///
/// Ids are 1-based and assigned in join order, which is also turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Zero-based position in the turn order.
    pub fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Id of the player at a zero-based turn-order position.
    pub fn from_index(index: usize) -> Self {
        PlayerId(index as u32 + 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The delivery the engine expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub player: PlayerId,
    /// Frame index, 1..=10.
    pub frame: u8,
    /// Delivery within the frame, 1..=3.
    pub roll: u8,
}

/// Actions a caller can apply to a bowling session.
///
/// These come from keyboard input or a scripted driver. The scoring engine
/// itself only understands explicit pin counts; `Roll` and `Spare` are resolved
/// by the session before they reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BowlingAction {
    /// Add another player (only before the first roll)
    AddPlayer,
    /// Bowl with a random pin fall
    Roll,
    /// Bowl knocking down exactly this many pins
    Pins(u8),
    /// Knock down every pin still standing
    Spare,
    /// Discard the current game and start over
    NewGame,
}

impl BowlingAction {
    /// Parse an action name (case-insensitive).
    ///
    /// Explicit pin counts use the `pins:N` form; `x` is shorthand for a strike.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::BowlingAction;
    ///
    /// assert_eq!(BowlingAction::from_str("addPlayer"), Some(BowlingAction::AddPlayer));
    /// assert_eq!(BowlingAction::from_str("roll"), Some(BowlingAction::Roll));
    /// assert_eq!(BowlingAction::from_str("pins:3"), Some(BowlingAction::Pins(3)));
    /// assert_eq!(BowlingAction::from_str("bowl"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(count) = lower.strip_prefix("pins:") {
            return count.parse::<u8>().ok().map(BowlingAction::Pins);
        }
        match lower.as_str() {
            "addplayer" => Some(BowlingAction::AddPlayer),
            "roll" => Some(BowlingAction::Roll),
            "spare" | "/" => Some(BowlingAction::Spare),
            "strike" | "x" => Some(BowlingAction::Pins(PINS_PER_RACK)),
            "newgame" => Some(BowlingAction::NewGame),
            _ => None,
        }
    }

    /// Convert to camelCase name.
    ///
    /// `Pins` has no fixed name and reports `"pins"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BowlingAction::AddPlayer => "addPlayer",
            BowlingAction::Roll => "roll",
            BowlingAction::Pins(_) => "pins",
            BowlingAction::Spare => "spare",
            BowlingAction::NewGame => "newGame",
        }
    }
}
