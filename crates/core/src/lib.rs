//! Core scoring module - pure, deterministic, and testable
//!
//! This crate contains the ten-pin bowling rules: frames, strike/spare bonus
//! propagation, round-robin turn order, and winner selection. It has **no
//! dependencies** on UI, terminal, or I/O, and it never generates pin counts on
//! its own; callers supply every delivery.
//!
//! # Module Structure
//!
//! - [`frame`]: one scoring unit, its rolls, standing pins, and frame-10 fill balls
//! - [`bonus`]: pending strike/spare bonus obligations per player
//! - [`player`]: ten frames, an independent frame cursor, and running totals
//! - [`game`]: the state machine (`add_player`, `record_roll`, queries)
//! - [`snapshot`]: read-only views of frames and the whole game
//! - [`rng`]: caller-side random pin fall for demo play
//! - [`error`]: typed engine errors
//!
//! # Scoring Rules
//!
//! - **Strike**: all ten pins on the first ball; scores 10 plus the next two deliveries
//! - **Spare**: all ten pins across two balls; scores 10 plus the next delivery
//! - **Frame 10**: a strike or spare earns fill balls (three deliveries total);
//!   fill balls count toward frame 10 itself
//! - **Running total**: pending until every bonus delivery a frame is owed exists
//! - **Winner**: strictly highest total; a tie for first has no winner
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Game;
//!
//! let mut game = Game::new();
//! let alice = game.add_player().unwrap();
//!
//! game.record_roll(alice, 10).unwrap(); // strike
//! game.record_roll(alice, 7).unwrap();
//! game.record_roll(alice, 3).unwrap(); // spare
//! game.record_roll(alice, 9).unwrap();
//!
//! assert_eq!(game.frame(alice, 1).unwrap().running_total, Some(20));
//! assert_eq!(game.frame(alice, 2).unwrap().running_total, Some(39));
//! assert_eq!(game.frame(alice, 3).unwrap().running_total, None); // still open
//! ```

pub mod bonus;
pub mod error;
pub mod frame;
pub mod game;
pub mod player;
pub mod rng;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use bonus::{BonusObligation, BonusQueue};
pub use error::{EngineError, InvalidOperation};
pub use frame::Frame;
pub use game::{Game, Outcome, Phase};
pub use player::{Player, RollOutcome};
pub use rng::PinRng;
pub use snapshot::{FrameView, GameSnapshot, PlayerSnapshot};
