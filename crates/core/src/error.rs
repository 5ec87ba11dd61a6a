//! Engine errors.
//!
//! Every error is a caller-correctable input problem. The engine validates
//! before it mutates, so a rejected call leaves the game exactly as it was.

use thiserror::Error;

use crate::types::PlayerId;

/// Error returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),
    #[error("invalid pin count {pins}: {standing} pins standing")]
    InvalidPinCount { pins: u8, standing: u8 },
}

/// Why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("cannot add player mid-game")]
    GameInProgress,
    #[error("table is full, at most {0} players")]
    TableFull(u8),
    #[error("game is over")]
    GameOver,
    #[error("no players have joined")]
    NoPlayers,
    #[error("player {attempted} rolled out of turn, player {expected} is up")]
    OutOfTurn {
        expected: PlayerId,
        attempted: PlayerId,
    },
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("frame {0} is outside 1..=10")]
    FrameOutOfRange(u8),
    #[error("frame {0} is already complete")]
    FrameComplete(u8),
}

impl EngineError {
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, EngineError::InvalidOperation(_))
    }

    pub fn is_invalid_pin_count(&self) -> bool {
        matches!(self, EngineError::InvalidPinCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = EngineError::InvalidPinCount {
            pins: 8,
            standing: 3,
        };
        assert_eq!(err.to_string(), "invalid pin count 8: 3 pins standing");

        let err: EngineError = InvalidOperation::OutOfTurn {
            expected: PlayerId(1),
            attempted: PlayerId(2),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid operation: player 2 rolled out of turn, player 1 is up"
        );
    }

    #[test]
    fn kind_predicates() {
        let op: EngineError = InvalidOperation::GameOver.into();
        assert!(op.is_invalid_operation());
        assert!(!op.is_invalid_pin_count());

        let pins = EngineError::InvalidPinCount {
            pins: 11,
            standing: 10,
        };
        assert!(pins.is_invalid_pin_count());
        assert!(!pins.is_invalid_operation());
    }
}
