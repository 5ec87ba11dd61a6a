//! Session: drives a [`Game`] from [`BowlingAction`]s.
//!
//! This is the caller side of the scoring engine. It resolves `Roll` into a
//! random pin count and `Spare` into "all standing pins", always for the player
//! whose turn it is, then hands plain pin counts to the engine. Rejected actions
//! are kept for display instead of aborting the session.

use tracing::{info, warn};

use crate::config::{SessionConfig, MAX_PLAYERS};
use crate::core::{EngineError, Game, GameSnapshot, InvalidOperation, PinRng};
use crate::types::BowlingAction;

#[derive(Debug)]
pub struct Session {
    game: Game,
    rng: PinRng,
    players: u8,
    last_error: Option<EngineError>,
}

impl Session {
    /// Start a session with `config.players` already seated.
    pub fn new(config: &SessionConfig) -> Self {
        let mut session = Self {
            game: Game::new(),
            rng: PinRng::new(config.seed),
            players: config.players.min(MAX_PLAYERS),
            last_error: None,
        };
        session.seat_players();
        session
    }

    fn seat_players(&mut self) {
        for _ in 0..self.players {
            // A fresh game always accepts players.
            if let Err(err) = self.game.add_player() {
                warn!(%err, "could not seat player");
            }
        }
    }

    /// Apply one action. Errors are also stored in [`Session::last_error`].
    pub fn apply(&mut self, action: BowlingAction) -> Result<(), EngineError> {
        let result = self.dispatch(action);
        match &result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                warn!(action = action.as_str(), %err, "action rejected");
                self.last_error = Some(*err);
            }
        }
        result
    }

    fn dispatch(&mut self, action: BowlingAction) -> Result<(), EngineError> {
        match action {
            BowlingAction::AddPlayer => {
                if self.game.players().len() >= MAX_PLAYERS as usize {
                    return Err(InvalidOperation::TableFull(MAX_PLAYERS).into());
                }
                self.game.add_player()?;
                // Bounded by MAX_PLAYERS above.
                self.players = self.players.max(self.game.players().len() as u8);
                Ok(())
            }
            BowlingAction::NewGame => {
                self.game = Game::new();
                self.seat_players();
                info!(players = self.players, "new game");
                Ok(())
            }
            BowlingAction::Roll => {
                let standing = self.standing()?;
                let pins = self.rng.roll(standing);
                self.record(pins)
            }
            BowlingAction::Spare => {
                let standing = self.standing()?;
                self.record(standing)
            }
            BowlingAction::Pins(pins) => self.record(pins),
        }
    }

    fn standing(&self) -> Result<u8, EngineError> {
        self.game.pins_standing().ok_or_else(|| self.no_turn())
    }

    fn record(&mut self, pins: u8) -> Result<(), EngineError> {
        let turn = self.game.current_turn().ok_or_else(|| self.no_turn())?;
        self.game.record_roll(turn.player, pins)
    }

    fn no_turn(&self) -> EngineError {
        if self.game.is_over() {
            InvalidOperation::GameOver.into()
        } else {
            InvalidOperation::NoPlayers.into()
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }

    /// Text for the status area: the last rejected action, if any.
    pub fn message(&self) -> Option<String> {
        self.last_error.map(|err| err.to_string())
    }
}
