//! Game module - the scoring state machine
//!
//! `Game` owns the players and the shared turn pointer. It is the single place
//! that mutates frames: [`Game::record_roll`] validates a delivery, pays pending
//! bonuses, records the pins, and advances the turn. Everything else is a
//! read-only query used by callers to draw the scorecard.
//!
//! Turn order is round-robin inside a frame: every player bowls frame N before
//! anyone starts frame N+1. Each player still keeps an independent frame cursor;
//! the game only checks that the cursor of the player up matches the shared
//! frame pointer.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{EngineError, InvalidOperation};
use crate::player::Player;
use crate::snapshot::{FrameView, GameSnapshot};
use crate::types::{PlayerId, Turn, LAST_FRAME};

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    AwaitingRoll,
    GameOver,
}

/// Final result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Winner(PlayerId),
    /// Two or more players share the top score.
    Tie(Vec<PlayerId>),
}

#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    /// Turn-order position of the player up.
    current_player: usize,
    /// Shared 1-based frame pointer.
    current_frame: u8,
    phase: Phase,
    rolls_recorded: u32,
    winner: Option<PlayerId>,
}

impl Game {
    /// Create an empty game. Players join with [`Game::add_player`].
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            current_player: 0,
            current_frame: 1,
            phase: Phase::AwaitingRoll,
            rolls_recorded: 0,
            winner: None,
        }
    }

    /// Append a player with ten empty frames.
    ///
    /// Players can only join before the first delivery so every player bowls
    /// the same round-robin sequence.
    pub fn add_player(&mut self) -> Result<PlayerId, EngineError> {
        if self.has_started() {
            return Err(InvalidOperation::GameInProgress.into());
        }
        let id = PlayerId::from_index(self.players.len());
        self.players.push(Player::new(id));
        debug!(player = %id, "player added");
        Ok(id)
    }

    /// Record one delivery for `player`.
    ///
    /// The delivery must come from the player whose turn it is and may not
    /// knock down more pins than are standing. Validation runs before any
    /// mutation, so a rejected call changes nothing.
    pub fn record_roll(&mut self, player: PlayerId, pins: u8) -> Result<(), EngineError> {
        let idx = self.validate_roll(player, pins)?;

        let outcome = self.players[idx].record(pins);
        self.rolls_recorded += 1;
        debug!(
            player = %player,
            frame = outcome.frame,
            pins,
            credited = outcome.credits.len(),
            complete = outcome.frame_complete,
            "roll recorded"
        );

        if outcome.frame_complete {
            self.advance_turn();
        }
        Ok(())
    }

    fn validate_roll(&self, player: PlayerId, pins: u8) -> Result<usize, EngineError> {
        if self.phase == Phase::GameOver {
            return Err(InvalidOperation::GameOver.into());
        }
        let current = self
            .players
            .get(self.current_player)
            .ok_or(InvalidOperation::NoPlayers)?;
        if player != current.id() {
            if self.player(player).is_none() {
                return Err(InvalidOperation::UnknownPlayer(player).into());
            }
            return Err(InvalidOperation::OutOfTurn {
                expected: current.id(),
                attempted: player,
            }
            .into());
        }

        let frame = current
            .active_frame()
            .ok_or(InvalidOperation::FrameComplete(LAST_FRAME))?;
        debug_assert_eq!(frame.index(), self.current_frame);
        frame.check_roll(pins)?;
        Ok(self.current_player)
    }

    fn advance_turn(&mut self) {
        if self.current_player + 1 < self.players.len() {
            self.current_player += 1;
        } else if self.current_frame < LAST_FRAME {
            self.current_frame += 1;
            self.current_player = 0;
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        self.winner = match self.outcome() {
            Some(Outcome::Winner(id)) => Some(id),
            _ => None,
        };
        match self.winner {
            Some(id) => info!(winner = %id, score = self.players[id.index()].total_score(), "game over"),
            None => info!("game over, tied for first"),
        }
    }

    /// Read back one frame of a player's card.
    pub fn frame(&self, player: PlayerId, index: u8) -> Result<FrameView, EngineError> {
        let p = self
            .player(player)
            .ok_or(InvalidOperation::UnknownPlayer(player))?;
        if !(1..=LAST_FRAME).contains(&index) {
            return Err(InvalidOperation::FrameOutOfRange(index).into());
        }
        Ok(FrameView::new(p, index))
    }

    /// The player with the strictly highest total once the game is over.
    ///
    /// A tie for first, or an unfinished game, has no winner.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Winner or tied leaders, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != Phase::GameOver {
            return None;
        }
        let best = self.players.iter().map(Player::total_score).max()?;
        let leaders: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.total_score() == best)
            .map(Player::id)
            .collect();
        match leaders.as_slice() {
            [only] => Some(Outcome::Winner(*only)),
            _ => Some(Outcome::Tie(leaders)),
        }
    }

    /// The delivery the engine expects next.
    ///
    /// `None` before anyone has joined and after the game is over.
    pub fn current_turn(&self) -> Option<Turn> {
        if self.phase == Phase::GameOver {
            return None;
        }
        let player = self.players.get(self.current_player)?;
        let frame = player.active_frame()?;
        Some(Turn {
            player: player.id(),
            frame: self.current_frame,
            roll: frame.rolls().len() as u8 + 1,
        })
    }

    /// Pins standing for the delivery the engine expects next.
    pub fn pins_standing(&self) -> Option<u8> {
        if self.phase == Phase::GameOver {
            return None;
        }
        self.players
            .get(self.current_player)?
            .active_frame()
            .map(|f| f.pins_standing())
    }

    /// Player and frame of every turn still to be bowled, in order.
    ///
    /// The turn in progress is included.
    pub fn remaining_turns(&self) -> impl Iterator<Item = (PlayerId, u8)> + '_ {
        let players = if self.phase == Phase::GameOver {
            0
        } else {
            self.players.len()
        };
        let first_frame = self.current_frame;
        let first_player = self.current_player;
        (first_frame..=LAST_FRAME).flat_map(move |frame| {
            let start = if frame == first_frame { first_player } else { 0 };
            (start..players).map(move |i| (PlayerId::from_index(i), frame))
        })
    }

    /// Players ordered by total score, highest first. Equal totals keep turn
    /// order.
    pub fn standings(&self) -> Vec<(PlayerId, u16)> {
        let mut standings: Vec<(PlayerId, u16)> = self
            .players
            .iter()
            .map(|p| (p.id(), p.total_score()))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        if id.0 == 0 {
            return None;
        }
        self.players.get(id.index())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True once the first delivery has been recorded.
    pub fn has_started(&self) -> bool {
        self.rolls_recorded > 0
    }

    pub fn rolls_recorded(&self) -> u32 {
        self.rolls_recorded
    }

    /// Shared 1-based frame pointer.
    pub fn current_frame(&self) -> u8 {
        self.current_frame
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_players(n: usize) -> Game {
        let mut game = Game::new();
        for _ in 0..n {
            game.add_player().unwrap();
        }
        game
    }

    /// Bowl `rolls` for whoever is up, in order.
    fn bowl(game: &mut Game, rolls: &[u8]) {
        for &pins in rolls {
            let turn = game.current_turn().unwrap();
            game.record_roll(turn.player, pins).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert!(game.players().is_empty());
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert!(!game.has_started());
        assert_eq!(game.current_turn(), None);
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_frame(), 1);
    }

    #[test]
    fn test_add_player_assigns_sequential_ids() {
        let mut game = Game::new();
        assert_eq!(game.add_player(), Ok(PlayerId(1)));
        assert_eq!(game.add_player(), Ok(PlayerId(2)));
        assert_eq!(game.players().len(), 2);
        assert_eq!(
            game.current_turn(),
            Some(Turn {
                player: PlayerId(1),
                frame: 1,
                roll: 1
            })
        );
    }

    #[test]
    fn test_add_player_after_first_roll_rejected() {
        let mut game = game_with_players(1);
        game.record_roll(PlayerId(1), 4).unwrap();
        assert_eq!(
            game.add_player(),
            Err(InvalidOperation::GameInProgress.into())
        );
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn test_roll_without_players_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.record_roll(PlayerId(1), 3),
            Err(InvalidOperation::NoPlayers.into())
        );
    }

    #[test]
    fn test_rejected_roll_leaves_state_unchanged() {
        let mut game = game_with_players(2);
        game.record_roll(PlayerId(1), 6).unwrap();
        let before = game.snapshot();

        assert!(game.record_roll(PlayerId(1), 5).unwrap_err().is_invalid_pin_count());
        assert!(game.record_roll(PlayerId(2), 1).unwrap_err().is_invalid_operation());
        assert_eq!(
            game.record_roll(PlayerId(7), 1),
            Err(InvalidOperation::UnknownPlayer(PlayerId(7)).into())
        );

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.rolls_recorded(), 1);
    }

    #[test]
    fn test_turn_passes_after_frame_completes() {
        let mut game = game_with_players(2);
        game.record_roll(PlayerId(1), 3).unwrap();
        assert_eq!(game.current_turn().unwrap().player, PlayerId(1));
        assert_eq!(game.current_turn().unwrap().roll, 2);

        game.record_roll(PlayerId(1), 4).unwrap();
        assert_eq!(game.current_turn().unwrap().player, PlayerId(2));

        game.record_roll(PlayerId(2), 10).unwrap();
        let turn = game.current_turn().unwrap();
        assert_eq!(turn.player, PlayerId(1));
        assert_eq!(turn.frame, 2);
        assert_eq!(game.current_frame(), 2);
    }

    #[test]
    fn test_pins_standing_tracks_active_delivery() {
        let mut game = game_with_players(1);
        assert_eq!(game.pins_standing(), Some(10));
        bowl(&mut game, &[8]);
        assert_eq!(game.pins_standing(), Some(2));
        bowl(&mut game, &[1]);
        assert_eq!(game.pins_standing(), Some(10));
    }

    #[test]
    fn test_remaining_turns_sequence() {
        let mut game = game_with_players(2);
        let all: Vec<_> = game.remaining_turns().collect();
        assert_eq!(all.len(), 20);
        assert_eq!(all[0], (PlayerId(1), 1));
        assert_eq!(all[1], (PlayerId(2), 1));
        assert_eq!(all[19], (PlayerId(2), 10));

        bowl(&mut game, &[10]);
        let rest: Vec<_> = game.remaining_turns().collect();
        assert_eq!(rest.len(), 19);
        assert_eq!(rest[0], (PlayerId(2), 1));
        assert_eq!(rest[1], (PlayerId(1), 2));
    }

    #[test]
    fn test_game_over_and_winner() {
        let mut game = game_with_players(2);
        for _ in 0..9 {
            bowl(&mut game, &[3, 4, 10]);
        }
        bowl(&mut game, &[3, 4]);
        assert!(!game.is_over());
        bowl(&mut game, &[10, 10, 10]);

        assert!(game.is_over());
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.current_turn(), None);
        assert_eq!(game.pins_standing(), None);
        assert_eq!(game.remaining_turns().count(), 0);
        assert_eq!(game.winner(), Some(PlayerId(2)));
        assert_eq!(game.outcome(), Some(Outcome::Winner(PlayerId(2))));
        assert_eq!(
            game.record_roll(PlayerId(1), 0),
            Err(InvalidOperation::GameOver.into())
        );
    }

    #[test]
    fn test_tie_has_no_winner() {
        let mut game = game_with_players(2);
        bowl(&mut game, &[0; 40]);
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Tie(vec![PlayerId(1), PlayerId(2)]))
        );
    }

    #[test]
    fn test_standings_sorted_by_total() {
        let mut game = game_with_players(3);
        bowl(&mut game, &[1, 1, 9, 0, 5, 0]);
        assert_eq!(
            game.standings(),
            vec![(PlayerId(2), 9), (PlayerId(3), 5), (PlayerId(1), 2)]
        );
    }

    #[test]
    fn test_frame_query_bounds() {
        let game = game_with_players(1);
        assert!(game.frame(PlayerId(1), 1).is_ok());
        assert!(game.frame(PlayerId(1), 10).is_ok());
        assert_eq!(
            game.frame(PlayerId(1), 0),
            Err(InvalidOperation::FrameOutOfRange(0).into())
        );
        assert_eq!(
            game.frame(PlayerId(1), 11),
            Err(InvalidOperation::FrameOutOfRange(11).into())
        );
        assert_eq!(
            game.frame(PlayerId(2), 1),
            Err(InvalidOperation::UnknownPlayer(PlayerId(2)).into())
        );
    }
}
