use serde::Serialize;

use crate::game::Game;
use crate::player::Player;
use crate::types::{PlayerId, Turn, LAST_FRAME};

/// Read-only view of one frame on a player's card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub index: u8,
    pub rolls: Vec<u8>,
    pub marks: String,
    /// Own pins, before bonus credit.
    pub score: u16,
    /// Bonus pins credited from later deliveries.
    pub bonus: u16,
    /// `score + bonus`.
    pub total: u16,
    /// Cumulative total, `None` while pending.
    pub running_total: Option<u16>,
    pub is_strike: bool,
    pub is_spare: bool,
    pub is_complete: bool,
}

impl FrameView {
    pub(crate) fn new(player: &Player, index: u8) -> Self {
        let frame = &player.frames()[index as usize - 1];
        Self {
            index,
            rolls: frame.rolls().to_vec(),
            marks: frame.marks().iter().collect(),
            score: frame.pins(),
            bonus: frame.bonus(),
            total: frame.total(),
            running_total: player.running_total(index),
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
            is_complete: frame.is_complete(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.running_total.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub frames: Vec<FrameView>,
    pub total_score: u16,
    pub finished: bool,
}

impl PlayerSnapshot {
    fn new(player: &Player) -> Self {
        Self {
            id: player.id(),
            frames: (1..=LAST_FRAME).map(|i| FrameView::new(player, i)).collect(),
            total_score: player.total_score(),
            finished: player.is_finished(),
        }
    }
}

/// Everything a renderer needs to draw the scorecard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub turn: Option<Turn>,
    pub winner: Option<PlayerId>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub(crate) fn new(game: &Game) -> Self {
        Self {
            players: game.players().iter().map(PlayerSnapshot::new).collect(),
            turn: game.current_turn(),
            winner: game.winner(),
            game_over: game.is_over(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_of_empty_game() {
        let snap = Game::new().snapshot();
        assert_eq!(snap, GameSnapshot::default());
    }

    #[test]
    fn snapshot_reports_pending_frames() {
        let mut game = Game::new();
        let id = game.add_player().unwrap();
        game.record_roll(id, 10).unwrap();
        game.record_roll(id, 4).unwrap();

        let snap = game.snapshot();
        let player = snap.player(id).unwrap();
        assert_eq!(player.frames.len(), 10);
        assert_eq!(player.frames[0].marks, "X");
        assert!(player.frames[0].is_pending());
        assert!(player.frames[0].is_strike);
        assert_eq!(player.frames[0].total, 14);
        assert_eq!(player.frames[1].rolls, vec![4]);
        assert!(!player.frames[1].is_complete);
        assert_eq!(player.total_score, 0);
        assert_eq!(snap.turn.unwrap().roll, 2);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut game = Game::new();
        let id = game.add_player().unwrap();
        game.record_roll(id, 7).unwrap();
        game.record_roll(id, 3).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();
        let frame = &json["players"][0]["frames"][0];
        assert_eq!(frame["marks"], "7/");
        assert_eq!(frame["isSpare"], true);
        assert!(frame["runningTotal"].is_null());
        assert_eq!(json["turn"]["frame"], 2);
        assert_eq!(json["gameOver"], false);
    }
}
