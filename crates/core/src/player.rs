//! Player module - one bowler's ten frames, frame cursor and pending bonuses
//!
//! Each player advances through frames with an independent cursor. The game
//! enforces round-robin order on top of it; the player only knows which of its
//! own frames is active and which earlier frames are still owed bonus pins.

use crate::bonus::{BonusObligation, BonusQueue, Credits};
use crate::frame::Frame;
use crate::types::{PlayerId, FRAMES_PER_GAME, LAST_FRAME};

/// What a single recorded delivery did to a player's card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Frame the delivery was recorded in.
    pub frame: u8,
    /// Whether that frame can take no more rolls.
    pub frame_complete: bool,
    /// Earlier frames that received bonus pins from this delivery.
    pub credits: Credits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    frames: [Frame; FRAMES_PER_GAME as usize],
    /// 1-based index of the frame taking deliveries.
    cursor: u8,
    bonus: BonusQueue,
}

impl Player {
    /// Create a player with ten empty frames.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)),
            cursor: 1,
            bonus: BonusQueue::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by 1-based index.
    pub fn frame(&self, index: u8) -> Option<&Frame> {
        let i = (index as usize).checked_sub(1)?;
        self.frames.get(i)
    }

    /// 1-based index of the frame that takes the next delivery.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// The frame taking deliveries, or `None` once frame 10 is complete.
    pub fn active_frame(&self) -> Option<&Frame> {
        if self.is_finished() {
            return None;
        }
        self.frame(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.frames[LAST_FRAME as usize - 1].is_complete()
    }

    pub fn pending_bonus(&self) -> &BonusQueue {
        &self.bonus
    }

    /// Complete and no longer owed bonus pins.
    pub fn is_frame_final(&self, index: u8) -> bool {
        self.frame(index)
            .map(|f| f.is_complete() && !self.bonus.is_owed(index))
            .unwrap_or(false)
    }

    /// Cumulative score through `index`, or `None` while any frame up to it is
    /// incomplete or still owed bonus.
    pub fn running_total(&self, index: u8) -> Option<u16> {
        if !(1..=LAST_FRAME).contains(&index) {
            return None;
        }
        let mut total = 0u16;
        for i in 1..=index {
            if !self.is_frame_final(i) {
                return None;
            }
            total += self.frames[i as usize - 1].total();
        }
        Some(total)
    }

    /// Running total through the last finalized frame (0 if none).
    pub fn total_score(&self) -> u16 {
        let mut total = 0u16;
        for i in 1..=LAST_FRAME {
            if !self.is_frame_final(i) {
                break;
            }
            total += self.frames[i as usize - 1].total();
        }
        total
    }

    /// Record a delivery that the game has already validated against the
    /// active frame.
    ///
    /// Pending bonuses are paid first, then the pins land in the active frame.
    /// A strike or spare in frames 1-9 opens a new obligation.
    pub(crate) fn record(&mut self, pins: u8) -> RollOutcome {
        let credits = self.bonus.credit(pins);
        for &(index, credited) in &credits {
            self.frames[index as usize - 1].credit_bonus(credited);
        }

        let index = self.cursor;
        let frame = &mut self.frames[index as usize - 1];
        frame.push_roll(pins);

        if !frame.is_last() {
            if frame.is_strike() && frame.rolls().len() == 1 {
                self.bonus.push(BonusObligation::strike(index));
            } else if frame.is_spare() && frame.rolls().len() == 2 {
                self.bonus.push(BonusObligation::spare(index));
            }
        }

        let frame_complete = frame.is_complete();
        if frame_complete && index < LAST_FRAME {
            self.cursor += 1;
        }

        RollOutcome {
            frame: index,
            frame_complete,
            credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl(player: &mut Player, rolls: &[u8]) {
        for &pins in rolls {
            player.active_frame().unwrap().check_roll(pins).unwrap();
            player.record(pins);
        }
    }

    #[test]
    fn test_new_player_has_ten_empty_frames() {
        let player = Player::new(PlayerId(1));
        assert_eq!(player.frames().len(), 10);
        assert_eq!(player.cursor(), 1);
        assert!(player.frames().iter().all(|f| f.rolls().is_empty()));
        assert_eq!(player.frame(10).unwrap().index(), 10);
        assert!(player.frame(0).is_none());
        assert!(player.frame(11).is_none());
        assert_eq!(player.total_score(), 0);
    }

    #[test]
    fn test_cursor_advances_on_complete_frame() {
        let mut player = Player::new(PlayerId(1));
        bowl(&mut player, &[3]);
        assert_eq!(player.cursor(), 1);
        bowl(&mut player, &[4]);
        assert_eq!(player.cursor(), 2);
        bowl(&mut player, &[10]);
        assert_eq!(player.cursor(), 3);
    }

    #[test]
    fn test_strike_total_pending_until_two_bonus_rolls() {
        let mut player = Player::new(PlayerId(1));
        bowl(&mut player, &[10]);
        assert_eq!(player.running_total(1), None);

        bowl(&mut player, &[7]);
        assert_eq!(player.running_total(1), None);

        let outcome = {
            player.active_frame().unwrap().check_roll(2).unwrap();
            player.record(2)
        };
        assert_eq!(outcome.credits.as_slice(), &[(1, 2)]);
        assert_eq!(player.running_total(1), Some(19));
        assert_eq!(player.running_total(2), Some(28));
        assert_eq!(player.total_score(), 28);
    }

    #[test]
    fn test_spare_takes_next_ball_only() {
        let mut player = Player::new(PlayerId(1));
        bowl(&mut player, &[6, 4]);
        assert_eq!(player.running_total(1), None);
        bowl(&mut player, &[5]);
        assert_eq!(player.running_total(1), Some(15));
        assert_eq!(player.running_total(2), None);
        bowl(&mut player, &[0]);
        assert_eq!(player.running_total(2), Some(20));
    }

    #[test]
    fn test_frame_ten_opens_no_obligations() {
        let mut player = Player::new(PlayerId(1));
        bowl(&mut player, &[0; 18]);
        assert_eq!(player.cursor(), 10);
        bowl(&mut player, &[10, 10, 10]);
        assert!(player.is_finished());
        assert!(player.pending_bonus().is_empty());
        assert!(player.active_frame().is_none());
        assert_eq!(player.running_total(10), Some(30));
        assert_eq!(player.frame(10).unwrap().bonus(), 0);
    }

    #[test]
    fn test_strike_in_ninth_takes_first_two_balls_of_tenth() {
        let mut player = Player::new(PlayerId(1));
        bowl(&mut player, &[0; 16]);
        bowl(&mut player, &[10]);
        bowl(&mut player, &[10, 3, 4]);
        assert_eq!(player.frame(9).unwrap().total(), 23);
        assert_eq!(player.frame(10).unwrap().total(), 17);
        assert_eq!(player.total_score(), 40);
    }
}
