//! Frame module - one of the ten scoring units of a player's game
//!
//! A frame owns its deliveries and the bonus pins credited to it from later
//! deliveries. It knows how many pins are still standing and when it can take no
//! more rolls, including the frame-10 fill-ball rule.

use arrayvec::ArrayVec;

use crate::error::{EngineError, InvalidOperation};
use crate::types::{LAST_FRAME, MAX_ROLLS_LAST_FRAME, PINS_PER_RACK};

/// Rolls recorded in a single frame.
pub type Rolls = ArrayVec<u8, MAX_ROLLS_LAST_FRAME>;

/// Scorecard notation for a frame's rolls (`X`, `/`, `-`, or a digit).
pub type Marks = ArrayVec<char, MAX_ROLLS_LAST_FRAME>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    index: u8,
    rolls: Rolls,
    /// Pins credited from later deliveries (strike/spare bonus).
    bonus: u16,
}

impl Frame {
    /// Create an empty frame. `index` is 1-based.
    pub fn new(index: u8) -> Self {
        debug_assert!((1..=LAST_FRAME).contains(&index));
        Self {
            index,
            rolls: ArrayVec::new(),
            bonus: 0,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn is_last(&self) -> bool {
        self.index == LAST_FRAME
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PINS_PER_RACK)
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.rolls.len() >= 2
            && self.rolls[0] + self.rolls[1] == PINS_PER_RACK
    }

    /// Whether the frame can accept no more rolls.
    ///
    /// Frames 1-9 close after a strike or two deliveries. Frame 10 closes after
    /// two deliveries unless they opened a fill ball (strike or spare), in which
    /// case it closes after the third.
    pub fn is_complete(&self) -> bool {
        match (self.is_last(), self.rolls.len()) {
            (_, 0) => false,
            (false, 1) => self.is_strike(),
            (false, _) => true,
            (true, 1) => false,
            (true, 2) => !(self.is_strike() || self.is_spare()),
            (true, _) => true,
        }
    }

    /// Pins available to the next delivery.
    ///
    /// In frame 10 the rack is reset whenever all pins go down, so a fill ball
    /// always sees a full rack after a strike or spare. Complete frames report 0.
    pub fn pins_standing(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        let mut standing = PINS_PER_RACK;
        for &pins in &self.rolls {
            standing = standing.saturating_sub(pins);
            if standing == 0 {
                standing = PINS_PER_RACK;
            }
        }
        standing
    }

    /// The frame's own pins, before any bonus credit.
    pub fn pins(&self) -> u16 {
        self.rolls.iter().map(|&p| p as u16).sum()
    }

    /// Bonus pins credited so far from later deliveries.
    pub fn bonus(&self) -> u16 {
        self.bonus
    }

    /// Own pins plus credited bonus.
    pub fn total(&self) -> u16 {
        self.pins() + self.bonus
    }

    /// Standard scorecard notation for each recorded roll.
    pub fn marks(&self) -> Marks {
        let mut marks = Marks::new();
        let mut standing = PINS_PER_RACK;
        let mut fresh_rack = true;
        for &pins in &self.rolls {
            let mark = if pins == standing && fresh_rack {
                'X'
            } else if pins == standing {
                '/'
            } else if pins == 0 {
                '-'
            } else {
                char::from(b'0' + pins)
            };
            marks.push(mark);

            standing = standing.saturating_sub(pins);
            fresh_rack = standing == 0;
            if fresh_rack {
                standing = PINS_PER_RACK;
            }
        }
        marks
    }

    /// Validate a delivery without recording it.
    pub fn check_roll(&self, pins: u8) -> Result<(), EngineError> {
        if self.is_complete() {
            return Err(InvalidOperation::FrameComplete(self.index).into());
        }
        let standing = self.pins_standing();
        if pins > standing {
            return Err(EngineError::InvalidPinCount { pins, standing });
        }
        Ok(())
    }

    /// Record a delivery that already passed [`Frame::check_roll`].
    pub(crate) fn push_roll(&mut self, pins: u8) {
        debug_assert!(self.check_roll(pins).is_ok());
        self.rolls.push(pins);
    }

    pub(crate) fn credit_bonus(&mut self, pins: u8) {
        self.bonus += pins as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(index: u8, rolls: &[u8]) -> Frame {
        let mut frame = Frame::new(index);
        for &pins in rolls {
            frame.check_roll(pins).unwrap();
            frame.push_roll(pins);
        }
        frame
    }

    #[test]
    fn test_new_frame_is_empty() {
        let frame = Frame::new(1);
        assert_eq!(frame.index(), 1);
        assert!(frame.rolls().is_empty());
        assert!(!frame.is_complete());
        assert_eq!(frame.pins_standing(), 10);
        assert_eq!(frame.total(), 0);
    }

    #[test]
    fn test_strike_closes_regular_frame() {
        let frame = frame_with(3, &[10]);
        assert!(frame.is_strike());
        assert!(!frame.is_spare());
        assert!(frame.is_complete());
        assert_eq!(frame.pins(), 10);
        assert_eq!(frame.pins_standing(), 0);
    }

    #[test]
    fn test_spare_and_open_frames() {
        let spare = frame_with(2, &[6, 4]);
        assert!(spare.is_spare());
        assert!(spare.is_complete());

        let open = frame_with(2, &[6, 3]);
        assert!(!open.is_spare());
        assert!(!open.is_strike());
        assert!(open.is_complete());
        assert_eq!(open.pins(), 9);

        // Ten on the second ball after a gutter is a spare, not a strike.
        let late = frame_with(2, &[0, 10]);
        assert!(late.is_spare());
        assert!(!late.is_strike());
    }

    #[test]
    fn test_second_ball_limited_by_standing_pins() {
        let frame = frame_with(1, &[7]);
        assert_eq!(frame.pins_standing(), 3);
        assert_eq!(
            frame.check_roll(4),
            Err(EngineError::InvalidPinCount {
                pins: 4,
                standing: 3
            })
        );
        assert!(frame.check_roll(3).is_ok());
    }

    #[test]
    fn test_more_than_ten_rejected() {
        let frame = Frame::new(1);
        assert_eq!(
            frame.check_roll(11),
            Err(EngineError::InvalidPinCount {
                pins: 11,
                standing: 10
            })
        );
    }

    #[test]
    fn test_complete_frame_rejects_rolls() {
        let frame = frame_with(4, &[3, 4]);
        assert_eq!(
            frame.check_roll(0),
            Err(InvalidOperation::FrameComplete(4).into())
        );
    }

    #[test]
    fn test_last_frame_fill_balls() {
        let open = frame_with(10, &[3, 4]);
        assert!(open.is_complete());

        let strike = frame_with(10, &[10]);
        assert!(!strike.is_complete());
        assert_eq!(strike.pins_standing(), 10);

        let strike_then_seven = frame_with(10, &[10, 7]);
        assert!(!strike_then_seven.is_complete());
        assert_eq!(strike_then_seven.pins_standing(), 3);

        let spare = frame_with(10, &[4, 6]);
        assert!(!spare.is_complete());
        assert_eq!(spare.pins_standing(), 10);

        let full = frame_with(10, &[10, 10, 10]);
        assert!(full.is_complete());
        assert_eq!(full.pins(), 30);
        assert_eq!(
            full.check_roll(0),
            Err(InvalidOperation::FrameComplete(10).into())
        );
    }

    #[test]
    fn test_marks_notation() {
        assert_eq!(frame_with(1, &[10]).marks().as_slice(), &['X']);
        assert_eq!(frame_with(1, &[7, 3]).marks().as_slice(), &['7', '/']);
        assert_eq!(frame_with(1, &[0, 10]).marks().as_slice(), &['-', '/']);
        assert_eq!(frame_with(1, &[0, 0]).marks().as_slice(), &['-', '-']);
        assert_eq!(frame_with(10, &[10, 7, 3]).marks().as_slice(), &['X', '7', '/']);
        assert_eq!(frame_with(10, &[7, 3, 10]).marks().as_slice(), &['7', '/', 'X']);
        assert_eq!(frame_with(10, &[10, 10, 10]).marks().as_slice(), &['X', 'X', 'X']);
    }

    #[test]
    fn test_bonus_credit_adds_to_total() {
        let mut frame = frame_with(1, &[10]);
        frame.credit_bonus(7);
        frame.credit_bonus(3);
        assert_eq!(frame.pins(), 10);
        assert_eq!(frame.bonus(), 10);
        assert_eq!(frame.total(), 20);
    }
}
