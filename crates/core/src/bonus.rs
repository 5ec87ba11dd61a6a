//! Pending strike/spare bonuses.
//!
//! A strike in frames 1-9 is owed the next two deliveries, a spare the next
//! one. Obligations are pushed when the mark is made and drained by every later
//! delivery of the same player, whichever frame that delivery lands in.

use arrayvec::ArrayVec;

use crate::types::PINS_PER_RACK;

/// Bonus deliveries still owed to one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusObligation {
    /// 1-based frame index receiving the bonus.
    pub frame: u8,
    pub rolls_needed: u8,
}

impl BonusObligation {
    pub fn strike(frame: u8) -> Self {
        Self {
            frame,
            rolls_needed: 2,
        }
    }

    pub fn spare(frame: u8) -> Self {
        Self {
            frame,
            rolls_needed: 1,
        }
    }
}

/// Outstanding obligations for a single player.
///
/// At most two can be live at once: a strike waiting on its second bonus ball
/// and the mark made by the delivery that paid its first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusQueue {
    pending: ArrayVec<BonusObligation, 2>,
}

/// Frames credited by a single delivery, with the pins each received.
pub type Credits = ArrayVec<(u8, u8), 2>;

impl BonusQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obligation: BonusObligation) {
        debug_assert!(!self.pending.is_full());
        self.pending.push(obligation);
    }

    /// Pay one delivery's pins to every live obligation.
    ///
    /// Returns the credited frames in the order the obligations were made.
    /// Settled obligations are dropped.
    pub fn credit(&mut self, pins: u8) -> Credits {
        debug_assert!(pins <= PINS_PER_RACK);
        let mut credits = Credits::new();
        for obligation in self.pending.iter_mut() {
            credits.push((obligation.frame, pins));
            obligation.rolls_needed -= 1;
        }
        self.pending.retain(|o| o.rolls_needed > 0);
        credits
    }

    /// Whether `frame` is still waiting on bonus deliveries.
    pub fn is_owed(&self, frame: u8) -> bool {
        self.pending.iter().any(|o| o.frame == frame)
    }

    pub fn pending(&self) -> &[BonusObligation] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
