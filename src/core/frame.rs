//! Frame module - one scoring unit of a bowling game
//!
//! A frame stores the pins knocked down by each of its rolls and derives
//! everything else: strike/spare classification, completion, and the display
//! legend. Strike and spare are computed from the stored rolls on demand, so
//! rolls and classification can never disagree.
//!
//! Frames 1-9 take up to two rolls. Frame 10 takes up to three, with its own
//! completion rules; it never reports `is_strike`/`is_spare` (its bonus rolls
//! are part of its own score, not a later frame's).

use crate::core::error::RollError;
use crate::types::{RollSlot, EMPTY_MARK, LAST_FRAME, PIN_COUNT, SPARE_MARK, STRIKE_MARK};

/// One frame of a game: its position and the rolls recorded so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    number: u8,
    first: Option<u8>,
    second: Option<u8>,
    third: Option<u8>,
}

impl Frame {
    /// Create an empty frame at the given position (1-10).
    pub fn new(number: u8) -> Self {
        debug_assert!((1..=LAST_FRAME).contains(&number));
        Self {
            number,
            first: None,
            second: None,
            third: None,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn first_roll(&self) -> Option<u8> {
        self.first
    }

    pub fn second_roll(&self) -> Option<u8> {
        self.second
    }

    pub fn third_roll(&self) -> Option<u8> {
        self.third
    }

    /// All ten pins on the first roll, frames 1-9 only.
    pub fn is_strike(&self) -> bool {
        self.number < LAST_FRAME && self.first == Some(PIN_COUNT)
    }

    /// All ten pins across two rolls without a strike, frames 1-9 only.
    pub fn is_spare(&self) -> bool {
        if self.number >= LAST_FRAME || self.first == Some(PIN_COUNT) {
            return false;
        }
        match (self.first, self.second) {
            (Some(a), Some(b)) => a + b == PIN_COUNT,
            _ => false,
        }
    }

    /// The legal maximum for the next roll in the given slot.
    ///
    /// Second roll: the pins left standing, except after a tenth-frame
    /// strike where the deck is reset. Bonus (third) rolls always start
    /// from a full deck.
    pub fn pins_available(&self, slot: RollSlot) -> u8 {
        match slot {
            RollSlot::First | RollSlot::Third => PIN_COUNT,
            RollSlot::Second => match self.first {
                Some(p) if p == PIN_COUNT => PIN_COUNT,
                Some(p) => PIN_COUNT - p,
                None => PIN_COUNT,
            },
        }
    }

    /// Record the first roll of the frame.
    pub fn record_first_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if self.first.is_some() {
            return Err(RollError::OutOfOrder {
                frame: self.number,
                slot: RollSlot::First,
            });
        }
        if pins > PIN_COUNT {
            return Err(RollError::PinsOutOfRange {
                pins,
                max: PIN_COUNT,
            });
        }
        self.first = Some(pins);
        Ok(())
    }

    /// Record the second roll of the frame.
    ///
    /// Frames 1-9 reject this after a strike; callers skip straight to the
    /// next frame instead.
    pub fn record_second_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if self.first.is_none() || self.second.is_some() {
            return Err(RollError::OutOfOrder {
                frame: self.number,
                slot: RollSlot::Second,
            });
        }
        if self.is_strike() {
            return Err(RollError::SecondRollAfterStrike { frame: self.number });
        }
        let max = self.pins_available(RollSlot::Second);
        if pins > max {
            return Err(RollError::PinsOutOfRange { pins, max });
        }
        self.second = Some(pins);
        Ok(())
    }

    /// Record the bonus roll. Legal only in frame 10, and only when a strike
    /// or spare earned it.
    pub fn record_third_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if self.number != LAST_FRAME {
            return Err(RollError::ThirdRollOutsideTenth { frame: self.number });
        }
        if self.second.is_none() || self.third.is_some() || self.is_complete() {
            return Err(RollError::OutOfOrder {
                frame: self.number,
                slot: RollSlot::Third,
            });
        }
        let max = self.pins_available(RollSlot::Third);
        if pins > max {
            return Err(RollError::PinsOutOfRange { pins, max });
        }
        self.third = Some(pins);
        Ok(())
    }

    /// Whether the frame needs no further rolls.
    pub fn is_complete(&self) -> bool {
        if self.number < LAST_FRAME {
            return self.is_strike() || (self.first.is_some() && self.second.is_some());
        }
        match (self.first, self.second) {
            (Some(first), second) if first == PIN_COUNT => {
                // Strike: two bonus rolls.
                second.is_some() && self.third.is_some()
            }
            (Some(first), Some(second)) => {
                if first + second == PIN_COUNT {
                    // Spare: one bonus roll.
                    self.third.is_some()
                } else {
                    true
                }
            }
            _ => false,
        }
    }

    /// Display string for the first roll: `X` for a strike (frames 1-9),
    /// `-` when not yet rolled, otherwise the pin count.
    pub fn display_first_roll(&self) -> String {
        match self.first {
            None => EMPTY_MARK.to_string(),
            Some(p) if p == PIN_COUNT && self.number != LAST_FRAME => STRIKE_MARK.to_string(),
            Some(p) => p.to_string(),
        }
    }

    /// Display string for the second roll: `/` for a spare, `-` when absent
    /// (or semantically skipped after a strike), `X` for a tenth-frame bonus
    /// strike, otherwise the pin count.
    pub fn display_second_roll(&self) -> String {
        let Some(second) = self.second else {
            return EMPTY_MARK.to_string();
        };
        if self.number < LAST_FRAME {
            if self.is_spare() {
                SPARE_MARK.to_string()
            } else if self.is_strike() {
                EMPTY_MARK.to_string()
            } else {
                second.to_string()
            }
        } else {
            let first = self.first.unwrap_or(0);
            if first == PIN_COUNT {
                if second == PIN_COUNT {
                    STRIKE_MARK.to_string()
                } else if first + second == PIN_COUNT {
                    SPARE_MARK.to_string()
                } else {
                    second.to_string()
                }
            } else if first + second == PIN_COUNT {
                SPARE_MARK.to_string()
            } else {
                second.to_string()
            }
        }
    }

    /// Display string for the tenth-frame bonus roll.
    pub fn display_third_roll(&self) -> String {
        let Some(third) = self.third else {
            return EMPTY_MARK.to_string();
        };
        if third == PIN_COUNT {
            return STRIKE_MARK.to_string();
        }
        match self.second {
            Some(second) if second != PIN_COUNT && second + third == PIN_COUNT => {
                SPARE_MARK.to_string()
            }
            _ => third.to_string(),
        }
    }
}
