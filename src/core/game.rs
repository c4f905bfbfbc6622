//! Game module - the ten-frame sequence and its scoring
//!
//! The game owns the ordered frames, feeds validated rolls into the current
//! one, and computes scores. Scoring is a stateless computation over the
//! recorded rolls of the whole sequence, re-evaluated on every query: a
//! frame's score may depend on rolls that have not happened yet, in which
//! case it is undetermined (`None`) rather than wrong.

use arrayvec::ArrayVec;

use crate::core::error::RollError;
use crate::core::frame::Frame;
use crate::types::{RollSlot, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// Running cumulative total of one row of the score table.
///
/// The first frame whose score is undetermined makes every later running
/// total undetermined as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningTotal {
    Total(u32),
    /// The frame is a strike or spare still waiting on its bonus rolls.
    PendingBonus,
    /// The frame (or an earlier one) cannot be scored yet.
    NotAvailable,
}

/// One row of the rendered score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub number: u8,
    pub first: String,
    pub second: String,
    /// Present only for the tenth frame once its bonus roll is recorded.
    pub third: Option<String>,
    pub running: RunningTotal,
}

/// Snapshot of the whole score table, consumed by the term collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    pub rows: Vec<FrameRow>,
    /// Last successfully computed running total.
    pub total: u32,
}

/// A single game: up to ten frames, filled in order.
#[derive(Debug, Clone, Default)]
pub struct Game {
    frames: ArrayVec<Frame, FRAME_COUNT>,
    total_score: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Last running total computed by [`Game::score_table`].
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// The game is over once the tenth frame is complete.
    pub fn is_complete(&self) -> bool {
        self.frames.len() == FRAME_COUNT
            && self.frames.last().is_some_and(|frame| frame.is_complete())
    }

    /// Begin the next frame, returning its number (1-10).
    ///
    /// Frames are created strictly in order; the previous frame must be
    /// complete first.
    pub fn begin_frame(&mut self) -> Result<u8, RollError> {
        if let Some(last) = self.frames.last() {
            if !last.is_complete() {
                return Err(RollError::FrameIncomplete {
                    frame: last.number(),
                });
            }
        }
        if self.frames.len() == FRAME_COUNT {
            return Err(RollError::GameComplete);
        }
        let number = self.frames.len() as u8 + 1;
        self.frames.push(Frame::new(number));
        Ok(number)
    }

    /// Record a roll into the current frame.
    pub fn record_roll(&mut self, slot: RollSlot, pins: u8) -> Result<(), RollError> {
        if self.is_complete() {
            return Err(RollError::GameComplete);
        }
        let frame = self.frames.last_mut().ok_or(RollError::NoActiveFrame)?;
        match slot {
            RollSlot::First => frame.record_first_roll(pins),
            RollSlot::Second => frame.record_second_roll(pins),
            RollSlot::Third => frame.record_third_roll(pins),
        }
    }

    /// The legal maximum for the next roll in the current frame.
    pub fn pins_available(&self, slot: RollSlot) -> u8 {
        self.current_frame()
            .map(|frame| frame.pins_available(slot))
            .unwrap_or(PIN_COUNT)
    }

    /// The frame's point value, or `None` while required future rolls are
    /// still outstanding.
    pub fn score_of_frame(&self, index: usize) -> Option<u32> {
        let frame = self.frames.get(index)?;
        if frame.number() < LAST_FRAME {
            if frame.is_strike() {
                return self
                    .bonus_after_strike(index)
                    .map(|bonus| u32::from(PIN_COUNT) + bonus);
            }
            if frame.is_spare() {
                return self
                    .bonus_after_spare(index)
                    .map(|bonus| u32::from(PIN_COUNT) + bonus);
            }
            let first = frame.first_roll()?;
            let second = frame.second_roll()?;
            return Some(u32::from(first) + u32::from(second));
        }

        // Tenth frame: its bonus rolls are its own points.
        if !frame.is_complete() {
            return None;
        }
        let mut score = u32::from(frame.first_roll()?);
        if let Some(second) = frame.second_roll() {
            score += u32::from(second);
        }
        if let Some(third) = frame.third_roll() {
            score += u32::from(third);
        }
        Some(score)
    }

    /// Strike bonus: the next two rolls across subsequent frames.
    ///
    /// When the next frame is itself a strike, the second bonus roll is the
    /// *first* roll of the frame after that - including when that frame is
    /// the tenth. A lookahead that runs past the tenth frame is undetermined,
    /// never an out-of-bounds fault.
    fn bonus_after_strike(&self, index: usize) -> Option<u32> {
        let next = self.frames.get(index + 1)?;
        if next.is_strike() {
            let after_next = self.frames.get(index + 2)?;
            let first = after_next.first_roll()?;
            return Some(u32::from(PIN_COUNT) + u32::from(first));
        }
        let first = next.first_roll()?;
        let second = next.second_roll()?;
        Some(u32::from(first) + u32::from(second))
    }

    /// Spare bonus: the first roll of the next frame.
    fn bonus_after_spare(&self, index: usize) -> Option<u32> {
        self.frames
            .get(index + 1)?
            .first_roll()
            .map(u32::from)
    }

    /// Build the score table: per-frame roll displays and running totals.
    ///
    /// The last running total computed here becomes the authoritative
    /// `total_score` snapshot.
    pub fn score_table(&mut self) -> ScoreTable {
        let mut rows = Vec::with_capacity(self.frames.len());
        let mut running = 0u32;
        let mut last_total = None;
        let mut resolved = true;

        for index in 0..self.frames.len() {
            let frame = &self.frames[index];
            let running_total = match self.score_of_frame(index) {
                Some(points) if resolved => {
                    running += points;
                    last_total = Some(running);
                    RunningTotal::Total(running)
                }
                _ => {
                    resolved = false;
                    if frame.is_strike() || frame.is_spare() {
                        RunningTotal::PendingBonus
                    } else {
                        RunningTotal::NotAvailable
                    }
                }
            };

            rows.push(FrameRow {
                number: frame.number(),
                first: frame.display_first_roll(),
                second: frame.display_second_roll(),
                third: (frame.number() == LAST_FRAME && frame.third_roll().is_some())
                    .then(|| frame.display_third_roll()),
                running: running_total,
            });
        }

        if let Some(total) = last_total {
            self.total_score = total;
        }
        ScoreTable {
            rows,
            total: self.total_score,
        }
    }
}
