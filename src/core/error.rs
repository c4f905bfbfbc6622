//! Error types for the scoring core.
//!
//! Two kinds of failure come out of the core. `PinsOutOfRange` is a
//! recoverable validation failure: the input loop is expected to re-prompt.
//! Everything else is an ordering/invariant violation, which means the
//! caller drove the core incorrectly and must not be retried.

use thiserror::Error;

use crate::types::RollSlot;

/// Failure while recording a roll or advancing the frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// Defensive bounds check; primary validation lives in the input loop.
    #[error("pin count {pins} exceeds the {max} pins available")]
    PinsOutOfRange { pins: u8, max: u8 },

    /// A roll was recorded before its predecessor, or recorded twice.
    #[error("{slot} roll recorded out of order in frame {frame}")]
    OutOfOrder { frame: u8, slot: RollSlot },

    /// Frames 1-9 take no second roll after a strike.
    #[error("second roll recorded after a strike in frame {frame}")]
    SecondRollAfterStrike { frame: u8 },

    /// Only the final frame carries a bonus roll.
    #[error("third roll recorded in frame {frame}")]
    ThirdRollOutsideTenth { frame: u8 },

    /// A new frame was begun while the previous one still had rolls pending.
    #[error("frame {frame} still has rolls outstanding")]
    FrameIncomplete { frame: u8 },

    /// A roll arrived before any frame was begun.
    #[error("no frame in play")]
    NoActiveFrame,

    /// The tenth frame is complete; the game accepts no further rolls.
    #[error("no rolls accepted: the game is complete")]
    GameComplete,
}

impl RollError {
    /// Recoverable failures are retried by the input loop; the rest
    /// indicate a caller bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RollError::PinsOutOfRange { .. })
    }
}
