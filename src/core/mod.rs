//! Core module - pure scoring logic with no external dependencies
//!
//! This module contains the frame model, the bonus-lookahead scoring
//! algorithm, and the error taxonomy. It has zero dependencies on UI or I/O.

pub mod error;
pub mod frame;
pub mod game;

// Re-export commonly used types
pub use error::RollError;
pub use frame::Frame;
pub use game::{FrameRow, Game, RunningTotal, ScoreTable};
