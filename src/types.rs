//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Pins standing at the start of every roll
pub const PIN_COUNT: u8 = 10;

/// Frames in a game
pub const FRAME_COUNT: usize = 10;

/// Number of the final frame, which carries the bonus-roll rules
pub const LAST_FRAME: u8 = 10;

/// Roll display legend
pub const STRIKE_MARK: &str = "X";
pub const SPARE_MARK: &str = "/";
pub const EMPTY_MARK: &str = "-";

/// Roll ordinal within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollSlot {
    First,
    Second,
    Third,
}

impl RollSlot {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            RollSlot::First => "first",
            RollSlot::Second => "second",
            RollSlot::Third => "third",
        }
    }
}

impl std::fmt::Display for RollSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
