//! Input module - parsing of per-roll command lines
//!
//! Pure functions only; the session loop owns the actual reading. A line is
//! either a pin count (bounds-checked against the pins available for the
//! roll), a score-display request, or a quit request.

use thiserror::Error;

/// What the user asked for at a roll prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pins(u8),
    ShowScore,
    Quit,
}

/// Rejected input. The message doubles as the re-prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid input. Please enter a valid integer, 'D' to display the score, or 'Q' to quit the game.")]
    NotANumber,
    #[error("Invalid input. Please enter a number between 0 and {max}, 'D' to display the score, or 'Q' to quit the game.")]
    OutOfRange { max: u8 },
}

/// Parse one prompt line. `max` is the number of pins still standing.
pub fn parse_line(line: &str, max: u8) -> Result<InputEvent, ParseError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(InputEvent::Quit);
    }
    if trimmed.eq_ignore_ascii_case("d") {
        return Ok(InputEvent::ShowScore);
    }
    match trimmed.parse::<u8>() {
        Ok(pins) if pins <= max => Ok(InputEvent::Pins(pins)),
        Ok(_) => Err(ParseError::OutOfRange { max }),
        // Negative numbers parse as integers but never as pin counts.
        Err(_) if trimmed.parse::<i64>().is_ok() => Err(ParseError::OutOfRange { max }),
        Err(_) => Err(ParseError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_counts_within_bounds() {
        assert_eq!(parse_line("0", 10), Ok(InputEvent::Pins(0)));
        assert_eq!(parse_line("10", 10), Ok(InputEvent::Pins(10)));
        assert_eq!(parse_line(" 7 \n", 10), Ok(InputEvent::Pins(7)));
        assert_eq!(parse_line("3", 3), Ok(InputEvent::Pins(3)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(parse_line("11", 10), Err(ParseError::OutOfRange { max: 10 }));
        assert_eq!(parse_line("4", 3), Err(ParseError::OutOfRange { max: 3 }));
        assert_eq!(parse_line("-1", 10), Err(ParseError::OutOfRange { max: 10 }));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(parse_line("abc", 10), Err(ParseError::NotANumber));
        assert_eq!(parse_line("", 10), Err(ParseError::NotANumber));
        assert_eq!(parse_line("3.5", 10), Err(ParseError::NotANumber));
    }

    #[test]
    fn test_commands_case_insensitive() {
        assert_eq!(parse_line("q", 10), Ok(InputEvent::Quit));
        assert_eq!(parse_line("Q", 10), Ok(InputEvent::Quit));
        assert_eq!(parse_line("d", 10), Ok(InputEvent::ShowScore));
        assert_eq!(parse_line("D\n", 10), Ok(InputEvent::ShowScore));
    }

    #[test]
    fn test_reprompt_messages_name_the_bounds() {
        let msg = ParseError::OutOfRange { max: 6 }.to_string();
        assert!(msg.contains("between 0 and 6"));
    }
}
