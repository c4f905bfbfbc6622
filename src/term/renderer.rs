//! ConsoleRenderer: styled line-oriented output for the game session.
//!
//! Unlike a full-screen TUI there is no raw mode or alternate screen here;
//! the program is a prompt/response loop, so output is queued crossterm
//! commands flushed per call. Generic over the writer so tests can capture
//! the byte stream.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::ScoreTable;
use crate::term::score_view::{format_score_table, TABLE_FOOTER, TABLE_HEADER};

pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return the writer (used by tests to inspect
    /// captured output).
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out.queue(Print("Happy Bowling!\n"))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(Print(
            "Enter 'Q' at any time to quit the game or 'D' to display the score at any time.\n",
        ))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn frame_header(&mut self, number: u8) -> Result<()> {
        self.out.queue(Print(format!("\nFrame {number}:\n")))?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a prompt without a trailing newline; the cursor waits for input.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.out.queue(Print(text))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn strike(&mut self) -> Result<()> {
        self.callout("Strike!", Color::Green)
    }

    pub fn spare(&mut self) -> Result<()> {
        self.callout("Spare!", Color::Cyan)
    }

    fn callout(&mut self, text: &str, color: Color) -> Result<()> {
        self.out.queue(SetForegroundColor(color))?;
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out.queue(Print(text))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Rejection message for input that failed validation.
    pub fn invalid(&mut self, message: &str) -> Result<()> {
        self.out.queue(SetForegroundColor(Color::Yellow))?;
        self.out.queue(Print(message))?;
        self.out.queue(ResetColor)?;
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn score_table(&mut self, table: &ScoreTable) -> Result<()> {
        self.out.queue(Print("\n"))?;
        for line in format_score_table(table) {
            if line == TABLE_HEADER || line == TABLE_FOOTER {
                self.out.queue(SetAttribute(Attribute::Bold))?;
                self.out.queue(Print(&line))?;
                self.out.queue(SetAttribute(Attribute::Reset))?;
            } else {
                self.out.queue(Print(&line))?;
            }
            self.out.queue(Print("\n"))?;
        }
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn game_over(&mut self, total: u32) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out
            .queue(Print(format!("\nGame Over! Your total score is: {total}\n")))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn terminated(&mut self) -> Result<()> {
        self.out.queue(Print("Game Terminated.\n"))?;
        self.out.flush()?;
        Ok(())
    }
}
