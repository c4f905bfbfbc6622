//! The interactive roll-collection loop.
//!
//! Drives a [`Game`] from a line-oriented input source: one prompt per roll,
//! with `D` rendering the score table and `Q` (or EOF) ending the session.
//! Frames 1-9 skip the second prompt on a strike; the tenth frame runs its
//! own bonus-roll flow. Prompting stops as soon as the tenth frame is
//! complete, followed by a final render.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::Game;
use crate::input::{parse_line, InputEvent};
use crate::term::ConsoleRenderer;
use crate::types::{RollSlot, LAST_FRAME, PIN_COUNT};

const FIRST_PROMPT: &str = "Enter pins knocked down in first roll: ";
const SECOND_PROMPT: &str = "Enter pins knocked down in second roll: ";
const THIRD_PROMPT: &str = "Enter pins knocked down in third roll: ";

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All ten frames complete; carries the final total.
    Finished(u32),
    /// User quit (or stdin closed) before the game finished.
    Quit,
}

/// Run one game to completion or quit.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    renderer: &mut ConsoleRenderer<W>,
) -> Result<Outcome> {
    let mut game = Game::new();
    renderer.banner()?;

    while !game.is_complete() {
        let number = game.begin_frame()?;
        renderer.frame_header(number)?;

        let Some(first) = prompt_roll(&mut input, renderer, &mut game, RollSlot::First, FIRST_PROMPT)?
        else {
            renderer.terminated()?;
            return Ok(Outcome::Quit);
        };
        game.record_roll(RollSlot::First, first)?;

        if number == LAST_FRAME {
            if !tenth_frame(&mut input, renderer, &mut game, first)? {
                renderer.terminated()?;
                return Ok(Outcome::Quit);
            }
            continue;
        }

        if first == PIN_COUNT {
            renderer.strike()?;
            continue;
        }

        let Some(second) =
            prompt_roll(&mut input, renderer, &mut game, RollSlot::Second, SECOND_PROMPT)?
        else {
            renderer.terminated()?;
            return Ok(Outcome::Quit);
        };
        game.record_roll(RollSlot::Second, second)?;

        if first + second == PIN_COUNT {
            renderer.spare()?;
        }
    }

    let table = game.score_table();
    renderer.score_table(&table)?;
    renderer.game_over(game.total_score())?;
    Ok(Outcome::Finished(game.total_score()))
}

/// Tenth-frame flow, after its first roll is recorded. A strike earns two
/// bonus rolls, a spare one. Returns `false` on quit.
fn tenth_frame<R: BufRead, W: Write>(
    input: &mut R,
    renderer: &mut ConsoleRenderer<W>,
    game: &mut Game,
    first: u8,
) -> Result<bool> {
    let Some(second) = prompt_roll(input, renderer, game, RollSlot::Second, SECOND_PROMPT)? else {
        return Ok(false);
    };
    game.record_roll(RollSlot::Second, second)?;

    if first == PIN_COUNT || first + second == PIN_COUNT {
        let Some(third) = prompt_roll(input, renderer, game, RollSlot::Third, THIRD_PROMPT)? else {
            return Ok(false);
        };
        game.record_roll(RollSlot::Third, third)?;
    }
    Ok(true)
}

/// Prompt until a valid pin count arrives. `Ok(None)` means quit or EOF.
/// `D` renders the score table and re-prompts; invalid input re-prompts with
/// the validation message.
fn prompt_roll<R: BufRead, W: Write>(
    input: &mut R,
    renderer: &mut ConsoleRenderer<W>,
    game: &mut Game,
    slot: RollSlot,
    prompt: &str,
) -> Result<Option<u8>> {
    let max = game.pins_available(slot);
    loop {
        renderer.prompt(prompt)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed mid-game
            return Ok(None);
        }
        match parse_line(&line, max) {
            Ok(InputEvent::Pins(pins)) => return Ok(Some(pins)),
            Ok(InputEvent::ShowScore) => {
                let table = game.score_table();
                renderer.score_table(&table)?;
            }
            Ok(InputEvent::Quit) => return Ok(None),
            Err(err) => renderer.invalid(&err.to_string())?,
        }
    }
}
