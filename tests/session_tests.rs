//! End-to-end session tests: scripted games over an in-memory reader with
//! output captured from the renderer.

use std::io::Cursor;

use tenpin::session::{run, Outcome};
use tenpin::term::ConsoleRenderer;

/// Run a session over scripted input lines, returning the outcome and the
/// rendered output (ANSI sequences included).
fn play(script: &str) -> (Outcome, String) {
    let mut renderer = ConsoleRenderer::new(Vec::new());
    let outcome = run(Cursor::new(script.to_string()), &mut renderer).unwrap();
    let output = String::from_utf8(renderer.into_inner()).unwrap();
    (outcome, output)
}

#[test]
fn test_full_open_game() {
    let script = "3\n4\n".repeat(10);
    let (outcome, output) = play(&script);
    assert_eq!(outcome, Outcome::Finished(70));
    assert!(output.contains("Happy Bowling!"));
    assert!(output.contains("Frame 10:"));
    assert!(output.contains("Game Over! Your total score is: 70"));
}

#[test]
fn test_perfect_game() {
    let script = "10\n".repeat(12);
    let (outcome, output) = play(&script);
    assert_eq!(outcome, Outcome::Finished(300));
    // Nine strike callouts (the tenth frame announces nothing).
    assert_eq!(output.matches("Strike!").count(), 9);
    assert!(output.contains("Enter pins knocked down in third roll: "));
    assert!(output.contains("Game Over! Your total score is: 300"));
}

#[test]
fn test_spare_is_announced() {
    let (outcome, output) = play("6\n4\nq\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("Spare!"));
    assert!(output.contains("Game Terminated."));
}

#[test]
fn test_quit_immediately() {
    let (outcome, output) = play("q\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("Game Terminated."));
    assert!(!output.contains("Game Over!"));
}

#[test]
fn test_display_mid_game_shows_pending_bonus() {
    // Strike in frame 1, then ask for the score at frame 2's prompt.
    let (outcome, output) = play("10\nd\nq\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("=== Current Score ==="));
    assert!(output.contains("  First Roll: X"));
    assert!(output.contains("  Running Total: - (Waiting Bonus)"));
}

#[test]
fn test_invalid_input_reprompts_without_advancing() {
    // 11 and garbage are rejected at the first prompt; 4 lands. The second
    // prompt then rejects 7 (only 6 pins stand) before accepting 6.
    let (outcome, output) = play("11\noops\n4\n7\n6\nq\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("between 0 and 10"));
    assert!(output.contains("enter a valid integer"));
    assert!(output.contains("between 0 and 6"));
    assert!(output.contains("Spare!"));
    assert_eq!(output.matches("Frame 1:").count(), 1);
}

#[test]
fn test_eof_quits_cleanly() {
    let (outcome, output) = play("5\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(output.contains("Game Terminated."));
}

#[test]
fn test_tenth_frame_spare_takes_one_bonus_roll() {
    let mut script = "0\n0\n".repeat(9);
    script.push_str("5\n5\n8\n");
    let (outcome, output) = play(&script);
    assert_eq!(outcome, Outcome::Finished(18));
    assert!(output.contains("  Third Roll: 8"));
    assert!(output.contains("Game Over! Your total score is: 18"));
}

#[test]
fn test_tenth_frame_strike_takes_two_bonus_rolls() {
    let mut script = "0\n0\n".repeat(9);
    script.push_str("10\n7\n2\n");
    let (outcome, output) = play(&script);
    assert_eq!(outcome, Outcome::Finished(19));
    assert!(output.contains("Enter pins knocked down in third roll: "));
}

#[test]
fn test_final_render_includes_score_table() {
    let script = "3\n4\n".repeat(10);
    let (_, output) = play(&script);
    assert!(output.contains("=== Current Score ==="));
    assert!(output.contains("  Running Total: 70"));
}
