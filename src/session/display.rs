//! Presentation helpers for the shell: countdown, screen clearing and
//! round summaries.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use crate::core::contestant::{Contestants, Side};
use crate::rules::RoundOutcome;
use crate::score::display_name;

/// ANSI sequence: clear the screen and move the cursor home.
pub const CLEAR: &str = "\x1B[2J\x1B[1;1H";

/// Clear the terminal.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", CLEAR)?;
    out.flush()
}

/// Print every choice name, one step per `delay`, ending with `!`.
///
/// "Rock... Paper... Scissors... Lizard... Spock!"
pub fn countdown<W: Write>(out: &mut W, names: &[String], delay: Duration) -> io::Result<()> {
    for (i, name) in names.iter().enumerate() {
        if i + 1 == names.len() {
            writeln!(out, "{}!", name.bold())?;
        } else {
            write!(out, "{}... ", name)?;
        }
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

/// Numbered choice list, e.g. "1) Rock  2) Paper  3) Scissors".
#[must_use]
pub fn choice_menu(names: &[String]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}) {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Who won, from the human's point of view.
#[must_use]
pub fn result_line(outcome: &RoundOutcome, contestants: &Contestants) -> String {
    match outcome.verdict.winner() {
        None => format!("{}. {}", outcome.headline(), "It's a tie!".yellow().bold()),
        Some(Side::Player) => format!("{}. {}", outcome.headline(), "You win!".green().bold()),
        Some(Side::Opponent) => format!(
            "{}. {}",
            outcome.headline(),
            format!("{} wins!", display_name(contestants.id(Side::Opponent)))
                .red()
                .bold()
        ),
    }
}

/// Both choices side by side.
#[must_use]
pub fn reveal_line(outcome: &RoundOutcome, contestants: &Contestants) -> String {
    format!(
        "You chose {}. {} chose {}.",
        outcome.player_choice.cyan(),
        display_name(contestants.id(Side::Opponent)),
        outcome.opponent_choice.magenta()
    )
}
