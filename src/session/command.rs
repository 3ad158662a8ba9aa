//! Shell command grammar.
//!
//! Each input line is parsed as one command. clap supplies `help`
//! (with per-command help) for free.

use clap::Parser;

/// Commands accepted at the `>>>` prompt.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "rpsls",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Rock, Paper, Scissors, Lizard, Spock"
)]
pub enum Command {
    #[command(about = "Play rounds against the computer", alias = "play")]
    Start,
    #[command(about = "Display the current score")]
    Score,
    #[command(about = "Display the game rules")]
    Rules,
    #[command(about = "Reset the scoreboard")]
    Reset,
    #[command(about = "Stop playing and exit", alias = "exit")]
    Quit,
}

impl Command {
    /// Parse a single input line.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}
