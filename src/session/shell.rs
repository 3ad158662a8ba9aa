//! Interactive command loop.
//!
//! `Shell` is generic over its input and output so the whole loop runs
//! against in-memory buffers in tests and against stdin/stdout in the
//! binary.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::error::ErrorKind;
use colored::Colorize;
use log::debug;

use crate::core::config::GameSettings;

use super::command::Command;
use super::display::{choice_menu, clear_screen, countdown, result_line, reveal_line};
use super::state::GameSession;

pub const INTRO: &str = "Welcome to Rock, Paper, Scissors, Lizard, Spock!\n\nType 'start' to play the game or 'help' to list the commands.\n";
pub const PROMPT: &str = ">>> ";
pub const CHOICE_PROMPT: &str = "Your choice (name or number, 'back' to return): ";
pub const FAREWELL: &str = "Thanks for playing!";
pub const RESET_DONE: &str = "Scores have been reset.";

/// Whether the command loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented game shell.
pub struct Shell<R, W> {
    session: GameSession,
    input: R,
    output: W,
    delay: Duration,
    clear: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around a session, taking presentation knobs from
    /// the settings.
    pub fn new(session: GameSession, settings: &GameSettings, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            delay: settings.countdown_delay(),
            clear: settings.clear_screen,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consume the shell, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", INTRO)?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                writeln!(self.output, "{}", FAREWELL)?;
                return Ok(());
            };
            if line.is_empty() {
                continue;
            }

            let flow = match Command::parse_line(&line) {
                Ok(command) => self.dispatch(command)?,
                Err(err) => {
                    self.report_parse_error(&line, &err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one command.
    pub fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        debug!("command {:?}", command);
        match command {
            Command::Start => self.play()?,
            Command::Score => writeln!(self.output, "{}", self.session.scoreboard())?,
            Command::Rules => writeln!(self.output, "{}", self.session.rules_text())?,
            Command::Reset => {
                self.session.reset();
                writeln!(self.output, "{}", RESET_DONE)?;
            }
            Command::Quit => {
                writeln!(self.output, "{}", FAREWELL)?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Play rounds until the user types `back` or input ends.
    fn play(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", choice_menu(self.session.schema().rule_names()))?;
            write!(self.output, "{}", CHOICE_PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("back") {
                return Ok(());
            }

            let outcome = match self.session.play_round(&line) {
                Ok(outcome) => outcome,
                Err(err) => {
                    writeln!(self.output, "{}", err.to_string().red())?;
                    continue;
                }
            };

            countdown(&mut self.output, self.session.schema().rule_names(), self.delay)?;
            if self.clear {
                clear_screen(&mut self.output)?;
            }
            let contestants = self.session.contestants();
            writeln!(self.output, "{}", reveal_line(&outcome, contestants))?;
            writeln!(self.output, "{}", result_line(&outcome, contestants))?;
            writeln!(self.output, "{}", self.session.scoreboard())?;
            writeln!(self.output)?;
        }
    }

    fn report_parse_error(&mut self, line: &str, err: &clap::Error) -> io::Result<()> {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                write!(self.output, "{}", err)
            }
            _ => writeln!(
                self.output,
                "Unknown command: {}. Type 'help' to list the commands.",
                line
            ),
        }
    }

    /// Next trimmed line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
