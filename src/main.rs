use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use rpsls::{GameSession, GameSettings, Shell};

/// Rock, Paper, Scissors, Lizard, Spock in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON rules file, e.g. {"Rock": [{"Scissors": "Crushes Scissors"}], ...}
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Seed for the computer's picks
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between countdown steps
    #[arg(long, value_name = "MS", default_value_t = 400)]
    countdown_ms: u64,

    /// Keep previous rounds on screen
    #[arg(long)]
    no_clear: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn settings(&self) -> GameSettings {
        let mut settings = GameSettings::new().with_countdown_ms(self.countdown_ms);
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(path) = &self.rules {
            settings = settings.with_rules_path(path);
        }
        if self.no_clear {
            settings = settings.without_clear();
        }
        settings
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    let settings = args.settings();
    let session = GameSession::from_settings(&settings).context("failed to set up the game")?;

    let stdin = io::stdin();
    let mut shell = Shell::new(session, &settings, stdin.lock(), io::stdout());
    shell.run().context("terminal i/o failed")?;
    Ok(())
}
