//! # rpsls
//!
//! Rock, Paper, Scissors, Lizard, Spock as a data-driven rules engine.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: No choice is hardcoded. A `RulesConfig` names
//!    every choice and who it beats, with a reason for each win.
//!
//! 2. **Fair By Construction**: A `Schema` only exists for an odd number
//!    of choices. Sessions also require every pair of choices to have
//!    exactly one winner.
//!
//! 3. **No Globals**: All mutable state lives in a `GameSession` passed
//!    explicitly. Round resolution is a pure function plus one
//!    scoreboard update.
//!
//! ## Modules
//!
//! - `core`: configuration, contestants, RNG, errors
//! - `rules`: rules, schema, round resolution
//! - `score`: scoreboard
//! - `session`: session state and the interactive shell

pub mod core;
pub mod rules;
pub mod score;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Contestants, GameError, GameRng, GameRngState, GameSettings, RulesConfig, Side,
};

pub use crate::rules::{judge, resolve_round, RoundOutcome, Rule, Schema, Verdict};

pub use crate::score::Scoreboard;

pub use crate::session::{Command, GameSession, Shell};
