//! Error types.
//!
//! Configuration problems are fatal at startup. Lookup misses on rules
//! (`beats`, `win_reason`) are not errors and never show up here.

use thiserror::Error;

/// A rules configuration that cannot produce a playable schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Number of rules must be odd to ensure a fair game!")]
    EvenRuleCount { count: usize },

    #[error("rule {choice} claims a win against unknown choice {opponent}")]
    UnknownOpponent { choice: String, opponent: String },

    #[error("rule {choice} claims a win against itself")]
    SelfMatch { choice: String },

    #[error("{a} and {b} are each configured to beat the other")]
    Contradiction { a: String, b: String },

    #[error("neither {a} nor {b} is configured to beat the other")]
    Undecided { a: String, b: String },

    #[error("player and opponent share the id {id}")]
    DuplicateContestant { id: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid rules json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while playing rounds.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown choice: {0}")]
    UnknownChoice(String),
}
