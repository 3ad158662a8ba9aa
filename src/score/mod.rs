//! Score keeping across rounds.

pub mod scoreboard;

pub use scoreboard::{display_name, Scoreboard};
