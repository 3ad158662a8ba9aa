//! Session orchestration: the state a game runs on and the shell that
//! drives it.
//!
//! - `GameSession`: schema + scoreboard + contestants + RNG, passed explicitly
//! - `Command`: one line of shell input
//! - `Shell`: the prompt loop (start, score, rules, reset, quit, help)
//! - `display`: countdown, screen clearing, round summaries

pub mod command;
pub mod display;
pub mod shell;
pub mod state;

pub use command::Command;
pub use shell::{Flow, Shell};
pub use state::GameSession;
