//! Rules: which choice beats which, and how a round is decided.
//!
//! - `Rule`: one choice's wins and their justifications
//! - `Schema`: the validated set of rules built from a `RulesConfig`
//! - `judge` / `resolve_round`: decide a round and record it
//!
//! Rules are pure data. The only game logic is in `engine`.

pub mod engine;
pub mod rule;
pub mod schema;

pub use engine::{judge, resolve_round, RoundOutcome, Verdict};
pub use rule::Rule;
pub use schema::Schema;
