//! Round resolution.
//!
//! `judge` decides a round from two choices and a schema. It holds no
//! state and does no randomness; the opponent's choice is injected by the
//! caller. `resolve_round` judges and then applies exactly one scoreboard
//! update.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::contestant::{Contestants, Side};
use crate::core::error::GameError;
use crate::score::Scoreboard;

use super::schema::Schema;

/// Decision for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Both sides picked the same choice.
    Tie,
    /// One side won, with the winning rule's justification.
    Win { winner: Side, reason: String },
}

impl Verdict {
    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Tie => None,
            Verdict::Win { winner, .. } => Some(*winner),
        }
    }

    /// Check if the round was drawn.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, Verdict::Tie)
    }

    /// The justification, or `""` for a tie.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Verdict::Tie => "",
            Verdict::Win { reason, .. } => reason.as_str(),
        }
    }
}

/// A resolved round: both choices and the verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_choice: String,
    pub opponent_choice: String,
    pub verdict: Verdict,
}

impl RoundOutcome {
    /// The choice made by a side.
    #[must_use]
    pub fn choice(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player_choice,
            Side::Opponent => &self.opponent_choice,
        }
    }

    /// The winning choice, if any.
    #[must_use]
    pub fn winning_choice(&self) -> Option<&str> {
        self.verdict.winner().map(|side| self.choice(side))
    }

    /// Short description of what happened, e.g. "Rock crushes Scissors".
    #[must_use]
    pub fn headline(&self) -> String {
        match &self.verdict {
            Verdict::Tie => format!("Both chose {}", self.player_choice),
            Verdict::Win { winner, reason } => {
                let winning = self.choice(*winner);
                let losing = self.choice(winner.other());
                if reason.is_empty() {
                    format!("{} beats {}", winning, losing)
                } else {
                    format!("{} {}", winning, lowercase_first(reason))
                }
            }
        }
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decide a round between the player's choice `a` and the opponent's `b`.
///
/// - `a == b`: tie
/// - `a` beats `b`: player wins with `a`'s reason against `b`
/// - otherwise: opponent wins with `b`'s reason against `a`
///
/// The last branch relies on every distinct pair having exactly one
/// winner, which `Schema::check_consistency` guarantees. Under a lenient
/// schema the reason may be empty.
pub fn judge(schema: &Schema, a: &str, b: &str) -> Result<Verdict, GameError> {
    let rule_a = schema
        .rule(a)
        .ok_or_else(|| GameError::UnknownChoice(a.to_owned()))?;
    let rule_b = schema
        .rule(b)
        .ok_or_else(|| GameError::UnknownChoice(b.to_owned()))?;

    let verdict = if a == b {
        Verdict::Tie
    } else if rule_a.beats(b) {
        Verdict::Win {
            winner: Side::Player,
            reason: rule_a.win_reason(b).to_owned(),
        }
    } else {
        Verdict::Win {
            winner: Side::Opponent,
            reason: rule_b.win_reason(a).to_owned(),
        }
    };

    Ok(verdict)
}

/// Judge a round and record it on the scoreboard.
///
/// Exactly one of `add_tie` or `add_win` is applied.
pub fn resolve_round(
    schema: &Schema,
    scoreboard: &mut Scoreboard,
    contestants: &Contestants,
    a: &str,
    b: &str,
) -> Result<RoundOutcome, GameError> {
    let verdict = judge(schema, a, b)?;

    match verdict.winner() {
        None => scoreboard.add_tie(),
        Some(side) => scoreboard.add_win(contestants.id(side)),
    }

    debug!("round {} vs {}: {:?}", a, b, verdict);
    Ok(RoundOutcome {
        player_choice: a.to_owned(),
        opponent_choice: b.to_owned(),
        verdict,
    })
}
