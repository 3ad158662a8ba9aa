//! Cumulative win and tie counters for one session.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::FxIndexMap;

/// Win counts per contestant plus a tie counter.
///
/// The contestant set is fixed at construction. Wins recorded for an
/// id outside that set are ignored, so a caller typo never adds a key
/// or interrupts a session.
///
/// ## Example
///
/// ```
/// use rpsls::score::Scoreboard;
///
/// let mut scoreboard = Scoreboard::new(["player", "computer"]);
/// scoreboard.add_win("player");
/// scoreboard.add_tie();
///
/// assert_eq!(
///     scoreboard.display_scores(),
///     "Player: 1 pts | Computer: 0 pts | Ties: 1"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: FxIndexMap<String, u32>,
    ties: u32,
}

impl Scoreboard {
    /// Separator between entries in `display_scores`.
    pub const SEPARATOR: &'static str = " | ";

    /// Create a scoreboard for a fixed, non-empty contestant list.
    ///
    /// Repeated ids collapse into one entry at their first position.
    pub fn new<I, S>(contestants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scores: FxIndexMap<String, u32> = contestants
            .into_iter()
            .map(|id| (id.into(), 0))
            .collect();
        assert!(!scores.is_empty(), "Must have at least 1 contestant");

        Self { scores, ties: 0 }
    }

    /// Record a win. Unknown ids are ignored.
    pub fn add_win(&mut self, contestant: &str) {
        match self.scores.get_mut(contestant) {
            Some(score) => *score += 1,
            None => warn!("ignoring win for unregistered contestant {:?}", contestant),
        }
    }

    /// Record a drawn round.
    pub fn add_tie(&mut self) {
        self.ties += 1;
    }

    /// Zero every count in place. The contestant set is unchanged.
    pub fn reset(&mut self) {
        self.scores.values_mut().for_each(|score| *score = 0);
        self.ties = 0;
        debug!("scoreboard reset");
    }

    /// Wins for a contestant, `None` if not registered.
    #[must_use]
    pub fn score(&self, contestant: &str) -> Option<u32> {
        self.scores.get(contestant).copied()
    }

    /// Number of drawn rounds.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Registered contestant ids in registration order.
    pub fn contestants(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// `(id, wins)` pairs in registration order.
    pub fn scores(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Total rounds recorded (all wins plus ties).
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.scores.values().sum::<u32>() + self.ties
    }

    /// Single-line summary: `"<Name>: <n> pts"` per contestant, then ties.
    ///
    /// Names are capitalized for display only.
    #[must_use]
    pub fn display_scores(&self) -> String {
        self.scores
            .iter()
            .map(|(id, score)| format!("{}: {} pts", display_name(id), score))
            .chain(std::iter::once(format!("Ties: {}", self.ties)))
            .collect::<Vec<_>>()
            .join(Self::SEPARATOR)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_scores())
    }
}

/// How a contestant id is shown to the user: first character uppercased,
/// the rest lowercased.
#[must_use]
pub fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
