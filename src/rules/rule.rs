//! A single choice and the choices it defeats.

use serde::{Deserialize, Serialize};

use crate::core::config::{FxIndexMap, WinEntry};

/// Win relationships owned by one choice.
///
/// `wins_against` maps each defeated opponent to the justification shown
/// to players. Insertion order is kept for rendering; writing an existing
/// opponent again replaces its reason in place.
///
/// A rule knows nothing about its siblings: opponents are not checked
/// against any choice set here.
///
/// ## Example
///
/// ```
/// use rpsls::rules::Rule;
///
/// let rock = Rule::new("Rock")
///     .with_win("Scissors", "Crushes Scissors")
///     .with_win("Lizard", "Crushes Lizard");
///
/// assert!(rock.beats("Scissors"));
/// assert!(!rock.beats("Paper"));
/// assert_eq!(rock.win_reason("Lizard"), "Crushes Lizard");
/// assert_eq!(rock.win_reason("Paper"), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    name: String,
    wins_against: FxIndexMap<String, String>,
}

impl Rule {
    /// Create a rule that beats nothing yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wins_against: FxIndexMap::default(),
        }
    }

    /// Create a rule from configured win entries, applied in order.
    #[must_use]
    pub fn from_entries(name: impl Into<String>, entries: &[WinEntry]) -> Self {
        let mut rule = Self::new(name);
        for (opponent, reason) in entries.iter().flatten() {
            rule.add_win_condition(opponent.clone(), reason.clone());
        }
        rule
    }

    /// Add a win condition (builder pattern).
    #[must_use]
    pub fn with_win(mut self, opponent: impl Into<String>, reason: impl Into<String>) -> Self {
        self.add_win_condition(opponent, reason);
        self
    }

    /// Insert or overwrite the win against `opponent`.
    pub fn add_win_condition(&mut self, opponent: impl Into<String>, reason: impl Into<String>) {
        self.wins_against.insert(opponent.into(), reason.into());
    }

    /// The choice this rule belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every defeated opponent and its reason, in insertion order.
    #[must_use]
    pub fn wins_against(&self) -> &FxIndexMap<String, String> {
        &self.wins_against
    }

    /// Check if this rule beats `opponent`.
    #[must_use]
    pub fn beats(&self, opponent: &str) -> bool {
        self.wins_against.contains_key(opponent)
    }

    /// The reason this rule beats `opponent`, or `""` if it doesn't.
    #[must_use]
    pub fn win_reason(&self, opponent: &str) -> &str {
        self.wins_against
            .get(opponent)
            .map_or("", String::as_str)
    }

    /// Defeated opponents in insertion order.
    pub fn opponents(&self) -> impl Iterator<Item = &str> {
        self.wins_against.keys().map(String::as_str)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule: {} | Wins against: ", self.name)?;
        for (i, (opponent, reason)) in self.wins_against.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", opponent, reason)?;
        }
        Ok(())
    }
}
