//! Contestant identification.
//!
//! ## Side
//!
//! Which side of a round a choice came from. Exactly two sides exist.
//!
//! ## Contestants
//!
//! Maps each side to the string id registered on the scoreboard.

use serde::{Deserialize, Serialize};

/// One side of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The contestant whose choice is passed first (the human).
    Player,
    /// The contestant whose choice is passed second (the computer).
    Opponent,
}

impl Side {
    /// The opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// The two registered contestant ids.
///
/// ```
/// use rpsls::core::{Contestants, Side};
///
/// let contestants = Contestants::default();
/// assert_eq!(contestants.id(Side::Player), "player");
/// assert_eq!(contestants.id(Side::Opponent), "computer");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contestants {
    player: String,
    opponent: String,
}

impl Contestants {
    /// Create contestants from two ids.
    pub fn new(player: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            opponent: opponent.into(),
        }
    }

    /// Scoreboard id for a side.
    #[must_use]
    pub fn id(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Both ids in registration order (player first).
    #[must_use]
    pub fn ids(&self) -> [&str; 2] {
        [&self.player, &self.opponent]
    }
}

impl Default for Contestants {
    fn default() -> Self {
        Self::new("player", "computer")
    }
}
