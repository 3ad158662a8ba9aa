//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `RulesConfig`: which choice beats which, and why
//! - `GameSettings`: session knobs (contestants, seed, presentation)
//!
//! The engine never hardcodes choices. Rock/Paper/Scissors/Lizard/Spock is
//! just `RulesConfig::reference()`.

use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Insertion-ordered map with the Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// One entry of a choice's win list: opponent name to reason.
///
/// Usually holds a single pair, mirroring the JSON shape
/// `{"Scissors": "Crushes Scissors"}`.
pub type WinEntry = FxIndexMap<String, String>;

/// Ordered rules configuration: choice name to its ordered win entries.
///
/// Key order is preserved from input. It drives the order of
/// `Schema::rule_names` and the order in which rules are rendered.
///
/// ## Example
///
/// ```
/// use rpsls::core::RulesConfig;
///
/// let config = RulesConfig::new()
///     .with_choice("Rock", [("Scissors", "Crushes Scissors")])
///     .with_choice("Paper", [("Rock", "Covers Rock")])
///     .with_choice("Scissors", [("Paper", "Cuts Paper")]);
///
/// assert_eq!(config.len(), 3);
/// assert_eq!(config.names().collect::<Vec<_>>(), ["Rock", "Paper", "Scissors"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulesConfig {
    choices: FxIndexMap<String, Vec<WinEntry>>,
}

impl RulesConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a choice with its win list (builder pattern).
    ///
    /// Each `(opponent, reason)` pair becomes its own entry, in order.
    /// Adding a name twice replaces the earlier win list.
    #[must_use]
    pub fn with_choice<O, R>(
        mut self,
        name: impl Into<String>,
        wins: impl IntoIterator<Item = (O, R)>,
    ) -> Self
    where
        O: Into<String>,
        R: Into<String>,
    {
        let entries = wins
            .into_iter()
            .map(|(opponent, reason)| {
                let mut entry = WinEntry::default();
                entry.insert(opponent.into(), reason.into());
                entry
            })
            .collect();
        self.choices.insert(name.into(), entries);
        self
    }

    /// The Rock/Paper/Scissors/Lizard/Spock ruleset.
    #[must_use]
    pub fn reference() -> Self {
        Self::new()
            .with_choice(
                "Rock",
                [("Scissors", "Crushes Scissors"), ("Lizard", "Crushes Lizard")],
            )
            .with_choice("Paper", [("Rock", "Covers Rock"), ("Spock", "Disproves Spock")])
            .with_choice(
                "Scissors",
                [("Paper", "Cuts Paper"), ("Lizard", "Decapitates Lizard")],
            )
            .with_choice("Lizard", [("Paper", "Eats Paper"), ("Spock", "Poisons Spock")])
            .with_choice(
                "Spock",
                [("Rock", "Vaporizes Rock"), ("Scissors", "Smashes Scissors")],
            )
    }

    /// Parse a configuration from JSON.
    ///
    /// Expected shape: `{"Rock": [{"Scissors": "Crushes Scissors"}], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Render as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of top-level choices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Check if no choices are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Choice names in configuration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.choices.keys().map(String::as_str)
    }

    /// Iterate over `(choice, win entries)` in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WinEntry])> {
        self.choices
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }
}

/// Session-level settings.
///
/// `Default` gives the reference game against the computer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Scoreboard key for the human side.
    pub player_id: String,

    /// Scoreboard key for the opposing side.
    pub opponent_id: String,

    /// RNG seed for opponent picks. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Delay between countdown steps, in milliseconds.
    pub countdown_ms: u64,

    /// Clear the terminal before revealing each round.
    pub clear_screen: bool,

    /// Rules JSON file. `None` uses the reference rules.
    pub rules_path: Option<PathBuf>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_id: "player".to_string(),
            opponent_id: "computer".to_string(),
            seed: None,
            countdown_ms: 400,
            clear_screen: true,
            rules_path: None,
        }
    }
}

impl GameSettings {
    /// Create default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the countdown step delay.
    #[must_use]
    pub fn with_countdown_ms(mut self, ms: u64) -> Self {
        self.countdown_ms = ms;
        self
    }

    /// Keep the terminal contents between rounds.
    #[must_use]
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Load rules from a JSON file instead of the reference rules.
    #[must_use]
    pub fn with_rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = Some(path.into());
        self
    }

    /// Rename the two contestants.
    #[must_use]
    pub fn with_contestants(
        mut self,
        player: impl Into<String>,
        opponent: impl Into<String>,
    ) -> Self {
        self.player_id = player.into();
        self.opponent_id = opponent.into();
        self
    }

    /// Countdown step delay as a `Duration`.
    #[must_use]
    pub fn countdown_delay(&self) -> Duration {
        Duration::from_millis(self.countdown_ms)
    }

    /// Resolve the rules configuration these settings point at.
    pub fn rules_config(&self) -> Result<RulesConfig, ConfigError> {
        match &self.rules_path {
            Some(path) => RulesConfig::load(path),
            None => Ok(RulesConfig::reference()),
        }
    }
}
