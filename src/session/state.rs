//! Explicit per-game state.
//!
//! A `GameSession` owns one schema, one scoreboard, the contestant ids and
//! the RNG used for opponent picks. Nothing is global: independent
//! sessions can run side by side and tests build their own.

use log::info;

use crate::core::config::{GameSettings, RulesConfig};
use crate::core::contestant::Contestants;
use crate::core::error::{ConfigError, GameError};
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::{resolve_round, RoundOutcome, Schema};
use crate::score::Scoreboard;

/// One game session against a random opponent.
#[derive(Clone, Debug)]
pub struct GameSession {
    schema: Schema,
    scoreboard: Scoreboard,
    contestants: Contestants,
    rng: GameRng,
}

impl GameSession {
    /// Build a session from settings and a rules configuration.
    ///
    /// The schema is built strictly: odd count and pairwise consistency.
    /// Player and opponent must have distinct ids.
    pub fn new(settings: &GameSettings, config: &RulesConfig) -> Result<Self, ConfigError> {
        if settings.player_id == settings.opponent_id {
            return Err(ConfigError::DuplicateContestant {
                id: settings.player_id.clone(),
            });
        }
        let schema = Schema::strict(config)?;
        let contestants = Contestants::new(&settings.player_id, &settings.opponent_id);
        let scoreboard = Scoreboard::new(contestants.ids());
        let rng = match settings.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        info!(
            "session started: {} choices, seed {}",
            schema.rule_names().len(),
            rng.seed()
        );
        Ok(Self {
            schema,
            scoreboard,
            contestants,
            rng,
        })
    }

    /// Build a session, loading rules from wherever the settings point.
    pub fn from_settings(settings: &GameSettings) -> Result<Self, ConfigError> {
        let config = settings.rules_config()?;
        Self::new(settings, &config)
    }

    /// Reference rules against the computer with a fixed seed.
    pub fn reference(seed: u64) -> Result<Self, ConfigError> {
        Self::new(
            &GameSettings::default().with_seed(seed),
            &RulesConfig::reference(),
        )
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[must_use]
    pub fn contestants(&self) -> &Contestants {
        &self.contestants
    }

    /// Checkpoint of the opponent RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resolve user input to a canonical choice name.
    ///
    /// Accepts a choice name in any case, or its 1-based position in
    /// `Schema::rule_names`.
    pub fn parse_choice(&self, input: &str) -> Result<&str, GameError> {
        let input = input.trim();
        if let Some(name) = self.schema.find(input) {
            return Ok(name);
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.schema.rule_names().get(i))
            .map(String::as_str)
            .ok_or_else(|| GameError::UnknownChoice(input.to_owned()))
    }

    /// Draw the opponent's choice uniformly.
    pub fn pick_opponent(&mut self) -> String {
        let index = self.rng.gen_range_usize(0..self.schema.rule_names().len());
        self.schema.rule_names()[index].clone()
    }

    /// Play a round: the user's input against a random opponent choice.
    pub fn play_round(&mut self, input: &str) -> Result<RoundOutcome, GameError> {
        let choice = self.parse_choice(input)?.to_owned();
        let opponent = self.pick_opponent();
        self.resolve(&choice, &opponent)
    }

    /// Play a round against a given opponent choice.
    pub fn play_against(&mut self, input: &str, opponent: &str) -> Result<RoundOutcome, GameError> {
        let choice = self.parse_choice(input)?.to_owned();
        let opponent = self.parse_choice(opponent)?.to_owned();
        self.resolve(&choice, &opponent)
    }

    fn resolve(&mut self, choice: &str, opponent: &str) -> Result<RoundOutcome, GameError> {
        resolve_round(
            &self.schema,
            &mut self.scoreboard,
            &self.contestants,
            choice,
            opponent,
        )
    }

    /// Zero the scoreboard.
    pub fn reset(&mut self) {
        self.scoreboard.reset();
    }

    /// "Rules:" followed by one line per rule.
    #[must_use]
    pub fn rules_text(&self) -> String {
        let mut text = String::from("Rules:");
        for rule in self.schema.rules().values() {
            text.push_str("\n- ");
            text.push_str(&rule.to_string());
        }
        text
    }
}
