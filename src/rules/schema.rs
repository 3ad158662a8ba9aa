//! The validated set of rules for one game.

use log::debug;

use crate::core::config::{FxIndexMap, RulesConfig};
use crate::core::error::ConfigError;

use super::rule::Rule;

/// All rules of a game, built from a `RulesConfig`.
///
/// Construction fails unless the number of choices is odd: with an odd
/// count every choice can beat exactly `(n - 1) / 2` others. A `Schema`
/// is never handed out partially built and is immutable afterwards.
///
/// `Schema::new` checks only the count. `Schema::strict` additionally
/// runs `check_consistency`, which sessions always do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    rule_names: Vec<String>,
    rules: FxIndexMap<String, Rule>,
}

impl Schema {
    /// Build a schema, validating the odd choice count.
    pub fn new(config: &RulesConfig) -> Result<Self, ConfigError> {
        let count = config.len();
        if count % 2 == 0 {
            return Err(ConfigError::EvenRuleCount { count });
        }

        let rule_names: Vec<String> = config.names().map(str::to_owned).collect();
        let rules = config
            .iter()
            .map(|(name, entries)| (name.to_owned(), Rule::from_entries(name, entries)))
            .collect();

        debug!("built schema with {} rules: {}", count, rule_names.join(", "));
        Ok(Self { rule_names, rules })
    }

    /// Build a schema and verify every pair of choices has exactly one winner.
    pub fn strict(config: &RulesConfig) -> Result<Self, ConfigError> {
        let schema = Self::new(config)?;
        schema.check_consistency()?;
        Ok(schema)
    }

    /// Verify the rules describe a complete, contradiction-free game.
    ///
    /// - no rule beats itself
    /// - no rule names an opponent outside the schema
    /// - for every pair of distinct choices exactly one beats the other
    pub fn check_consistency(&self) -> Result<(), ConfigError> {
        for rule in self.rules.values() {
            for opponent in rule.opponents() {
                if opponent == rule.name() {
                    return Err(ConfigError::SelfMatch {
                        choice: rule.name().to_owned(),
                    });
                }
                if !self.contains(opponent) {
                    return Err(ConfigError::UnknownOpponent {
                        choice: rule.name().to_owned(),
                        opponent: opponent.to_owned(),
                    });
                }
            }
        }

        for (i, a) in self.rules.values().enumerate() {
            for b in self.rules.values().skip(i + 1) {
                match (a.beats(b.name()), b.beats(a.name())) {
                    (true, false) | (false, true) => {}
                    (true, true) => {
                        return Err(ConfigError::Contradiction {
                            a: a.name().to_owned(),
                            b: b.name().to_owned(),
                        })
                    }
                    (false, false) => {
                        return Err(ConfigError::Undecided {
                            a: a.name().to_owned(),
                            b: b.name().to_owned(),
                        })
                    }
                }
            }
        }

        Ok(())
    }

    /// Choice names in configuration order. Always an odd count.
    #[must_use]
    pub fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    /// Choice name to rule, in configuration order.
    #[must_use]
    pub fn rules(&self) -> &FxIndexMap<String, Rule> {
        &self.rules
    }

    /// Get the rule for a choice.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Check if a choice exists (exact match).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Find the canonical name for user input, ignoring surrounding
    /// whitespace. An exact match wins over a case-insensitive one.
    #[must_use]
    pub fn find(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if let Some((name, _)) = self.rules.get_key_value(input) {
            return Some(name.as_str());
        }
        self.rule_names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(input))
            .map(String::as_str)
    }
}
