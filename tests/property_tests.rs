//! Property tests for schema construction, lookups and scoring.

use proptest::prelude::*;

use rpsls::core::{ConfigError, Contestants, RulesConfig};
use rpsls::rules::{resolve_round, Schema};
use rpsls::score::Scoreboard;

/// Cyclic "beats the next k" configuration over `n` generated names.
///
/// With odd `n` and `k = (n - 1) / 2` every pair has exactly one winner.
fn cyclic_config(n: usize) -> RulesConfig {
    let names: Vec<String> = (0..n).map(|i| format!("C{}", i)).collect();
    let k = n / 2;
    names.iter().enumerate().fold(RulesConfig::new(), |config, (i, name)| {
        let wins: Vec<(String, String)> = (1..=k)
            .map(|step| {
                let loser = &names[(i + step) % n];
                (loser.clone(), format!("{} over {}", name, loser))
            })
            .collect();
        config.with_choice(name.clone(), wins)
    })
}

proptest! {
    #[test]
    fn odd_configs_build(half in 0usize..8) {
        let n = half * 2 + 1;
        let config = cyclic_config(n);
        let schema = Schema::new(&config).unwrap();
        prop_assert_eq!(schema.rule_names().len(), config.len());
        prop_assert!(schema.check_consistency().is_ok());
    }

    #[test]
    fn even_configs_fail(half in 0usize..8) {
        let n = half * 2;
        let err = Schema::new(&cyclic_config(n)).unwrap_err();
        let is_even_count = matches!(err, ConfigError::EvenRuleCount { .. });
        prop_assert!(is_even_count);
        prop_assert!(err.to_string().contains("odd"));
    }

    #[test]
    fn configured_wins_and_misses(half in 1usize..6) {
        let n = half * 2 + 1;
        let config = cyclic_config(n);
        let schema = Schema::new(&config).unwrap();

        for (name, entries) in config.iter() {
            let rule = schema.rule(name).unwrap();
            let configured: Vec<&str> = entries
                .iter()
                .flat_map(|entry| entry.keys().map(String::as_str))
                .collect();

            for other in schema.rule_names() {
                if configured.contains(&other.as_str()) {
                    prop_assert!(rule.beats(other));
                    prop_assert_eq!(rule.win_reason(other), format!("{} over {}", name, other));
                } else {
                    prop_assert!(!rule.beats(other));
                    prop_assert_eq!(rule.win_reason(other), "");
                }
            }
        }
    }

    #[test]
    fn self_play_is_one_tie(half in 0usize..6, pick in any::<prop::sample::Index>()) {
        let schema = Schema::new(&cyclic_config(half * 2 + 1)).unwrap();
        let contestants = Contestants::default();
        let mut scoreboard = Scoreboard::new(contestants.ids());

        let choice = pick.get(schema.rule_names()).clone();
        resolve_round(&schema, &mut scoreboard, &contestants, &choice, &choice).unwrap();

        prop_assert_eq!(scoreboard.ties(), 1);
        prop_assert_eq!(scoreboard.score("player"), Some(0));
        prop_assert_eq!(scoreboard.score("computer"), Some(0));
    }

    #[test]
    fn distinct_rounds_have_one_winner(
        half in 1usize..6,
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let schema = Schema::new(&cyclic_config(half * 2 + 1)).unwrap();
        let names = schema.rule_names();
        let (a, b) = (a.get(names).clone(), b.get(names).clone());
        prop_assume!(a != b);

        let contestants = Contestants::default();
        let mut forward = Scoreboard::new(contestants.ids());
        let mut backward = Scoreboard::new(contestants.ids());

        let fw = resolve_round(&schema, &mut forward, &contestants, &a, &b).unwrap();
        let bw = resolve_round(&schema, &mut backward, &contestants, &b, &a).unwrap();

        prop_assert_eq!(forward.ties() + backward.ties(), 0);
        prop_assert_eq!(fw.verdict.winner().map(|s| s.other()), bw.verdict.winner());
        prop_assert_ne!(forward.score("player"), backward.score("player"));
    }

    #[test]
    fn reset_always_zeroes(ops in prop::collection::vec(0u8..4, 0..64)) {
        let mut scoreboard = Scoreboard::new(["player", "computer"]);
        for op in ops {
            match op {
                0 => scoreboard.add_win("player"),
                1 => scoreboard.add_win("computer"),
                2 => scoreboard.add_win("nobody"),
                _ => scoreboard.add_tie(),
            }
        }

        scoreboard.reset();

        prop_assert_eq!(
            scoreboard.display_scores(),
            "Player: 0 pts | Computer: 0 pts | Ties: 0"
        );
    }

    #[test]
    fn unknown_wins_never_add_keys(id in "[a-z]{1,12}") {
        prop_assume!(id != "player" && id != "computer");
        let mut scoreboard = Scoreboard::new(["player", "computer"]);
        scoreboard.add_win(&id);
        prop_assert_eq!(scoreboard.contestants().count(), 2);
        prop_assert_eq!(scoreboard.score(&id), None);
        prop_assert_eq!(scoreboard.rounds(), 0);
    }
}
