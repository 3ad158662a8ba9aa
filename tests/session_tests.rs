//! Session and shell integration tests.
//!
//! These tests drive the full prompt loop with scripted input and check
//! what a player would see.

use std::io::Cursor;
use std::path::PathBuf;

use rpsls::core::{ConfigError, GameSettings, RulesConfig, Side};
use rpsls::session::{GameSession, Shell};

fn quiet_settings(seed: u64) -> GameSettings {
    GameSettings::default()
        .with_seed(seed)
        .with_countdown_ms(0)
        .without_clear()
}

/// Run a script through a fresh shell, returning output and final session.
fn play(settings: &GameSettings, script: &str) -> (String, GameSession) {
    let session = GameSession::from_settings(settings).unwrap();
    let mut shell = Shell::new(
        session,
        settings,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    shell.run().unwrap();
    let session = shell.session().clone();
    (String::from_utf8(shell.into_output()).unwrap(), session)
}

fn write_rules(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rpsls-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, json).unwrap();
    path
}

// =============================================================================
// Shell Command Tests
// =============================================================================

/// Test the intro, prompt and farewell.
#[test]
fn test_shell_intro_and_farewell() {
    let (out, _) = play(&quiet_settings(1), "quit\n");
    assert!(out.contains("Welcome to Rock, Paper, Scissors, Lizard, Spock!"));
    assert!(out.contains("Type 'start' to play the game or 'help' to list the commands."));
    assert!(out.contains(">>> "));
    assert!(out.contains("Thanks for playing!"));
}

/// Test the rules listing.
#[test]
fn test_shell_rules() {
    let (out, _) = play(&quiet_settings(1), "rules\nquit\n");
    assert!(out.contains("Rules:\n"));
    assert!(out.contains(
        "- Rule: Paper | Wins against: Rock (Covers Rock), Spock (Disproves Spock)"
    ));
    assert!(out.contains(
        "- Rule: Spock | Wins against: Rock (Vaporizes Rock), Scissors (Smashes Scissors)"
    ));
}

/// Test the score line before any round.
#[test]
fn test_shell_score_starts_at_zero() {
    let (out, _) = play(&quiet_settings(1), "score\nquit\n");
    assert!(out.contains("Player: 0 pts | Computer: 0 pts | Ties: 0"));
}

/// Test help lists every command.
#[test]
fn test_shell_help() {
    let (out, _) = play(&quiet_settings(1), "help\nquit\n");
    for command in ["start", "score", "rules", "reset", "quit"] {
        assert!(out.contains(command), "help should mention {}", command);
    }
}

/// Test unknown commands get a hint and the loop continues.
#[test]
fn test_shell_unknown_command() {
    let (out, _) = play(&quiet_settings(1), "dance\nscore\nquit\n");
    assert!(out.contains("Unknown command: dance. Type 'help' to list the commands."));
    assert!(out.contains("Player: 0 pts"));
}

/// Test blank lines are skipped.
#[test]
fn test_shell_blank_lines() {
    let (out, _) = play(&quiet_settings(1), "\n   \nquit\n");
    assert!(!out.contains("Unknown command"));
    assert!(out.contains("Thanks for playing!"));
}

// =============================================================================
// Play Loop Tests
// =============================================================================

/// Test several rounds are recorded, then reset clears them.
#[test]
fn test_play_then_reset() {
    let script = "start\nrock\npaper\n3\nback\nscore\nreset\nscore\nquit\n";
    let (out, session) = play(&quiet_settings(7), script);

    assert_eq!(out.matches("You chose ").count(), 3);
    assert!(out.contains("Scores have been reset."));
    assert!(out.contains("Player: 0 pts | Computer: 0 pts | Ties: 0"));
    assert_eq!(session.scoreboard().rounds(), 0);
}

/// Test the shell's results match a session replayed with the same seed.
#[test]
fn test_play_matches_seeded_session() {
    let settings = quiet_settings(11);
    let (out, session) = play(&settings, "start\nspock\nlizard\nback\nquit\n");

    let mut replay = GameSession::from_settings(&settings).unwrap();
    let first = replay.play_round("Spock").unwrap();
    let second = replay.play_round("Lizard").unwrap();

    assert_eq!(session.scoreboard(), replay.scoreboard());
    assert!(out.contains(&first.headline()));
    assert!(out.contains(&second.headline()));
}

/// Test EOF inside the play loop ends the session cleanly.
#[test]
fn test_play_eof() {
    let (out, session) = play(&quiet_settings(3), "start\nrock\n");
    assert_eq!(session.scoreboard().rounds(), 1);
    assert!(out.trim_end().ends_with("Thanks for playing!"));
}

/// Test the countdown and screen clear appear when enabled.
#[test]
fn test_play_countdown_and_clear() {
    let settings = GameSettings::default().with_seed(5).with_countdown_ms(0);
    let (out, _) = play(&settings, "start\n1\nback\nquit\n");
    assert!(out.contains("Rock... Paper... Scissors... Lizard... "));
    assert!(out.contains("\x1B[2J"));
}

/// Test invalid choices are reported and not scored.
#[test]
fn test_play_invalid_choice() {
    let (out, session) = play(&quiet_settings(3), "start\n9\nfire\nback\nquit\n");
    assert!(out.contains("unknown choice: 9"));
    assert!(out.contains("unknown choice: fire"));
    assert_eq!(session.scoreboard().rounds(), 0);
}

// =============================================================================
// Custom Rules Tests
// =============================================================================

/// Test a session on a rules file.
#[test]
fn test_custom_rules_file() {
    let path = write_rules(
        "elements",
        r#"{
            "Fire":  [{"Grass": "Burns Grass"}],
            "Water": [{"Fire": "Douses Fire"}],
            "Grass": [{"Water": "Drinks Water"}]
        }"#,
    );
    let settings = quiet_settings(2).with_rules_path(&path);

    let (out, _) = play(&settings, "rules\nquit\n");
    assert!(out.contains("- Rule: Fire | Wins against: Grass (Burns Grass)"));
    assert!(!out.contains("Spock"));

    let mut session = GameSession::from_settings(&settings).unwrap();
    let outcome = session.play_against("water", "fire").unwrap();
    assert_eq!(outcome.verdict.winner(), Some(Side::Player));
    assert_eq!(outcome.headline(), "Water douses Fire");

    std::fs::remove_file(path).unwrap();
}

/// Test an even rules file refuses to start.
#[test]
fn test_even_rules_file_fails() {
    let path = write_rules(
        "even",
        r#"{"Rock": [{"Scissors": "Crushes Scissors"}], "Scissors": []}"#,
    );
    let settings = quiet_settings(2).with_rules_path(&path);

    let err = GameSession::from_settings(&settings).unwrap_err();
    assert!(matches!(err, ConfigError::EvenRuleCount { count: 2 }));
    assert!(err.to_string().contains("Number of rules must be odd to ensure a fair game!"));

    std::fs::remove_file(path).unwrap();
}

/// Test an inconsistent rules file refuses to start.
#[test]
fn test_inconsistent_rules_file_fails() {
    let config = RulesConfig::new()
        .with_choice("Rock", [("Scissors", "Crushes Scissors"), ("Paper", "Rips Paper")])
        .with_choice("Paper", [("Rock", "Covers Rock")])
        .with_choice("Scissors", [("Paper", "Cuts Paper")]);
    let path = write_rules("contradiction", &config.to_json_pretty().unwrap());
    let settings = quiet_settings(2).with_rules_path(&path);

    let err = GameSession::from_settings(&settings).unwrap_err();
    assert!(matches!(err, ConfigError::Contradiction { .. }));

    std::fs::remove_file(path).unwrap();
}

/// Test independent sessions do not share state.
#[test]
fn test_sessions_are_independent() {
    let mut a = GameSession::reference(1).unwrap();
    let b = GameSession::reference(1).unwrap();

    a.play_against("Rock", "Scissors").unwrap();

    assert_eq!(a.scoreboard().score("player"), Some(1));
    assert_eq!(b.scoreboard().score("player"), Some(0));
}
