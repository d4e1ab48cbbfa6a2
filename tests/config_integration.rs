//! Integration tests for environment-driven configuration
//!
//! These tests mutate the process environment, so they run serially.

use serial_test::serial;
use std::collections::HashMap;
use tourney_engine::{
    BracketFormat, EngineConfig, EngineError, SeedingMode, TournamentEngine,
};

const VARS: [&str; 7] = [
    "TOURNEY_FORMAT",
    "TOURNEY_SWISS_ROUNDS",
    "TOURNEY_SEEDING",
    "TOURNEY_PRIZE_FIRST",
    "TOURNEY_PRIZE_SECOND",
    "TOURNEY_PRIZE_THIRD",
    "TOURNEY_PRIZE_PARTICIPATION",
];

fn set_env(vars: &[(&str, &str)]) {
    // SAFETY: every test touching the environment is #[serial]
    unsafe {
        for key in VARS {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }
}

#[test]
#[serial]
fn test_engine_from_env_defaults() {
    set_env(&[]);
    let engine = TournamentEngine::from_env().unwrap();
    assert_eq!(engine.config(), &EngineConfig::default());
}

#[test]
#[serial]
fn test_engine_from_env_double_elimination() {
    set_env(&[
        ("TOURNEY_FORMAT", "double_elimination"),
        ("TOURNEY_SEEDING", "as_given"),
        ("TOURNEY_PRIZE_FIRST", "70"),
        ("TOURNEY_PRIZE_SECOND", "20"),
        ("TOURNEY_PRIZE_THIRD", "10"),
        ("TOURNEY_PRIZE_PARTICIPATION", "0"),
    ]);

    let engine = TournamentEngine::from_env().unwrap();
    assert_eq!(engine.config().format, BracketFormat::DoubleElimination);
    assert_eq!(engine.config().seeding, SeedingMode::AsGiven);

    let players: Vec<String> = (1..=6).map(|i| format!("p{i}")).collect();
    let bracket = engine.build_bracket(&players, &HashMap::new()).unwrap();
    assert_eq!(bracket.match_count(), 15);

    let payouts = engine.payouts("1000", &players).unwrap();
    assert_eq!(payouts[0].prize_amount.to_string(), "700");
    assert_eq!(payouts[5].prize_amount.to_string(), "0");
    set_env(&[]);
}

#[test]
#[serial]
fn test_engine_from_env_rejects_invalid_split() {
    set_env(&[("TOURNEY_PRIZE_PARTICIPATION", "15")]);
    assert!(matches!(
        TournamentEngine::from_env(),
        Err(EngineError::InvalidDistribution(_))
    ));
    set_env(&[]);
}

#[test]
#[serial]
fn test_engine_from_env_rejects_garbage() {
    set_env(&[("TOURNEY_SWISS_ROUNDS", "many"), ("TOURNEY_FORMAT", "swiss")]);
    assert!(matches!(
        TournamentEngine::from_env(),
        Err(EngineError::Configuration(_))
    ));
    set_env(&[]);
}

#[test]
#[serial]
fn test_engine_from_env_rejects_swiss_rounds_for_other_formats() {
    set_env(&[("TOURNEY_FORMAT", "round_robin"), ("TOURNEY_SWISS_ROUNDS", "3")]);
    let err = TournamentEngine::from_env().unwrap_err();
    assert!(err.to_string().contains("TOURNEY_SWISS_ROUNDS"));
    assert!(matches!(err, EngineError::Configuration(_)));
    set_env(&[]);
}
