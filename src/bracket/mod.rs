//! Bracket generation for elimination, round robin and Swiss tournaments.
//!
//! This module provides:
//! - Seeding by rating and standard bracket placement
//! - Uniform shuffling for unseeded events
//! - Match schedules for four formats, each returned as plain [`Match`] records
//!
//! Generators only decide *who meets whom in which round*. Advancing winners,
//! resolving byes and pairing later Swiss rounds belong to the caller.
//!
//! ## Example
//!
//! ```
//! use tourney_engine::bracket::{BracketFormat, generate, seed_players};
//! use std::collections::HashMap;
//!
//! let players: Vec<String> = ["ana", "bo", "cy"].iter().map(|s| s.to_string()).collect();
//! let ratings = HashMap::from([("cy".to_string(), 2100.0), ("bo".to_string(), 1800.0)]);
//!
//! let seeded = seed_players(&players, &ratings);
//! assert_eq!(seeded[0], "cy");
//!
//! let bracket = generate(BracketFormat::SingleElimination, &seeded).unwrap();
//! assert_eq!(bracket.match_count(), 3);
//! ```

pub mod generator;
pub mod models;
pub mod seeding;

pub use generator::{
    MAX_SWISS_ROUNDS, generate, generate_double_elimination, generate_round_robin,
    generate_single_elimination, generate_swiss, recommended_swiss_rounds,
};
pub use models::{Bracket, BracketFormat, BracketTag, Match};
pub use seeding::{
    PlayerShuffler, bracket_seed_order, seed_players, shuffle_players, shuffle_players_with,
};
