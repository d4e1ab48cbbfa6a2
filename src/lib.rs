//! # Tourney Engine
//!
//! Bracket generation and prize distribution for competitive tournaments.
//!
//! The engine is a set of pure, synchronous functions: it takes participant
//! lists, ratings, standings and a prize pool as plain data and returns match
//! schedules or prize allocations. It does no I/O and keeps no state between
//! calls, so every function is safe to call from any thread.
//!
//! ## Core Modules
//!
//! - [`bracket`]: Seeding, shuffling, and match schedules for single
//!   elimination, double elimination, round robin and Swiss
//! - [`prize`]: Exact, integer-only prize pool splitting over final standings
//! - [`config`]: Default format, seeding and prize split from the environment
//! - [`engine`]: A thin facade applying a validated configuration
//!
//! ## Example
//!
//! ```
//! use tourney_engine::{bracket, prize};
//!
//! let players: Vec<String> = (1..=4).map(|i| format!("p{i}")).collect();
//! let matches = bracket::generate_single_elimination(&players).unwrap();
//! assert_eq!(matches.len(), 3);
//!
//! let split = prize::calculate_prizes(
//!     "1000000000000000000",
//!     &prize::PrizeDistribution::default(),
//!     &players,
//! )
//! .unwrap();
//! assert_eq!(split[3].prize_amount.to_string(), "100000000000000000");
//! ```

/// Match schedule generation.
pub mod bracket;
pub use bracket::{Bracket, BracketFormat, BracketTag, Match};

/// Prize pool distribution.
pub mod prize;
pub use prize::{PrizeAllocation, PrizeDistribution, PrizePool};

pub mod config;
pub mod engine;
pub mod errors;

pub use config::{ConfigError, EngineConfig, SeedingMode};
pub use engine::TournamentEngine;
pub use errors::{EngineError, EngineResult};
