//! Tournament engine binding a validated configuration to the pure generators.

use crate::{
    bracket::{self, Bracket, seed_players, shuffle_players},
    config::{EngineConfig, SeedingMode},
    errors::EngineResult,
    prize::{self, PrizeAllocation},
};
use std::collections::HashMap;

/// Tournament engine
///
/// Holds nothing but its configuration, so it is cheap to clone and safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct TournamentEngine {
    config: EngineConfig,
}

impl TournamentEngine {
    /// Create an engine, rejecting invalid configuration up front
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an engine from `TOURNEY_*` environment variables
    pub fn from_env() -> EngineResult<Self> {
        Self::new(EngineConfig::from_env()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Order participants according to the configured seeding mode
    pub fn order_players(
        &self,
        players: &[String],
        ratings: &HashMap<String, f64>,
    ) -> Vec<String> {
        match self.config.seeding {
            SeedingMode::Rated => seed_players(players, ratings),
            SeedingMode::Shuffled => shuffle_players(players.to_vec()),
            SeedingMode::AsGiven => players.to_vec(),
        }
    }

    /// Order participants and generate the configured bracket
    pub fn build_bracket(
        &self,
        players: &[String],
        ratings: &HashMap<String, f64>,
    ) -> EngineResult<Bracket> {
        let ordered = self.order_players(players, ratings);
        bracket::generate(self.config.format, &ordered)
    }

    /// Split `pool` over `standings` with the configured distribution
    pub fn payouts(&self, pool: &str, standings: &[String]) -> EngineResult<Vec<PrizeAllocation>> {
        prize::calculate_prizes(pool, &self.config.distribution, standings)
    }
}
