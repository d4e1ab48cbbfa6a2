//! Engine configuration.
//!
//! Consolidates the environment variable reads for default format, seeding
//! and prize split, and validates the result.

use crate::{
    bracket::{BracketFormat, MAX_SWISS_ROUNDS},
    errors::EngineResult,
    prize::{PrizeDistribution, validate_distribution},
};
use serde::{Deserialize, Serialize};

/// How the participant list is ordered before generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Highest rating first
    Rated,
    /// Uniform random order
    Shuffled,
    /// Keep the caller's order
    AsGiven,
}

impl std::fmt::Display for SeedingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedingMode::Rated => write!(f, "rated"),
            SeedingMode::Shuffled => write!(f, "shuffled"),
            SeedingMode::AsGiven => write!(f, "as_given"),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Bracket format to generate
    pub format: BracketFormat,
    /// Participant ordering applied before generation
    pub seeding: SeedingMode,
    /// Prize split
    pub distribution: PrizeDistribution,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            format: BracketFormat::SingleElimination,
            seeding: SeedingMode::Rated,
            distribution: PrizeDistribution::default(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables (all optional):
    /// - `TOURNEY_FORMAT`: `single_elimination`, `double_elimination`,
    ///   `round_robin` or `swiss` (default: `single_elimination`)
    /// - `TOURNEY_SWISS_ROUNDS`: fixed Swiss length (default: `ceil(log2 N)`)
    /// - `TOURNEY_SEEDING`: `rated`, `shuffled` or `as_given` (default: `rated`)
    /// - `TOURNEY_PRIZE_FIRST` / `_SECOND` / `_THIRD` / `_PARTICIPATION`:
    ///   percentage points (default: 50/25/15/10)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let swiss_rounds: Option<u32> = parse_var(&lookup, "TOURNEY_SWISS_ROUNDS")?;
        let format = match lookup("TOURNEY_FORMAT") {
            None => defaults.format,
            Some(value) => match value.to_lowercase().as_str() {
                "single_elimination" => BracketFormat::SingleElimination,
                "double_elimination" => BracketFormat::DoubleElimination,
                "round_robin" => BracketFormat::RoundRobin,
                "swiss" => BracketFormat::Swiss {
                    rounds: swiss_rounds,
                },
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "TOURNEY_FORMAT".to_string(),
                        reason: format!("Unknown format {value:?}"),
                    });
                }
            },
        };

        if swiss_rounds.is_some() && !matches!(format, BracketFormat::Swiss { .. }) {
            return Err(ConfigError::Invalid {
                var: "TOURNEY_SWISS_ROUNDS".to_string(),
                reason: format!("Only applies with TOURNEY_FORMAT=swiss, format is {format}"),
            });
        }

        let seeding = match lookup("TOURNEY_SEEDING") {
            None => defaults.seeding,
            Some(value) => match value.to_lowercase().as_str() {
                "rated" => SeedingMode::Rated,
                "shuffled" => SeedingMode::Shuffled,
                "as_given" => SeedingMode::AsGiven,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "TOURNEY_SEEDING".to_string(),
                        reason: format!("Unknown seeding mode {value:?}"),
                    });
                }
            },
        };

        let base = defaults.distribution;
        let distribution = PrizeDistribution {
            first: parse_var(&lookup, "TOURNEY_PRIZE_FIRST")?.unwrap_or(base.first),
            second: parse_var(&lookup, "TOURNEY_PRIZE_SECOND")?.unwrap_or(base.second),
            third: parse_var(&lookup, "TOURNEY_PRIZE_THIRD")?.unwrap_or(base.third),
            participation: parse_var(&lookup, "TOURNEY_PRIZE_PARTICIPATION")?
                .unwrap_or(base.participation),
        };

        Ok(Self {
            format,
            seeding,
            distribution,
        })
    }

    /// Load configuration from a JSON document; omitted fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid {
            var: "json".to_string(),
            reason: e.to_string(),
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> EngineResult<()> {
        validate_distribution(&self.distribution)?;

        if let BracketFormat::Swiss {
            rounds: Some(rounds),
        } = self.format
        {
            if !(1..=MAX_SWISS_ROUNDS).contains(&rounds) {
                return Err(ConfigError::Invalid {
                    var: "TOURNEY_SWISS_ROUNDS".to_string(),
                    reason: format!("Must be between 1 and {MAX_SWISS_ROUNDS}, got {rounds}"),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Parse an optional variable; present but unparseable is an error
fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|value| {
            value.trim().parse().map_err(|e| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("{value:?}: {e}"),
            })
        })
        .transpose()
}
