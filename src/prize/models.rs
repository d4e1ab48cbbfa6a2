//! Prize data models.

use crate::errors::EngineError;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Percentage split of a prize pool.
///
/// The four fields must sum to 100 and satisfy `first >= second >= third`;
/// see [`validate_distribution`](super::calculator::validate_distribution).
/// Signed so that negative input can be rejected rather than unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeDistribution {
    pub first: i32,
    pub second: i32,
    pub third: i32,
    /// Shared by every placement below 3rd
    pub participation: i32,
}

impl PrizeDistribution {
    pub fn new(first: i32, second: i32, third: i32, participation: i32) -> Self {
        Self {
            first,
            second,
            third,
            participation,
        }
    }

    /// Entire pool to 1st place
    pub fn winner_takes_all() -> Self {
        Self::new(100, 0, 0, 0)
    }

    /// Sum of all four percentages
    pub fn total(&self) -> i64 {
        [self.first, self.second, self.third, self.participation]
            .iter()
            .map(|&p| i64::from(p))
            .sum()
    }
}

impl Default for PrizeDistribution {
    /// 50/25/15/10
    fn default() -> Self {
        Self::new(50, 25, 15, 10)
    }
}

/// Exact, non-negative prize pool in base units
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PrizePool(BigUint);

impl PrizePool {
    pub fn new(amount: BigUint) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> &BigUint {
        &self.0
    }
}

impl From<u64> for PrizePool {
    fn from(amount: u64) -> Self {
        Self(BigUint::from(amount))
    }
}

impl FromStr for PrizePool {
    type Err = EngineError;

    /// Accepts plain decimal digits only: no sign, whitespace or separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EngineError::InvalidInput(format!(
                "Prize pool must be a non-negative integer, got {s:?}"
            )));
        }

        BigUint::from_str(s)
            .map(Self)
            .map_err(|e| EngineError::InvalidInput(format!("Invalid prize pool {s:?}: {e}")))
    }
}

impl std::fmt::Display for PrizePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's share of the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeAllocation {
    pub player_id: String,
    /// Rank in the standings (1-indexed)
    pub placement: usize,
    /// Whole percentage points for this placement
    pub percentage: i32,
    /// Exact amount in base units
    #[serde(with = "decimal_string")]
    pub prize_amount: BigUint,
}

/// Serialize big integers as decimal strings so JSON consumers keep precision
mod decimal_string {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigUint::from_str(&s).map_err(D::Error::custom)
    }
}
