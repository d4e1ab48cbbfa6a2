//! Exact prize pool splitting.
//!
//! All amounts are computed in arbitrary-precision integers. Each placement
//! first receives `floor(pool * percentage / 100)` from the percentage it
//! reports; whatever flooring leaves behind is paid to 1st place so that the
//! allocations always sum to the pool.

use super::models::{PrizeAllocation, PrizeDistribution, PrizePool};
use crate::errors::{EngineError, EngineResult};
use num_bigint::BigUint;
use num_traits::{CheckedSub, ToPrimitive};
use std::collections::HashSet;

/// Check that a distribution is usable.
///
/// Percentages must be non-negative, sum to exactly 100 and be ordered
/// `first >= second >= third`.
pub fn validate_distribution(dist: &PrizeDistribution) -> EngineResult<()> {
    if [dist.first, dist.second, dist.third, dist.participation]
        .iter()
        .any(|&p| p < 0)
    {
        return Err(EngineError::InvalidDistribution(
            "Percentages must be non-negative".to_string(),
        ));
    }

    let total = dist.total();
    if total != 100 {
        return Err(EngineError::InvalidDistribution(format!(
            "Percentages must sum to 100, got {total}"
        )));
    }

    if dist.first < dist.second {
        return Err(EngineError::InvalidDistribution(format!(
            "First place ({}) must be at least second place ({})",
            dist.first, dist.second
        )));
    }

    if dist.second < dist.third {
        return Err(EngineError::InvalidDistribution(format!(
            "Second place ({}) must be at least third place ({})",
            dist.second, dist.third
        )));
    }

    Ok(())
}

fn validate_standings(standings: &[String]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(standings.len());
    for player in standings {
        if player.is_empty() {
            return Err(EngineError::InvalidInput(
                "Standings contain an empty player id".to_string(),
            ));
        }
        if !seen.insert(player.as_str()) {
            return Err(EngineError::InvalidInput(format!(
                "Player {player} appears more than once in standings"
            )));
        }
    }
    Ok(())
}

/// `floor(pool * percentage / 100)`; callers guarantee `0 <= percentage <= 100`
fn share(pool: &BigUint, percentage: i32) -> BigUint {
    pool * percentage.unsigned_abs() / 100u32
}

/// Percentage per placement, always summing to 100.
///
/// Fewer than four finishers fold the unused podium and participation shares
/// into the top places. From four finishers on, places 4..N split the
/// participation percentage in whole points, leftover points going to the
/// lowest-numbered of them.
fn placement_percentages(dist: &PrizeDistribution, finishers: usize) -> Vec<i32> {
    match finishers {
        0 => Vec::new(),
        1 => vec![100],
        2 => {
            let first = dist.first + dist.third / 2 + dist.participation / 2;
            vec![first, 100 - first]
        }
        3 => {
            let extra_each = dist.participation / 3;
            let remainder = dist.participation - 3 * extra_each;
            vec![
                dist.first + extra_each + remainder,
                dist.second + extra_each,
                dist.third + extra_each,
            ]
        }
        n => {
            let remaining = (n - 3) as i64;
            let participation = i64::from(dist.participation);
            let base = participation / remaining;
            let leftover = participation % remaining;

            let mut percentages = vec![dist.first, dist.second, dist.third];
            percentages.extend((0..remaining).map(|i| (base + i64::from(i < leftover)) as i32));
            percentages
        }
    }
}

/// Base-unit amount per placement before the flooring dust is assigned.
///
/// Every placement is paid `floor(pool * percentage / 100)` from its own
/// stored percentage. From four finishers on, the units that flooring the
/// individual tail shares leaves out of `floor(pool * participation / 100)`
/// go one each to the lowest-numbered remaining places holding a nonzero
/// percentage. A 0% placement is never paid.
fn placement_amounts(
    pool: &BigUint,
    dist: &PrizeDistribution,
    percentages: &[i32],
) -> EngineResult<Vec<BigUint>> {
    let mut amounts: Vec<BigUint> = percentages.iter().map(|&pct| share(pool, pct)).collect();
    if amounts.len() < 4 {
        return Ok(amounts);
    }

    let participation_pool = share(pool, dist.participation);
    let tail_total: BigUint = amounts[3..].iter().sum();
    // floor of a sum is never below the sum of floors
    let extra_units = participation_pool
        .checked_sub(&tail_total)
        .and_then(|units| units.to_usize())
        .ok_or_else(|| {
            EngineError::InvalidInput(
                "Participation shares exceed the participation pool".to_string(),
            )
        })?;

    if extra_units > 0 {
        log::warn!(
            "Participation pool {} leaves {} unit(s) after flooring {} places, paying them to the top of the group",
            participation_pool,
            extra_units,
            amounts.len() - 3
        );
    }

    // Fewer extra units than paid tail places, so none spill over
    amounts[3..]
        .iter_mut()
        .zip(&percentages[3..])
        .filter(|(_, pct)| **pct > 0)
        .take(extra_units)
        .for_each(|(amount, _)| *amount += 1u32);

    Ok(amounts)
}

/// Split an already-parsed pool across the standings (index 0 is 1st place).
pub fn calculate_prizes_for_pool(
    pool: &PrizePool,
    dist: &PrizeDistribution,
    standings: &[String],
) -> EngineResult<Vec<PrizeAllocation>> {
    validate_distribution(dist)?;
    validate_standings(standings)?;

    if standings.is_empty() {
        return Ok(Vec::new());
    }

    let percentages = placement_percentages(dist, standings.len());
    let mut amounts = placement_amounts(pool.amount(), dist, &percentages)?;

    let allocated: BigUint = amounts.iter().sum();
    let dust = pool.amount() - allocated;
    amounts[0] += dust;

    log::debug!(
        "Calculated prizes for {} placements from a pool of {}",
        standings.len(),
        pool
    );

    Ok(standings
        .iter()
        .zip(percentages)
        .zip(amounts)
        .enumerate()
        .map(|(idx, ((player_id, percentage), prize_amount))| PrizeAllocation {
            player_id: player_id.clone(),
            placement: idx + 1,
            percentage,
            prize_amount,
        })
        .collect())
}

/// Split a decimal-string pool across the standings (index 0 is 1st place).
///
/// # Errors
///
/// * `InvalidInput` - pool is not a non-negative decimal integer, or the
///   standings repeat or omit a player id
/// * `InvalidDistribution` - see [`validate_distribution`]
pub fn calculate_prizes(
    pool: &str,
    dist: &PrizeDistribution,
    standings: &[String],
) -> EngineResult<Vec<PrizeAllocation>> {
    let pool: PrizePool = pool.parse()?;
    calculate_prizes_for_pool(&pool, dist, standings)
}
