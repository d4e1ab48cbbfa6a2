//! Prize pool distribution over final standings.
//!
//! This module provides:
//! - Distribution validation (non-negative, sums to 100, podium ordered)
//! - Exact integer splitting of arbitrarily large pools
//! - Folding of unused podium shares when fewer than four players finish
//!
//! ## Example
//!
//! ```
//! use tourney_engine::prize::{PrizeDistribution, calculate_prizes};
//!
//! let standings = vec!["winner".to_string(), "runner_up".to_string()];
//! let allocations =
//!     calculate_prizes("1000", &PrizeDistribution::default(), &standings).unwrap();
//!
//! assert_eq!(allocations[0].percentage, 62);
//! assert_eq!(allocations[1].prize_amount.to_string(), "380");
//! ```

pub mod calculator;
pub mod models;

pub use calculator::{calculate_prizes, calculate_prizes_for_pool, validate_distribution};
pub use models::{PrizeAllocation, PrizeDistribution, PrizePool};
