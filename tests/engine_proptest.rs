//! Property-based tests for bracket generation and prize distribution
//!
//! These tests verify the structural and conservation invariants across a
//! wide range of randomly generated rosters, ratings and prize pools.

use num_bigint::BigUint;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use tourney_engine::{
    bracket::{
        BracketTag, generate_double_elimination, generate_round_robin,
        generate_single_elimination, generate_swiss, seed_players, shuffle_players,
    },
    prize::{PrizeDistribution, calculate_prizes},
};

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("player{i}")).collect()
}

// Strategy to generate a valid distribution: first >= second >= third, sum 100
fn distribution_strategy() -> impl Strategy<Value = PrizeDistribution> {
    (0i32..=100, 0i32..=100, 0i32..=100)
        .prop_map(|(a, b, c)| {
            let mut podium = [a, b, c];
            podium.sort_unstable_by(|x, y| y.cmp(x));
            podium
        })
        .prop_filter("Podium must fit in 100", |[a, b, c]| a + b + c <= 100)
        .prop_map(|[first, second, third]| {
            PrizeDistribution::new(first, second, third, 100 - first - second - third)
        })
}

// Strategy to generate a pool as a decimal string up to ~38 digits
fn pool_strategy() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|n| n.to_string())
}

proptest! {
    #[test]
    fn test_single_elimination_match_count(n in 2usize..=200) {
        let matches = generate_single_elimination(&roster(n)).unwrap();
        prop_assert_eq!(matches.len(), n.next_power_of_two() - 1);

        let finals = matches.iter().filter(|m| m.bracket == BracketTag::Finals).count();
        prop_assert_eq!(finals, 1);
    }

    #[test]
    fn test_double_elimination_has_two_finals(n in 2usize..=130) {
        let matches = generate_double_elimination(&roster(n)).unwrap();
        let finals = matches.iter().filter(|m| m.bracket == BracketTag::Finals).count();
        prop_assert_eq!(finals, 2);
        prop_assert_eq!(matches.len(), 2 * n.next_power_of_two() - 1);
    }

    #[test]
    fn test_round_robin_pairs_and_rounds(n in 2usize..=40) {
        let matches = generate_round_robin(&roster(n)).unwrap();
        prop_assert_eq!(matches.len(), n * (n - 1) / 2);

        let mut per_round: HashMap<u32, HashSet<String>> = HashMap::new();
        for m in &matches {
            let busy = per_round.entry(m.round).or_default();
            prop_assert!(busy.insert(m.player1_id.clone().unwrap()));
            prop_assert!(busy.insert(m.player2_id.clone().unwrap()));
        }
    }

    #[test]
    fn test_swiss_round_one_covers_everyone(n in 2usize..=64, rounds in 1u32..=8) {
        let matches = generate_swiss(&roster(n), rounds).unwrap();

        let mut seated = HashSet::new();
        for m in matches.iter().filter(|m| m.round == 1) {
            for id in m.player1_id.iter().chain(m.player2_id.iter()) {
                prop_assert!(seated.insert(id.clone()));
            }
        }
        prop_assert_eq!(seated.len(), n);
        prop_assert_eq!(matches.len(), n.div_ceil(2) * rounds as usize);
    }

    #[test]
    fn test_seed_players_puts_highest_first(
        ratings in prop::collection::vec(-5000.0f64..5000.0, 1..50)
    ) {
        let players = roster(ratings.len());
        let map: HashMap<String, f64> = players.iter().cloned().zip(ratings.iter().copied()).collect();

        let seeded = seed_players(&players, &map);
        let best = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(seeded.len(), players.len());
        prop_assert_eq!(map[&seeded[0]], best);
    }

    #[test]
    fn test_shuffle_preserves_multiset(items in prop::collection::vec(0u8..10, 0..100)) {
        let mut shuffled = shuffle_players(items.clone());
        let mut original = items;
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }

    #[test]
    fn test_prizes_conserve_pool(
        pool in pool_strategy(),
        dist in distribution_strategy(),
        n in 1usize..=40,
    ) {
        let allocations = calculate_prizes(&pool, &dist, &roster(n)).unwrap();

        let total: BigUint = allocations.iter().map(|a| &a.prize_amount).sum();
        prop_assert_eq!(total.to_string(), pool);

        let pct: i32 = allocations.iter().map(|a| a.percentage).sum();
        prop_assert_eq!(pct, 100);
    }
}
