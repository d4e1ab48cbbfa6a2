//! Seeding and shuffling helpers applied to a participant list before generation.

use rand::{Rng, seq::SliceRandom};
use std::{cmp::Ordering, collections::HashMap};

/// Order players by rating, highest first.
///
/// Players with no rating or a NaN rating rank below every rated player.
/// Infinite ratings order like any other value. Ties keep their input order.
/// Index 0 of the result is seed 1.
pub fn seed_players(players: &[String], ratings: &HashMap<String, f64>) -> Vec<String> {
    let mut seeded: Vec<(&String, Option<f64>)> = players
        .iter()
        .map(|p| (p, ratings.get(p).copied().filter(|r| !r.is_nan())))
        .collect();

    // sort_by is stable, which is what keeps ties in input order
    seeded.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    seeded.into_iter().map(|(p, _)| p.clone()).collect()
}

/// Standard bracket placement for `size` slots (a power of two).
///
/// Returns 0-based seed indices in bracket order, so adjacent entries meet in
/// round 1 and seed 0 can only meet seed 1 in the final. For 8 slots this is
/// `[0, 7, 3, 4, 1, 6, 2, 5]`.
pub fn bracket_seed_order(size: usize) -> Vec<usize> {
    let mut order = vec![0];
    while order.len() < size {
        let slots = order.len() * 2;
        order = order
            .iter()
            .flat_map(|&seed| [seed, slots - 1 - seed])
            .collect();
    }
    order
}

/// Shuffle in place with the thread-local RNG and hand the same buffer back.
pub fn shuffle_players<T>(items: Vec<T>) -> Vec<T> {
    shuffle_players_with(items, &mut rand::rng())
}

/// Shuffle in place with a caller-supplied random source (Fisher-Yates).
pub fn shuffle_players_with<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Reusable shuffler holding its own random source.
pub struct PlayerShuffler<R: Rng> {
    rng: R,
}

impl PlayerShuffler<rand::rngs::ThreadRng> {
    /// Create a shuffler backed by the thread-local RNG
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for PlayerShuffler<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PlayerShuffler<R> {
    /// Create a shuffler from an explicit random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Shuffle the buffer and return it
    pub fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T> {
        shuffle_players_with(items, &mut self.rng)
    }
}
