//! Match schedule generation for every supported format.
//!
//! All generators expect the participant list already in seed order (index 0
//! is seed 1); see [`seed_players`](super::seeding::seed_players) and
//! [`shuffle_players`](super::seeding::shuffle_players).

use super::{
    models::{Bracket, BracketFormat, BracketTag, Match},
    seeding::bracket_seed_order,
};
use crate::errors::{EngineError, EngineResult};
use std::collections::HashSet;

/// Reject lists that are too short or carry ids a bye could be confused with.
fn validate_players(players: &[String]) -> EngineResult<()> {
    if players.len() < 2 {
        return Err(EngineError::not_enough_players());
    }

    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if player.is_empty() {
            return Err(EngineError::InvalidInput(
                "Player id must not be empty".to_string(),
            ));
        }
        if !seen.insert(player.as_str()) {
            return Err(EngineError::InvalidInput(format!(
                "Duplicate player id: {player}"
            )));
        }
    }

    Ok(())
}

/// Bracket size for `count` players: the next power of two
fn bracket_size(count: usize) -> usize {
    count.next_power_of_two().max(2)
}

/// Number of rounds in an elimination bracket of `size` slots
fn elimination_rounds(size: usize) -> u32 {
    size.trailing_zeros()
}

/// Longest Swiss schedule the generator will reserve slots for
pub const MAX_SWISS_ROUNDS: u32 = 1024;

/// Recommended Swiss length: `ceil(log2 N)`, at least one round
pub fn recommended_swiss_rounds(player_count: usize) -> u32 {
    elimination_rounds(player_count.next_power_of_two()).max(1)
}

/// Build the elimination tree: seeded round 1, placeholders afterwards.
///
/// Every round is tagged `bracket`, except the last one which takes
/// `final_tag`.
fn elimination_tree(
    players: &[String],
    bracket: BracketTag,
    final_tag: BracketTag,
) -> Vec<Match> {
    let size = bracket_size(players.len());
    let rounds = elimination_rounds(size);
    let mut matches = Vec::with_capacity(size - 1);

    let tag_for = |round: u32| if round == rounds { final_tag } else { bracket };

    // Slots past the player count are byes and only ever land opposite a top seed
    for (position, pair) in bracket_seed_order(size).chunks(2).enumerate() {
        matches.push(Match::new(
            1,
            position as u32,
            tag_for(1),
            players.get(pair[0]).cloned(),
            players.get(pair[1]).cloned(),
        ));
    }

    for round in 2..=rounds {
        let count = size >> round;
        for position in 0..count {
            matches.push(Match::placeholder(round, position as u32, tag_for(round)));
        }
    }

    matches
}

/// Single elimination over the padded bracket.
///
/// Produces `P - 1` matches across `log2(P)` rounds where `P` is the next
/// power of two; the last match is tagged [`BracketTag::Finals`].
pub fn generate_single_elimination(players: &[String]) -> EngineResult<Vec<Match>> {
    validate_players(players)?;

    let matches = elimination_tree(players, BracketTag::Main, BracketTag::Finals);
    log::debug!(
        "Generated single elimination bracket: {} players, {} matches",
        players.len(),
        matches.len()
    );
    Ok(matches)
}

/// Losers bracket for a winners bracket of `size` slots.
///
/// Odd rounds pair up survivors from the previous losers round (round 1 pairs
/// the winners round 1 losers); even rounds meet the drop-downs from the next
/// winners round. Both rounds of each pair have the same match count.
fn losers_bracket(size: usize) -> Vec<Match> {
    let winners_rounds = elimination_rounds(size);
    let mut matches = Vec::new();

    for stage in 1..winners_rounds {
        let count = size >> (stage + 1);
        for round in [2 * stage - 1, 2 * stage] {
            for position in 0..count {
                matches.push(Match::placeholder(
                    round,
                    position as u32,
                    BracketTag::Losers,
                ));
            }
        }
    }

    matches
}

/// Double elimination: winners bracket, losers bracket, grand final and reset.
///
/// Winners rounds run `1..=W`, losers rounds `1..=2(W-1)`. The grand final
/// is numbered after both brackets finish and the reset follows it; both are
/// always emitted as placeholders.
pub fn generate_double_elimination(players: &[String]) -> EngineResult<Vec<Match>> {
    validate_players(players)?;

    let size = bracket_size(players.len());
    let winners_rounds = elimination_rounds(size);
    let losers_rounds = 2 * (winners_rounds - 1);
    let grand_final_round = winners_rounds.max(losers_rounds) + 1;

    let mut matches = elimination_tree(players, BracketTag::Winners, BracketTag::Winners);
    matches.extend(losers_bracket(size));
    matches.push(Match::placeholder(grand_final_round, 0, BracketTag::Finals));
    matches.push(Match::placeholder(grand_final_round + 1, 0, BracketTag::Finals));

    log::debug!(
        "Generated double elimination bracket: {} players, {} winners rounds, {} losers rounds, {} matches",
        players.len(),
        winners_rounds,
        losers_rounds,
        matches.len()
    );
    Ok(matches)
}

/// Round robin by the circle method.
///
/// Player 0 stays fixed while everyone else rotates one slot per round. With
/// an odd count a phantom slot is added and its pairings are skipped, so the
/// player drawn against it simply sits the round out.
pub fn generate_round_robin(players: &[String]) -> EngineResult<Vec<Match>> {
    validate_players(players)?;

    let mut slots: Vec<Option<&String>> = players.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    let mut matches = Vec::with_capacity(players.len() * (players.len() - 1) / 2);

    for round in 1..n as u32 {
        let mut position = 0;
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) {
                matches.push(Match::new(
                    round,
                    position,
                    BracketTag::Main,
                    Some(a.clone()),
                    Some(b.clone()),
                ));
                position += 1;
            }
        }
        slots[1..].rotate_right(1);
    }

    log::debug!(
        "Generated round robin schedule: {} players, {} rounds, {} matches",
        players.len(),
        n - 1,
        matches.len()
    );
    Ok(matches)
}

/// Swiss system: round 1 paired, later rounds reserved.
///
/// Round 1 pairs the top half against the bottom half (seed 1 vs seed
/// `N/2 + 1`); with an odd count the last player gets a bye. Rounds
/// `2..=total_rounds` are placeholders whose pairings depend on standings.
pub fn generate_swiss(players: &[String], total_rounds: u32) -> EngineResult<Vec<Match>> {
    validate_players(players)?;

    if total_rounds == 0 {
        return Err(EngineError::InvalidInput(
            "Swiss tournament needs at least 1 round".to_string(),
        ));
    }

    if total_rounds > MAX_SWISS_ROUNDS {
        return Err(EngineError::InvalidInput(format!(
            "Swiss tournament supports at most {MAX_SWISS_ROUNDS} rounds, got {total_rounds}"
        )));
    }

    if total_rounds as usize >= players.len() {
        log::warn!(
            "Swiss tournament with {} players and {} rounds cannot avoid rematches",
            players.len(),
            total_rounds
        );
    }

    let half = players.len() / 2;
    let per_round = players.len().div_ceil(2);
    let mut matches = Vec::with_capacity(per_round * total_rounds as usize);

    for i in 0..half {
        matches.push(Match::new(
            1,
            i as u32,
            BracketTag::Main,
            Some(players[i].clone()),
            Some(players[i + half].clone()),
        ));
    }
    if players.len() % 2 == 1 {
        matches.push(Match::new(
            1,
            half as u32,
            BracketTag::Main,
            players.last().cloned(),
            None,
        ));
    }

    for round in 2..=total_rounds {
        for position in 0..per_round {
            matches.push(Match::placeholder(round, position as u32, BracketTag::Main));
        }
    }

    log::debug!(
        "Generated Swiss schedule: {} players, {} rounds, {} matches",
        players.len(),
        total_rounds,
        matches.len()
    );
    Ok(matches)
}

/// Generate a bracket for any format, keeping the format-specific shape.
pub fn generate(format: BracketFormat, players: &[String]) -> EngineResult<Bracket> {
    let bracket = match format {
        BracketFormat::SingleElimination => Bracket::SingleElimination {
            matches: generate_single_elimination(players)?,
        },
        BracketFormat::DoubleElimination => {
            let mut winners = Vec::new();
            let mut losers = Vec::new();
            let mut finals = Vec::new();
            for m in generate_double_elimination(players)? {
                match m.bracket {
                    BracketTag::Losers => losers.push(m),
                    BracketTag::Finals => finals.push(m),
                    BracketTag::Winners | BracketTag::Main => winners.push(m),
                }
            }
            Bracket::DoubleElimination {
                winners,
                losers,
                finals,
            }
        }
        BracketFormat::RoundRobin => Bracket::RoundRobin {
            matches: generate_round_robin(players)?,
        },
        BracketFormat::Swiss { rounds } => {
            let total_rounds = rounds.unwrap_or_else(|| recommended_swiss_rounds(players.len()));
            Bracket::Swiss {
                total_rounds,
                matches: generate_swiss(players, total_rounds)?,
            }
        }
    };

    Ok(bracket)
}
