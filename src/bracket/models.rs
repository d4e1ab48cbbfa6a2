//! Bracket data models.

use serde::{Deserialize, Serialize};

/// Which bracket a match belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketTag {
    /// Single bracket used by single elimination, round robin and Swiss
    Main,
    /// Double elimination upper bracket
    Winners,
    /// Double elimination lower bracket
    Losers,
    /// Deciding matches (single elimination final, grand final, reset)
    Finals,
}

impl std::fmt::Display for BracketTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketTag::Main => write!(f, "main"),
            BracketTag::Winners => write!(f, "winners"),
            BracketTag::Losers => write!(f, "losers"),
            BracketTag::Finals => write!(f, "finals"),
        }
    }
}

/// A single scheduled pairing.
///
/// A `None` player slot is either a bye (exactly one side empty) or a
/// placeholder waiting on earlier results (both sides empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Round number (1-indexed)
    pub round: u32,
    /// Index of this match within its round and bracket (0-indexed)
    pub position: u32,
    /// Bracket tag
    pub bracket: BracketTag,
    /// First player, `None` for an open slot
    pub player1_id: Option<String>,
    /// Second player, `None` for an open slot
    pub player2_id: Option<String>,
}

impl Match {
    /// Create a match between two (possibly open) slots
    pub fn new(
        round: u32,
        position: u32,
        bracket: BracketTag,
        player1_id: Option<String>,
        player2_id: Option<String>,
    ) -> Self {
        Self {
            round,
            position,
            bracket,
            player1_id,
            player2_id,
        }
    }

    /// Create a match whose players are decided by earlier results
    pub fn placeholder(round: u32, position: u32, bracket: BracketTag) -> Self {
        Self::new(round, position, bracket, None, None)
    }

    /// Exactly one slot is filled
    pub fn is_bye(&self) -> bool {
        self.player1_id.is_some() != self.player2_id.is_some()
    }

    /// Neither slot is filled yet
    pub fn is_placeholder(&self) -> bool {
        self.player1_id.is_none() && self.player2_id.is_none()
    }

    /// The player who advances unopposed, if this is a bye
    pub fn bye_winner(&self) -> Option<&str> {
        match (&self.player1_id, &self.player2_id) {
            (Some(p), None) | (None, Some(p)) => Some(p.as_str()),
            _ => None,
        }
    }

    /// Whether the given player occupies either slot
    pub fn involves(&self, player_id: &str) -> bool {
        self.player1_id.as_deref() == Some(player_id)
            || self.player2_id.as_deref() == Some(player_id)
    }
}

/// Competition format requested from the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BracketFormat {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
    /// `rounds: None` picks `ceil(log2 N)` at generation time
    Swiss { rounds: Option<u32> },
}

impl std::fmt::Display for BracketFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketFormat::SingleElimination => write!(f, "single_elimination"),
            BracketFormat::DoubleElimination => write!(f, "double_elimination"),
            BracketFormat::RoundRobin => write!(f, "round_robin"),
            BracketFormat::Swiss { .. } => write!(f, "swiss"),
        }
    }
}

/// A generated bracket, one variant per format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum Bracket {
    SingleElimination {
        matches: Vec<Match>,
    },
    DoubleElimination {
        winners: Vec<Match>,
        losers: Vec<Match>,
        /// Grand final followed by the bracket reset
        finals: Vec<Match>,
    },
    RoundRobin {
        matches: Vec<Match>,
    },
    Swiss {
        total_rounds: u32,
        matches: Vec<Match>,
    },
}

impl Bracket {
    /// Format that produced this bracket
    pub fn format(&self) -> BracketFormat {
        match self {
            Bracket::SingleElimination { .. } => BracketFormat::SingleElimination,
            Bracket::DoubleElimination { .. } => BracketFormat::DoubleElimination,
            Bracket::RoundRobin { .. } => BracketFormat::RoundRobin,
            Bracket::Swiss { total_rounds, .. } => BracketFormat::Swiss {
                rounds: Some(*total_rounds),
            },
        }
    }

    /// Iterate over every match in generation order
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        let empty: &[Match] = &[];
        let (first, second, third) = match self {
            Bracket::SingleElimination { matches }
            | Bracket::RoundRobin { matches }
            | Bracket::Swiss { matches, .. } => (matches.as_slice(), empty, empty),
            Bracket::DoubleElimination {
                winners,
                losers,
                finals,
            } => (winners.as_slice(), losers.as_slice(), finals.as_slice()),
        };
        first.iter().chain(second).chain(third)
    }

    /// Flatten into a single match list in generation order
    pub fn into_matches(self) -> Vec<Match> {
        match self {
            Bracket::SingleElimination { matches }
            | Bracket::RoundRobin { matches }
            | Bracket::Swiss { matches, .. } => matches,
            Bracket::DoubleElimination {
                mut winners,
                losers,
                finals,
            } => {
                winners.extend(losers);
                winners.extend(finals);
                winners
            }
        }
    }

    /// Total number of matches
    pub fn match_count(&self) -> usize {
        self.matches().count()
    }

    /// Matches of one bracket in one round
    pub fn round(&self, bracket: BracketTag, round: u32) -> Vec<&Match> {
        self.matches()
            .filter(|m| m.bracket == bracket && m.round == round)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_bye_detection() {
        let bye = Match::new(1, 0, BracketTag::Main, id("p1"), None);
        assert!(bye.is_bye());
        assert!(!bye.is_placeholder());
        assert_eq!(bye.bye_winner(), Some("p1"));

        let full = Match::new(1, 1, BracketTag::Main, id("p2"), id("p3"));
        assert!(!full.is_bye());
        assert_eq!(full.bye_winner(), None);

        let open = Match::placeholder(2, 0, BracketTag::Finals);
        assert!(open.is_placeholder());
        assert!(!open.is_bye());
    }

    #[test]
    fn test_involves() {
        let m = Match::new(1, 0, BracketTag::Winners, id("alice"), id("bob"));
        assert!(m.involves("alice"));
        assert!(m.involves("bob"));
        assert!(!m.involves("carol"));
    }

    #[test]
    fn test_match_serializes_camel_case_with_null_bye() {
        let m = Match::new(1, 0, BracketTag::Winners, id("p1"), None);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["player1Id"], "p1");
        assert!(json["player2Id"].is_null());
        assert_eq!(json["bracket"], "winners");
        assert_eq!(json["round"], 1);
    }

    #[test]
    fn test_format_round_trips_through_json() {
        let format = BracketFormat::Swiss { rounds: Some(5) };
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, r#"{"type":"swiss","rounds":5}"#);
        let back: BracketFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
    }

    #[test]
    fn test_double_elimination_flattening_order() {
        let bracket = Bracket::DoubleElimination {
            winners: vec![Match::new(1, 0, BracketTag::Winners, id("a"), id("b"))],
            losers: vec![],
            finals: vec![
                Match::placeholder(2, 0, BracketTag::Finals),
                Match::placeholder(3, 0, BracketTag::Finals),
            ],
        };
        assert_eq!(bracket.match_count(), 3);
        assert_eq!(bracket.format(), BracketFormat::DoubleElimination);
        assert_eq!(bracket.round(BracketTag::Finals, 3).len(), 1);

        let flat = bracket.into_matches();
        assert_eq!(flat[0].bracket, BracketTag::Winners);
        assert_eq!(flat[2].round, 3);
    }
}
