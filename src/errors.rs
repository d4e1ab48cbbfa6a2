//! Error types shared by the bracket and prize engines.

use crate::config::ConfigError;
use thiserror::Error;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Participant list, standings, or pool amount rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Prize distribution percentages rejected
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    /// Engine configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl EngineError {
    /// Shorthand for the error every bracket format raises below two players.
    pub(crate) fn not_enough_players() -> Self {
        EngineError::InvalidInput("At least 2 players required".to_string())
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
