//! Error types for node providers and the game driver.

use std::time::Duration;

use thiserror::Error;

/// Result type for game driver operations.
pub type GameResult<T> = Result<T, GameError>;

/// Ways a node provider can fail to produce a node.
///
/// None of these reach the turn resolver: the game driver replaces a failed
/// fetch with a fallback node.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider has no node for this choice id.
    #[error("no story node for choice \"{0}\"")]
    NotFound(String),

    /// The provider did not answer before the deadline.
    #[error("node provider timed out after {0:?}")]
    Timeout(Duration),

    /// The provider answered with a node that breaks the node contract.
    #[error("malformed story node: {0}")]
    Malformed(String),

    /// The provider is unreachable or refused the request.
    #[error("node provider unavailable: {0}")]
    Unavailable(String),

    /// The provider's response could not be parsed.
    #[error("invalid node JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from driving a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The game has not been started yet.
    #[error("the game has not started; call start() first")]
    NotStarted,

    /// The chosen id is not offered by the current node.
    #[error("choice \"{0}\" is not available here")]
    UnknownChoice(String),

    /// A numbered selection was outside the offered choices.
    #[error("choice {index} is out of range (1-{available})")]
    ChoiceOutOfRange {
        /// The 1-based index that was requested.
        index: usize,
        /// How many choices are offered.
        available: usize,
    },
}
