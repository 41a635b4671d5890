//! Errors raised while building a puzzle

use thiserror::Error;

/// Failure to produce a playable puzzle
///
/// Always surfaced before a session starts; a session is never built on top
/// of a degraded grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("dictionary has no words of length {length}")]
    NoWordsOfLength { length: usize },

    #[error("no words fit into a grid of {total_length} cells")]
    NoWordsPlaced { total_length: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
