//! Error types for chemmatch-core.

use thiserror::Error;

/// Result type alias defaulting to StateError.
pub type Result<T, E = StateError> = std::result::Result<T, E>;

/// Violations of the game-state shape that the types alone cannot rule out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("invalid pair count {value}, expected 6, 8 or 10")]
    InvalidPairCount { value: u8 },

    #[error("need {needed} compounds, catalog has {available}")]
    NotEnoughCompounds { needed: usize, available: usize },

    #[error("deck has {actual} cards, expected {expected}")]
    WrongDeckSize { expected: usize, actual: usize },

    #[error("duplicate card id {id}")]
    DuplicateCardId { id: String },

    #[error("compound {compound} is not paired as one formula card and one name card")]
    BrokenPair { compound: String },

    #[error("flipped card id {id} is not in the deck")]
    UnknownCardId { id: String },

    #[error("{count} cards flipped, at most 2 may await resolution")]
    TooManyFlipped { count: usize },

    #[error("matched pairs {matched} exceeds pair count {pair_count}")]
    TooManyMatches { matched: u32, pair_count: u8 },

    #[error("game_complete disagrees with {matched} matched pairs of {pair_count}")]
    CompletionMismatch { matched: u32, pair_count: u8 },
}

/// Errors that can occur while parsing a compound catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing `=` separator at line {line}")]
    MissingSeparator { line: usize },

    #[error("missing compound name at line {line}")]
    MissingName { line: usize },

    #[error("missing formula at line {line}")]
    MissingFormula { line: usize },

    #[error("invalid formula at line {line}: {value}")]
    InvalidFormula { line: usize, value: String },

    #[error("duplicate compound name {name} at line {line}")]
    DuplicateName { name: String, line: usize },

    #[error("duplicate formula {formula} at line {line}")]
    DuplicateFormula { formula: String, line: usize },
}
