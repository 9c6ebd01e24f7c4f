//! Core library for the compound matching game.
//!
//! Provides:
//! - Board state types (Card, GameState) and their closed unions
//! - Compound data (Compound, bundled catalog)
//! - Catalog text parser
//! - Deck construction (one formula card and one name card per compound)

pub mod compound;
pub mod deck;
pub mod error;
pub mod parser;
pub mod types;

pub use compound::{builtin_catalog, Compound};
pub use deck::{deal, new_game};
pub use error::{ParseError, Result, StateError};
pub use parser::parse;
pub use types::{Card, CardKind, Difficulty, GameState, PairCount};
