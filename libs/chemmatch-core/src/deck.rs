//! Deck construction.
//!
//! Decks come out in catalog order; shuffling and the difficulty-to-size
//! mapping are left to the caller.

use crate::compound::Compound;
use crate::error::{Result, StateError};
use crate::types::{Card, CardKind, Difficulty, GameState, PairCount};
use std::sync::Arc;

/// Deal a deck for `pair_count` pairs from the front of the catalog.
///
/// Emits one formula card and one name card per compound; both cards of a
/// pair share the compound value.
pub fn deal(compounds: &[Compound], pair_count: PairCount) -> Result<Vec<Card>> {
    let needed = usize::from(pair_count.value());
    if compounds.len() < needed {
        return Err(StateError::NotEnoughCompounds {
            needed,
            available: compounds.len(),
        });
    }

    let mut cards = Vec::with_capacity(pair_count.card_count());
    for compound in &compounds[..needed] {
        let shared = Arc::new(compound.clone());
        cards.push(Card::new(CardKind::Formula, Arc::clone(&shared)));
        cards.push(Card::new(CardKind::Name, shared));
    }
    Ok(cards)
}

/// Deal a deck and wrap it in a fresh game state.
pub fn new_game(
    compounds: &[Compound],
    difficulty: Difficulty,
    pair_count: PairCount,
) -> Result<GameState> {
    let cards = deal(compounds, pair_count)?;
    Ok(GameState::new(cards, difficulty, pair_count))
}
