//! Core types for the compound matching game.

use crate::compound::Compound;
use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// Which side of its compound a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Formula,
    Name,
}

/// Board difficulty selected by the player.
///
/// The difficulty-to-board-size mapping belongs to the caller; the state
/// only records the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Number of compound pairs on the board.
///
/// Serialized as the literal numbers 6, 8 and 10; any other number fails to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PairCount {
    Six,
    Eight,
    Ten,
}

impl PairCount {
    /// Number of pairs as a plain integer.
    pub fn value(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
            Self::Ten => 10,
        }
    }

    /// Cards in a full deck, two per pair.
    pub fn card_count(self) -> usize {
        usize::from(self.value()) * 2
    }
}

impl TryFrom<u8> for PairCount {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            10 => Ok(Self::Ten),
            _ => Err(StateError::InvalidPairCount { value }),
        }
    }
}

impl From<PairCount> for u8 {
    fn from(count: PairCount) -> u8 {
        count.value()
    }
}

/// One card on the board.
///
/// `id` is unique and immutable once created; `is_flipped` and `is_matched`
/// are mutated by the game logic during play (`is_matched` never goes back
/// to false within a game).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub kind: CardKind,
    /// Shared with the other card of the pair.
    pub compound: Arc<Compound>,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    /// Fresh face-down card with a generated id.
    pub fn new(kind: CardKind, compound: Arc<Compound>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            compound,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Text this card shows when face-up.
    pub fn face(&self) -> &str {
        match self.kind {
            CardKind::Formula => &self.compound.formula,
            CardKind::Name => &self.compound.name,
        }
    }
}

/// Full state of one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Deck in presentation order.
    pub cards: Vec<Card>,
    /// Ids of face-up cards awaiting match resolution, at most 2 by
    /// convention.
    pub flipped_cards: Vec<String>,
    pub matched_pairs: u32,
    pub moves: u32,
    pub game_started: bool,
    pub game_complete: bool,
    pub difficulty: Difficulty,
    pub pair_count: PairCount,
}

impl GameState {
    /// Fresh state for a dealt deck: nothing flipped, nothing matched.
    pub fn new(cards: Vec<Card>, difficulty: Difficulty, pair_count: PairCount) -> Self {
        Self {
            cards,
            flipped_cards: Vec::new(),
            matched_pairs: 0,
            moves: 0,
            game_started: false,
            game_complete: false,
            difficulty,
            pair_count,
        }
    }

    /// Look up a card by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Check the cross-field invariants the types do not enforce.
    ///
    /// Mutation logic is expected to keep these true at all times; this
    /// reports the first violation found and never mutates.
    pub fn validate(&self) -> Result<(), StateError> {
        let expected = self.pair_count.card_count();
        if self.cards.len() != expected {
            return Err(StateError::WrongDeckSize {
                expected,
                actual: self.cards.len(),
            });
        }

        let mut seen_ids = HashSet::new();
        for card in &self.cards {
            if !seen_ids.insert(card.id.as_str()) {
                return Err(StateError::DuplicateCardId {
                    id: card.id.clone(),
                });
            }
        }

        // One formula card and one name card per compound.
        let mut pairs: HashMap<&str, (u32, u32)> = HashMap::new();
        for card in &self.cards {
            let entry = pairs.entry(card.compound.name.as_str()).or_default();
            match card.kind {
                CardKind::Formula => entry.0 += 1,
                CardKind::Name => entry.1 += 1,
            }
        }
        for (compound, counts) in &pairs {
            if *counts != (1, 1) {
                return Err(StateError::BrokenPair {
                    compound: compound.to_string(),
                });
            }
        }

        if self.flipped_cards.len() > 2 {
            return Err(StateError::TooManyFlipped {
                count: self.flipped_cards.len(),
            });
        }
        for id in &self.flipped_cards {
            if self.card(id).is_none() {
                return Err(StateError::UnknownCardId { id: id.clone() });
            }
        }

        let pair_count = self.pair_count.value();
        if self.matched_pairs > u32::from(pair_count) {
            return Err(StateError::TooManyMatches {
                matched: self.matched_pairs,
                pair_count,
            });
        }
        if self.game_complete != (self.matched_pairs == u32::from(pair_count)) {
            return Err(StateError::CompletionMismatch {
                matched: self.matched_pairs,
                pair_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::builtin_catalog;
    use crate::deck;

    fn fresh_game() -> GameState {
        deck::new_game(&builtin_catalog(), Difficulty::Easy, PairCount::Six).unwrap()
    }

    #[test]
    fn pair_count_accepts_only_known_values() {
        assert_eq!(PairCount::try_from(6), Ok(PairCount::Six));
        assert_eq!(PairCount::try_from(8), Ok(PairCount::Eight));
        assert_eq!(PairCount::try_from(10), Ok(PairCount::Ten));
        assert_eq!(
            PairCount::try_from(7),
            Err(StateError::InvalidPairCount { value: 7 })
        );
    }

    #[test]
    fn pair_count_is_a_number_on_the_wire() {
        assert_eq!(serde_json::to_string(&PairCount::Ten).unwrap(), "10");
        assert_eq!(
            serde_json::from_str::<PairCount>("8").unwrap(),
            PairCount::Eight
        );
        assert!(serde_json::from_str::<PairCount>("7").is_err());
        assert!(serde_json::from_str::<PairCount>("12").is_err());
    }

    #[test]
    fn difficulty_union_is_closed() {
        assert_eq!(
            serde_json::from_str::<Difficulty>("\"medium\"").unwrap(),
            Difficulty::Medium
        );
        assert!(serde_json::from_str::<Difficulty>("\"extreme\"").is_err());
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("brutal"), None);
    }

    #[test]
    fn both_kinds_share_one_compound() {
        let compound = Arc::new(Compound::new("Water", "H2O"));
        let formula = Card::new(CardKind::Formula, Arc::clone(&compound));
        let name = Card::new(CardKind::Name, Arc::clone(&compound));
        assert!(Arc::ptr_eq(&formula.compound, &name.compound));
        assert_eq!(formula.face(), "H2O");
        assert_eq!(name.face(), "Water");
        assert_ne!(formula.id, name.id);
    }

    #[test]
    fn fresh_game_validates() {
        fresh_game().validate().unwrap();
    }

    #[test]
    fn completed_game_validates() {
        let mut state = fresh_game();
        for card in &mut state.cards {
            card.is_flipped = true;
            card.is_matched = true;
        }
        state.matched_pairs = 6;
        state.moves = 9;
        state.game_started = true;
        state.game_complete = true;
        state.validate().unwrap();
    }

    #[test]
    fn completion_flag_must_agree_with_counts() {
        let mut state = fresh_game();
        state.matched_pairs = 6;
        assert_eq!(
            state.validate(),
            Err(StateError::CompletionMismatch {
                matched: 6,
                pair_count: 6
            })
        );
    }

    #[test]
    fn at_most_two_cards_await_resolution() {
        let mut state = fresh_game();
        state.flipped_cards = state.cards.iter().take(3).map(|c| c.id.clone()).collect();
        assert_eq!(
            state.validate(),
            Err(StateError::TooManyFlipped { count: 3 })
        );
    }

    #[test]
    fn flipped_ids_must_resolve_to_deck_cards() {
        let mut state = fresh_game();
        state.flipped_cards.push("not-a-card".to_string());
        assert_eq!(
            state.validate(),
            Err(StateError::UnknownCardId {
                id: "not-a-card".to_string()
            })
        );
    }

    #[test]
    fn broken_pair_is_rejected() {
        let mut state = fresh_game();
        // Turn the first formula card into a second name card.
        state.cards[0].kind = CardKind::Name;
        assert!(matches!(
            state.validate(),
            Err(StateError::BrokenPair { .. })
        ));
    }

    #[test]
    fn wrong_deck_size_is_rejected() {
        let mut state = fresh_game();
        state.cards.pop();
        assert_eq!(
            state.validate(),
            Err(StateError::WrongDeckSize {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn state_survives_the_wire() {
        let state = fresh_game();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.cards.len(), state.cards.len());
        assert_eq!(back.pair_count, state.pair_count);
        assert_eq!(back.cards[0].face(), state.cards[0].face());
    }
}
