//! Deck composition.
//!
//! `DeckComposition` says how many cards of each kind a deck holds and builds
//! the concrete cards, assigning each a unique `CardId`.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardKind};

/// How many cards of each kind go into a deck.
///
/// ## Example
///
/// ```
/// use sleeping_queens::cards::{CardKind, DeckComposition};
///
/// let deck = DeckComposition::standard();
/// assert_eq!(deck.total(), 62);
/// assert_eq!(deck.count_of(CardKind::Number), 40);
/// assert_eq!(deck.build().len(), 62);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    /// Copies of each number value.
    pub number_copies: u8,
    /// Highest number value (values run 1..=max_number).
    pub max_number: u8,
    pub kings: u8,
    pub knights: u8,
    pub potions: u8,
    pub dragons: u8,
    pub wands: u8,
}

impl DeckComposition {
    /// The 62-card standard deck: 4×(1-10), 8 kings, 4 knights, 4 potions,
    /// 3 dragons, 3 wands.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            number_copies: 4,
            max_number: 10,
            kings: 8,
            knights: 4,
            potions: 4,
            dragons: 3,
            wands: 3,
        }
    }

    /// Number of cards of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        match kind {
            CardKind::Number => self.number_copies as usize * self.max_number as usize,
            CardKind::King => self.kings as usize,
            CardKind::Knight => self.knights as usize,
            CardKind::Potion => self.potions as usize,
            CardKind::Dragon => self.dragons as usize,
            CardKind::Wand => self.wands as usize,
        }
    }

    /// Total cards in the deck.
    #[must_use]
    pub fn total(&self) -> usize {
        CardKind::ALL.iter().map(|&k| self.count_of(k)).sum()
    }

    /// Build the cards, unshuffled, with ids `0..total`.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total());
        let mut next_id = 0u16;
        let mut alloc = || {
            let id = CardId::new(next_id);
            next_id += 1;
            id
        };

        for value in 1..=self.max_number {
            for _ in 0..self.number_copies {
                cards.push(Card::number(alloc(), value));
            }
        }

        for kind in CardKind::ALL.into_iter().filter(|&k| k != CardKind::Number) {
            for _ in 0..self.count_of(kind) {
                cards.push(Card::new(alloc(), kind));
            }
        }

        cards
    }
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self::standard()
    }
}
