//! Playable cards.
//!
//! A `Card` is an immutable value. Two cards with the same kind and value are
//! still different cards: identity is the `CardId` assigned when the deck is
//! built, so a hand holding two NUMBER 7s can pick either one.

use serde::{Deserialize, Serialize};

/// Unique identifier of one physical card in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card, value 1-10. Played alone, as a pair, or as a sum.
    Number,
    /// Wakes a sleeping queen.
    King,
    /// Steals another player's awoken queen.
    Knight,
    /// Puts another player's awoken queen back to sleep.
    Potion,
    /// Defends against a knight.
    Dragon,
    /// Defends against a potion.
    Wand,
}

impl CardKind {
    /// Every kind, in deck-building order.
    pub const ALL: [CardKind; 6] = [
        CardKind::Number,
        CardKind::King,
        CardKind::Knight,
        CardKind::Potion,
        CardKind::Dragon,
        CardKind::Wand,
    ];

    /// The card a victim discards to cancel an attack of this kind.
    ///
    /// `None` for kinds that are not attacks.
    #[must_use]
    pub const fn countered_by(self) -> Option<CardKind> {
        match self {
            CardKind::Knight => Some(CardKind::Dragon),
            CardKind::Potion => Some(CardKind::Wand),
            _ => None,
        }
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Number => "NUMBER",
            CardKind::King => "KING",
            CardKind::Knight => "KNIGHT",
            CardKind::Potion => "POTION",
            CardKind::Dragon => "DRAGON",
            CardKind::Wand => "WAND",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity within the deck.
    pub id: CardId,

    /// What the card does.
    pub kind: CardKind,

    /// Face value for `Number` cards, 0 for everything else.
    pub value: u8,
}

impl Card {
    /// Create a non-numbered card (value 0).
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind, value: 0 }
    }

    /// Create a numbered card.
    #[must_use]
    pub fn number(id: CardId, value: u8) -> Self {
        debug_assert!((1..=10).contains(&value), "number cards run 1-10");
        Self {
            id,
            kind: CardKind::Number,
            value,
        }
    }

    /// Point value used by numeric plays.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.value as u32
    }

    /// Check whether this is a numbered card.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind == CardKind::Number
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Number => write!(f, "{} {}", self.kind, self.value),
            kind => write!(f, "{}", kind),
        }
    }
}
