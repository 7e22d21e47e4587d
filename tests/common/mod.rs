//! Shared helpers for scenario tests: stacked decks and card lookups.

#![allow(dead_code)]

use sleeping_queens::{Card, CardKind, DeckComposition, Game, PlayerId, Position, Queen};

/// Builds a draw stack with chosen hands on top.
pub struct DeckStacker {
    remaining: Vec<Card>,
}

impl DeckStacker {
    pub fn new(deck: &DeckComposition) -> Self {
        Self { remaining: deck.build() }
    }

    pub fn standard() -> Self {
        Self::new(&DeckComposition::standard())
    }

    /// Remove one card of `kind` from the unassigned cards.
    pub fn take(&mut self, kind: CardKind) -> Card {
        let i = self
            .remaining
            .iter()
            .position(|c| c.kind == kind)
            .unwrap_or_else(|| panic!("no {} left in deck", kind));
        self.remaining.remove(i)
    }

    /// Remove one NUMBER card of `value`.
    pub fn number(&mut self, value: u8) -> Card {
        let i = self
            .remaining
            .iter()
            .position(|c| c.is_number() && c.value == value)
            .unwrap_or_else(|| panic!("no NUMBER {} left in deck", value));
        self.remaining.remove(i)
    }

    /// Remove the given kinds, in order.
    pub fn hand(&mut self, kinds: &[CardKind]) -> Vec<Card> {
        kinds.iter().map(|&k| self.take(k)).collect()
    }

    /// Lay out the draw stack: `hands[0]` is dealt first, then `upcoming`
    /// is drawn in order, then the remaining numbers, then everything else.
    pub fn deck(mut self, hands: &[Vec<Card>], upcoming: &[Card]) -> Vec<Card> {
        let (numbers, others): (Vec<Card>, Vec<Card>) =
            self.remaining.drain(..).partition(|c| c.is_number());

        let mut stack = others;
        stack.extend(numbers);
        stack.extend(upcoming.iter().rev().copied());
        for hand in hands.iter().rev() {
            stack.extend(hand.iter().copied());
        }
        stack
    }
}

pub fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

pub fn queen(name: &str) -> Queen {
    Queen::by_name(name).unwrap_or_else(|| panic!("unknown queen {}", name))
}

/// First card of `kind` held by `seat`.
pub fn held(game: &Game, seat: PlayerId, kind: CardKind) -> Card {
    *game
        .hand(seat)
        .and_then(|h| h.cards().iter().find(|c| c.kind == kind))
        .unwrap_or_else(|| panic!("{} holds no {}", seat, kind))
}

/// A KING from `seat`'s hand on sleeping `queen`.
pub fn wake(game: &Game, seat: PlayerId, queen: Queen) -> Vec<Position> {
    vec![
        Position::hand(held(game, seat, CardKind::King), seat),
        Position::sleeping(queen),
    ]
}

/// A single NUMBER card from `seat`'s hand.
pub fn discard_number(game: &Game, seat: PlayerId) -> Vec<Position> {
    vec![Position::hand(held(game, seat, CardKind::Number), seat)]
}

/// `kind` from `seat`'s hand against `victim`'s awoken `queen`.
pub fn attack(game: &Game, seat: PlayerId, kind: CardKind, victim: PlayerId, queen: Queen) -> Vec<Position> {
    vec![
        Position::hand(held(game, seat, kind), seat),
        Position::awoken(queen, victim),
    ]
}
