//! Player hands with two-phase pick/commit.
//!
//! A move first *picks* the cards it intends to spend. Picking never changes
//! the held cards. Only `remove_picked_and_redraw` commits: it discards the
//! picked cards, draws replacements and clears the pick. It is the only way
//! cards enter a hand after the initial deal.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::pile::Pile;
use crate::cards::{Card, CardKind};
use crate::core::{MoveError, PlayerId, Position, SetupError};

/// One player's held cards and pending pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    owner: PlayerId,
    cards: Vec<Card>,
    picked: SmallVec<[Card; 5]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            cards: Vec::new(),
            picked: SmallVec::new(),
        }
    }

    /// Create a hand holding `cards`.
    #[must_use]
    pub fn with_cards(owner: PlayerId, cards: Vec<Card>) -> Self {
        Self {
            owner,
            cards,
            picked: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Held cards, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards staged for the pending move.
    #[must_use]
    pub fn picked(&self) -> &[Card] {
        &self.picked
    }

    /// Check whether this exact card is held.
    ///
    /// Matches on id; a reference whose kind or value disagrees with the held
    /// card of that id does not match.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Drop the pending pick without touching the held cards.
    pub fn clear_picked(&mut self) {
        self.picked.clear();
    }

    /// Deal `n` cards from the top of `pile` into this hand.
    pub fn draw_initial(&mut self, pile: &mut Pile, n: usize) -> Result<(), SetupError> {
        let dealt = pile.deal(n)?;
        self.cards.extend(dealt);
        Ok(())
    }

    /// Stage `cards` as the pending pick.
    ///
    /// Atomic: if any card is not held, or the same card is listed twice,
    /// the pick is left empty and `StaleReference` is returned.
    pub fn pick_cards(&mut self, cards: &[Card]) -> Result<&[Card], MoveError> {
        self.picked.clear();

        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(card.id) || !self.contains(card) {
                return Err(MoveError::StaleReference);
            }
        }

        self.picked.extend(cards.iter().copied());
        Ok(&self.picked)
    }

    /// Commit the pending pick.
    ///
    /// Picked cards leave the hand for the discard stack and the same number
    /// of replacements are drawn and appended. Returns the drawn cards.
    pub fn remove_picked_and_redraw(&mut self, pile: &mut Pile) -> Vec<Card> {
        if self.picked.is_empty() {
            return Vec::new();
        }

        let picked = std::mem::take(&mut self.picked);
        self.cards.retain(|c| !picked.iter().any(|p| p.id == c.id));

        let drawn = pile.discard_and_redraw(&picked);
        self.cards.extend(drawn.iter().copied());
        drawn
    }

    /// Find the first held card of `kind` and stage it as the only pick.
    ///
    /// Returns its position. Leaves the pick untouched when no card matches.
    pub fn has_card_of_type(&mut self, kind: CardKind) -> Option<Position> {
        let card = *self.cards.iter().find(|c| c.kind == kind)?;

        self.picked.clear();
        self.picked.push(card);
        Some(Position::hand(card, self.owner))
    }
}
