//! Draw and discard stacks.
//!
//! The `Pile` owns every card that is not in a hand. The top of each stack is
//! the end of its `Vec`.
//!
//! ## Reshuffle policy
//!
//! When a draw asks for more cards than the draw stack holds, the pile hands
//! out everything left in the draw stack, shuffles the whole discard stack
//! into a fresh draw stack and draws the shortfall from it. Spent cards are
//! discarded *before* drawing, so they are eligible for the reshuffle.

use log::debug;

use crate::cards::{Card, DeckComposition};
use crate::core::{GameRng, SetupError};

/// Shared draw stack and discard stack.
#[derive(Clone, Debug)]
pub struct Pile {
    draw: Vec<Card>,
    discard: Vec<Card>,
    rng: GameRng,
}

impl Pile {
    /// Build a shuffled pile from a deck composition.
    #[must_use]
    pub fn standard(deck: &DeckComposition, mut rng: GameRng) -> Self {
        let mut draw = deck.build();
        rng.shuffle(&mut draw);

        Self {
            draw,
            discard: Vec::new(),
            rng,
        }
    }

    /// Build a pile whose draw stack is exactly `cards` (top = last).
    ///
    /// `rng` is only used when the discard stack is reshuffled.
    #[must_use]
    pub fn stacked(cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw: cards,
            discard: Vec::new(),
            rng,
        }
    }

    /// Remove `n` cards from the top of the draw stack for the initial deal.
    ///
    /// Never reshuffles. Fails if fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, SetupError> {
        if self.draw.len() < n {
            return Err(SetupError::NotEnoughCards {
                requested: n,
                available: self.draw.len(),
            });
        }

        Ok(self.draw.split_off(self.draw.len() - n))
    }

    /// Put `cards` on the discard stack.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Draw up to `n` cards, reshuffling the discard stack if needed.
    ///
    /// Returns fewer than `n` cards only when draw and discard together hold
    /// fewer than `n`.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        if self.draw.len() >= n {
            return self.draw.split_off(self.draw.len() - n);
        }

        let mut drawn = std::mem::take(&mut self.draw);
        let shortfall = n - drawn.len();

        self.draw = std::mem::take(&mut self.discard);
        self.rng.shuffle(&mut self.draw);
        debug!(
            "draw stack exhausted, reshuffled {} discarded cards to draw {} more",
            self.draw.len(),
            shortfall
        );

        let take = shortfall.min(self.draw.len());
        drawn.extend(self.draw.split_off(self.draw.len() - take));
        drawn
    }

    /// Discard spent `cards` and draw the same number of replacements.
    pub fn discard_and_redraw(&mut self, cards: &[Card]) -> Vec<Card> {
        self.discard(cards.iter().copied());
        self.draw(cards.len())
    }

    /// Cards left in the draw stack.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// Cards in the discard stack.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards held by the pile (draw + discard).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// The next `n` cards to be drawn, in draw-stack order (top = last).
    #[must_use]
    pub fn top_cards(&self, n: usize) -> &[Card] {
        &self.draw[self.draw.len().saturating_sub(n)..]
    }

    /// The discard stack, bottom first.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discard
    }
}
