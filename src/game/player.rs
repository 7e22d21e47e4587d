//! A seated player: one hand and one awoken-queen collection.

use crate::core::PlayerId;
use crate::zones::{Hand, QueenCollection};

/// One seat at the table.
///
/// Created at setup with a dealt hand and lives for the whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
    awoken: QueenCollection,
}

impl Player {
    /// Create a player with an empty hand and no queens.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(id),
            awoken: QueenCollection::awoken(id),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn awoken(&self) -> &QueenCollection {
        &self.awoken
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn awoken_mut(&mut self) -> &mut QueenCollection {
        &mut self.awoken
    }

    /// Points over awoken queens.
    #[must_use]
    pub fn count_points(&self) -> u32 {
        self.awoken.count_points()
    }

    /// Number of awoken queens.
    #[must_use]
    pub fn count_queens(&self) -> usize {
        self.awoken.count_queens()
    }
}
