//! Move positions.
//!
//! A move is submitted as a list of `Position`s, each naming one card or queen
//! and the container it is claimed to sit in. Positions are transient: the
//! command layer builds them per move from the current state and the engine
//! checks every claim before changing anything.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Queen};

/// A reference to a card or queen inside one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// A card in `player`'s hand.
    Hand { card: Card, player: PlayerId },
    /// A queen in `player`'s awoken collection.
    AwokenQueen { queen: Queen, player: PlayerId },
    /// A queen in the shared sleeping pool.
    SleepingQueen { queen: Queen },
}

impl Position {
    /// Reference a hand card.
    #[must_use]
    pub const fn hand(card: Card, player: PlayerId) -> Self {
        Self::Hand { card, player }
    }

    /// Reference an awoken queen.
    #[must_use]
    pub const fn awoken(queen: Queen, player: PlayerId) -> Self {
        Self::AwokenQueen { queen, player }
    }

    /// Reference a sleeping queen.
    #[must_use]
    pub const fn sleeping(queen: Queen) -> Self {
        Self::SleepingQueen { queen }
    }

    /// The seat owning the referenced container, `None` for the sleeping pool.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match *self {
            Position::Hand { player, .. } | Position::AwokenQueen { player, .. } => Some(player),
            Position::SleepingQueen { .. } => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Hand { card, player } => write!(f, "{} from {}'s hand", card, player),
            Position::AwokenQueen { queen, player } => write!(f, "{} awoken by {}", queen, player),
            Position::SleepingQueen { queen } => write!(f, "sleeping {}", queen),
        }
    }
}
