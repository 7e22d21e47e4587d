//! Resolved moves and move history.
//!
//! `MoveKind` describes what a successful move did. `MoveRecord` is the
//! history entry written for every move the engine carried out, including
//! attacks that were defended.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardKind, Queen};

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Numbered cards discarded and redrawn.
    Numeric { cards: usize },
    /// A king woke `queen` from the sleeping pool.
    WakeUp { queen: Queen },
    /// A knight moved `queen` from `victim` to the attacker.
    Steal { victim: PlayerId, queen: Queen },
    /// A potion sent `queen` from `victim` back to the sleeping pool.
    PutToSleep { victim: PlayerId, queen: Queen },
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveKind::Numeric { cards } => write!(f, "played {} numbered card(s)", cards),
            MoveKind::WakeUp { queen } => write!(f, "woke {}", queen),
            MoveKind::Steal { victim, queen } => write!(f, "stole {} from {}", queen, victim),
            MoveKind::PutToSleep { victim, queen } => {
                write!(f, "put {}'s {} to sleep", victim, queen)
            }
        }
    }
}

/// How a carried-out move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move took effect.
    Played(MoveKind),
    /// The victim cancelled an attack with a defense card.
    Defended { defender: PlayerId, card: CardKind },
}

/// History entry for one carried-out move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,

    /// The acting player.
    pub player: PlayerId,

    /// What happened.
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, outcome: MoveOutcome) -> Self {
        Self {
            turn,
            player,
            outcome,
        }
    }
}
