//! Read-only game view for observers.
//!
//! `GameSnapshot` is rebuilt by the turn controller after every move that
//! changes the table. Collections are `im` vectors, so handing out clones is
//! cheap. `encode`/`decode` ship the snapshot as `bincode` bytes.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, Queen};

/// Observable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Number of seats.
    pub player_count: usize,

    /// Seat that moves next.
    pub on_turn: PlayerId,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Sleeping-pool slots.
    pub sleeping: Vector<Option<Queen>>,

    /// Awoken slots per seat.
    pub awoken: PlayerMap<Vector<Option<Queen>>>,

    /// Held cards per seat.
    pub hands: PlayerMap<Vector<Card>>,

    /// Points per seat.
    pub scores: PlayerMap<u32>,

    /// Cards left in the draw stack.
    pub draw_len: usize,

    /// Cards in the discard stack.
    pub discard_len: usize,

    /// Whether the game has ended.
    pub finished: bool,
}

impl GameSnapshot {
    /// Number of cards `player` holds.
    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.hands.get(player).map_or(0, Vector::len)
    }

    /// Awoken queens held by `player`.
    #[must_use]
    pub fn queen_count(&self, player: PlayerId) -> usize {
        self.awoken
            .get(player)
            .map_or(0, |slots| slots.iter().flatten().count())
    }

    /// Queens still asleep.
    #[must_use]
    pub fn sleeping_count(&self) -> usize {
        self.sleeping.iter().flatten().count()
    }

    /// Every card accounted for: hands plus draw and discard stacks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(|(_, h)| h.len()).sum::<usize>() + self.draw_len + self.discard_len
    }

    /// Serialize to `bincode` bytes.
    pub fn encode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Deserialize from `bincode` bytes.
    pub fn decode(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
