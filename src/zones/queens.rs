//! Slot-based queen collections.
//!
//! A `QueenCollection` is an array of slots that each hold a queen or nothing.
//! Removing a queen empties its slot instead of compacting, so the slot index
//! of every other queen stays valid for the rest of the turn. Adding fills the
//! first empty slot and only grows the array when none is free.
//!
//! Each player owns one collection of awoken queens; the game owns one shared
//! collection of sleeping queens.

use serde::{Deserialize, Serialize};

use crate::cards::Queen;
use crate::core::PlayerId;

/// Index of a slot within a `QueenCollection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotIndex(pub usize);

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Slot array of queens.
///
/// ## Usage
///
/// ```
/// use sleeping_queens::cards::Queen;
/// use sleeping_queens::zones::{QueenCollection, SlotIndex};
///
/// let rose = Queen::by_name("Rose Queen").unwrap();
/// let moon = Queen::by_name("Moon Queen").unwrap();
///
/// let mut pool = QueenCollection::sleeping();
/// pool.add_queen(rose);
/// pool.add_queen(moon);
///
/// assert_eq!(pool.remove_queen(&rose), Some(rose));
/// assert_eq!(pool.get(SlotIndex(0)), None);
/// assert_eq!(pool.get(SlotIndex(1)), Some(moon));
/// assert_eq!(pool.remove_queen(&rose), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueenCollection {
    owner: Option<PlayerId>,
    slots: Vec<Option<Queen>>,
}

impl QueenCollection {
    /// Create the shared sleeping pool.
    #[must_use]
    pub fn sleeping() -> Self {
        Self::default()
    }

    /// Create `player`'s awoken collection.
    #[must_use]
    pub fn awoken(player: PlayerId) -> Self {
        Self {
            owner: Some(player),
            slots: Vec::new(),
        }
    }

    /// Owning seat, `None` for the sleeping pool.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Put `queen` in the first empty slot, appending a slot if none is free.
    ///
    /// Returns the slot the queen landed in.
    pub fn add_queen(&mut self, queen: Queen) -> SlotIndex {
        debug_assert!(!self.contains(&queen), "{} is already in this collection", queen);

        if let Some(i) = self.slots.iter().position(Option::is_none) {
            self.slots[i] = Some(queen);
            SlotIndex(i)
        } else {
            self.slots.push(Some(queen));
            SlotIndex(self.slots.len() - 1)
        }
    }

    /// Empty the slot holding `queen`.
    ///
    /// Returns the queen, or `None` if it is not in this collection.
    pub fn remove_queen(&mut self, queen: &Queen) -> Option<Queen> {
        let slot = self.slot_of(queen)?;
        self.slots[slot.0].take()
    }

    /// The queen in `slot`, if the slot exists and is occupied.
    #[must_use]
    pub fn get(&self, slot: SlotIndex) -> Option<Queen> {
        self.slots.get(slot.0).copied().flatten()
    }

    /// The slot holding `queen`. Matches the whole value, so a queen with the
    /// right id but the wrong points is not found.
    #[must_use]
    pub fn slot_of(&self, queen: &Queen) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|s| s.as_ref() == Some(queen))
            .map(SlotIndex)
    }

    /// Check whether `queen` is in this collection.
    #[must_use]
    pub fn contains(&self, queen: &Queen) -> bool {
        self.slot_of(queen).is_some()
    }

    /// True iff every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn count_queens(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Sum of points over occupied slots.
    #[must_use]
    pub fn count_points(&self) -> u32 {
        self.slots.iter().flatten().map(|q| q.points).sum()
    }

    /// Number of slots, occupied or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Queen>] {
        &self.slots
    }

    /// Occupied slots in order.
    pub fn queens(&self) -> impl Iterator<Item = (SlotIndex, Queen)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|q| (SlotIndex(i), q)))
    }
}
