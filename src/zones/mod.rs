//! Card and queen containers.
//!
//! ## Key Types
//!
//! - `Hand`: a player's held cards with a two-phase pick/commit
//! - `Pile`: shared draw and discard stacks
//! - `QueenCollection`: slot array of queens with stable indices

pub mod hand;
pub mod pile;
pub mod queens;

pub use hand::Hand;
pub use pile::Pile;
pub use queens::{QueenCollection, SlotIndex};
