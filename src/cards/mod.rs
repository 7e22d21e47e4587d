//! Card and queen definitions.
//!
//! ## Key Types
//!
//! - `Card`, `CardId`, `CardKind`: playable hand cards
//! - `Queen`, `QueenId`, `QUEEN_CATALOG`: queen tokens and their points
//! - `DeckComposition`: how many of each card a deck holds
//!
//! All of these are immutable `Copy` values. Identity is the id, never the
//! kind/value pair.

pub mod card;
pub mod deck;
pub mod queen;

pub use card::{Card, CardId, CardKind};
pub use deck::DeckComposition;
pub use queen::{Queen, QueenId, QUEEN_CATALOG};
