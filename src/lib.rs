//! # sleeping-queens
//!
//! Turn-resolution engine for the Sleeping Queens card game.
//!
//! ## Design Principles
//!
//! 1. **Validate, then commit**: a move is classified and checked against the
//!    table before anything changes. Rejected moves leave hands, pile and queen
//!    collections untouched.
//!
//! 2. **Identity by id**: every card and queen carries a stable id, so two
//!    NUMBER 7s are different cards and positions name exactly one of them.
//!
//! 3. **Stable slots**: queen collections never compact. A queen's slot index
//!    stays valid while other queens come and go.
//!
//! 4. **Deterministic**: all shuffling goes through a seeded `GameRng`, so a
//!    seed plus a move list replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors, positions, history, snapshot
//! - `cards`: cards, queens and the standard deck
//! - `zones`: hands, the draw/discard pile, queen collections
//! - `rules`: move classification, resolution and the end-of-game rule
//! - `events`: notifications for observers
//! - `game`: the turn controller and its builder

pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    DefensePolicy, GameConfig, GameRng, GameSnapshot, MoveError, MoveKind, MoveOutcome, MoveRecord,
    PlayerId, PlayerMap, Position, SetupError, Thresholds,
};

pub use crate::cards::{Card, CardId, CardKind, DeckComposition, Queen, QueenId, QUEEN_CATALOG};

pub use crate::zones::{Hand, Pile, QueenCollection, SlotIndex};

pub use crate::rules::{
    is_valid_numeric_play, FinishReason, FinishRule, GameOutcome, MoveResolver, StandardFinish,
    Standing,
};

pub use crate::events::{EventLog, GameEvent, GameEventListener};

pub use crate::game::{Game, GameBuilder, MoveResult, Player};
