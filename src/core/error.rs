//! Error types.
//!
//! Every move failure is recoverable: the engine rejects the move, leaves
//! hands and collections as they were (apart from a played defense card) and
//! keeps the turn where the rules put it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{CardId, CardKind};

/// Why a submitted move was not carried out.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("{player} moved out of turn, {on_turn} is on turn")]
    OutOfTurn { player: PlayerId, on_turn: PlayerId },
    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),
    #[error("positions do not form a wake-up, attack or numeric play")]
    InvalidShape,
    #[error("a referenced card or queen is not where the move claims")]
    StaleReference,
    #[error("{0} cannot attack their own queen")]
    SelfTarget(PlayerId),
    #[error("attack defended by {defender} with {card}")]
    Defended { defender: PlayerId, card: CardKind },
    #[error("the game is already finished")]
    GameOver,
}

/// Why a game could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("draw pile holds {available} cards, {requested} requested")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("deck contains {0} more than once")]
    DuplicateCard(CardId),
    #[error("sleeping-queen order must list every catalog queen exactly once")]
    InvalidQueenOrder,
}
