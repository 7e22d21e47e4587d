//! End-of-game rules.
//!
//! The turn controller asks its `FinishRule` after every move that changed
//! the table. A rule sees each seat's standing plus whether the sleeping pool
//! is empty and either ends the game with a `GameOutcome` or lets it run.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Thresholds};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// Every queen is awake; highest score wins.
    SleepingPoolEmpty,
    /// A player reached the points threshold.
    PointsThreshold,
    /// A player reached the queen-count threshold.
    QueenThreshold,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    /// The winner's points when the game ended.
    pub score: u32,
    pub reason: FinishReason,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// One seat's score line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub points: u32,
    pub queens: usize,
}

/// End-of-game condition.
///
/// `standings` is ordered by seat index.
pub trait FinishRule: Send {
    /// Returns `Some(outcome)` if the game has ended, `None` if it continues.
    fn check(&self, standings: &[Standing], sleeping_empty: bool) -> Option<GameOutcome>;
}

/// Threshold rule used by the standard game.
///
/// 1. Sleeping pool empty: highest points wins, ties to the lowest seat.
/// 2. Otherwise the lowest seat whose points or queen count meets its
///    threshold wins. Points are checked before queens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardFinish {
    pub thresholds: Thresholds,
}

impl StandardFinish {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }
}

impl FinishRule for StandardFinish {
    fn check(&self, standings: &[Standing], sleeping_empty: bool) -> Option<GameOutcome> {
        if sleeping_empty {
            // A later seat takes the lead only with strictly more points.
            let best = standings
                .iter()
                .fold(None::<&Standing>, |best, s| match best {
                    Some(b) if b.points >= s.points => Some(b),
                    _ => Some(s),
                })?;

            return Some(GameOutcome {
                winner: best.player,
                score: best.points,
                reason: FinishReason::SleepingPoolEmpty,
            });
        }

        standings.iter().find_map(|s| {
            let reason = if s.points >= self.thresholds.points {
                FinishReason::PointsThreshold
            } else if s.queens >= self.thresholds.queens {
                FinishReason::QueenThreshold
            } else {
                return None;
            };

            Some(GameOutcome {
                winner: s.player,
                score: s.points,
                reason,
            })
        })
    }
}
