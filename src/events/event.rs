//! Game events and listeners.
//!
//! The turn controller fires a `GameEvent` when the turn passes and when the
//! game ends. Observers register a `GameEventListener` on the builder.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameOutcome;

/// Something observers care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `player` is now on turn.
    TurnAdvanced { player: PlayerId },
    /// The game ended.
    GameFinished { winner: PlayerId, score: u32 },
}

impl From<&GameOutcome> for GameEvent {
    fn from(outcome: &GameOutcome) -> Self {
        GameEvent::GameFinished {
            winner: outcome.winner,
            score: outcome.score,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnAdvanced { player } => write!(f, "turn advanced to {}", player),
            GameEvent::GameFinished { winner, score } => {
                write!(f, "game finished, winner {} with score {}", winner, score)
            }
        }
    }
}

/// Receives events from one game.
///
/// Both methods default to doing nothing.
pub trait GameEventListener: Send {
    fn on_turn_advanced(&mut self, _player: PlayerId) {}

    fn on_game_finished(&mut self, _outcome: &GameOutcome) {}
}

/// Listener that records every event, in order.
///
/// Clones share the same log, so keep one clone and hand the other to the
/// builder.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, event: GameEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl GameEventListener for EventLog {
    fn on_turn_advanced(&mut self, player: PlayerId) {
        self.push(GameEvent::TurnAdvanced { player });
    }

    fn on_game_finished(&mut self, outcome: &GameOutcome) {
        self.push(GameEvent::from(outcome));
    }
}

/// Forwards events over a channel. A closed receiver is ignored.
impl GameEventListener for Sender<GameEvent> {
    fn on_turn_advanced(&mut self, player: PlayerId) {
        let _ = self.send(GameEvent::TurnAdvanced { player });
    }

    fn on_game_finished(&mut self, outcome: &GameOutcome) {
        let _ = self.send(GameEvent::from(outcome));
    }
}
