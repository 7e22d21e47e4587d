//! Event notifications for observers of a game.

pub mod event;

pub use event::{EventLog, GameEvent, GameEventListener};
