//! Core engine types: players, RNG, configuration, errors, positions,
//! move records and the observer snapshot.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{MoveKind, MoveOutcome, MoveRecord};
pub use config::{DefensePolicy, GameConfig, Thresholds};
pub use error::{MoveError, SetupError};
pub use player::{PlayerId, PlayerMap};
pub use position::Position;
pub use rng::GameRng;
pub use state::GameSnapshot;
