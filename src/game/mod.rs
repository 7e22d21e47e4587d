//! Players and the turn controller.

mod game;
pub mod player;

pub use game::{Game, GameBuilder, MoveResult};
pub use player::Player;
