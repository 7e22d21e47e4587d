//! Game rules: move classification, move resolution and the end-of-game check.
//!
//! The turn controller in `game` owns the state; everything here either reads
//! positions (`shape`, `numeric`) or works on a borrowed `Table`.

pub mod finish;
pub mod numeric;
pub mod resolver;
pub mod shape;

pub use finish::{FinishReason, FinishRule, GameOutcome, StandardFinish, Standing};
pub use numeric::is_valid_numeric_play;
pub use resolver::{MoveResolver, Resolution, Table};
pub use shape::{ClassifiedMove, MoveShape};
