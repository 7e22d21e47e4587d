//! Move classification.
//!
//! Positions are sorted into hand, awoken and sleeping buckets, and the bucket
//! sizes decide the move kind:
//!
//! | hand | awoken | sleeping | kind    | card            |
//! |------|--------|----------|---------|-----------------|
//! | 1    | 1      | 0        | attack  | KNIGHT / POTION |
//! | 1    | 0      | 1        | wake-up | KING            |
//! | 1+   | 0      | 0        | numeric | all NUMBER      |
//!
//! Anything else is `InvalidShape`. Classification is pure: it reads the
//! positions only, never the table.

use log::debug;
use smallvec::SmallVec;

use super::numeric::is_valid_numeric_play;
use crate::cards::{Card, CardKind, Queen};
use crate::core::{MoveError, PlayerId, Position};

/// Positions grouped by container kind, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifiedMove {
    pub hand: SmallVec<[(Card, PlayerId); 5]>,
    pub awoken: SmallVec<[(Queen, PlayerId); 2]>,
    pub sleeping: SmallVec<[Queen; 2]>,
}

impl ClassifiedMove {
    /// Bucket `positions`.
    #[must_use]
    pub fn from_positions(positions: &[Position]) -> Self {
        let mut classified = Self::default();

        for position in positions {
            match *position {
                Position::Hand { card, player } => classified.hand.push((card, player)),
                Position::AwokenQueen { queen, player } => classified.awoken.push((queen, player)),
                Position::SleepingQueen { queen } => classified.sleeping.push(queen),
            }
        }

        classified
    }

    /// Decide what move `actor` is attempting.
    pub fn shape(&self, actor: PlayerId) -> Result<MoveShape, MoveError> {
        if self.hand.iter().any(|&(_, owner)| owner != actor) {
            return Err(MoveError::InvalidShape);
        }

        let shape = match (self.hand.as_slice(), self.awoken.as_slice(), self.sleeping.as_slice()) {
            ([(card, _)], [(queen, victim)], []) => {
                if !matches!(card.kind, CardKind::Knight | CardKind::Potion) {
                    return Err(MoveError::InvalidShape);
                }
                if *victim == actor {
                    return Err(MoveError::SelfTarget(actor));
                }
                MoveShape::Attack {
                    card: *card,
                    queen: *queen,
                    victim: *victim,
                }
            }
            ([(card, _)], [], [queen]) => {
                if card.kind != CardKind::King {
                    return Err(MoveError::InvalidShape);
                }
                MoveShape::WakeUp {
                    card: *card,
                    queen: *queen,
                }
            }
            (cards @ [_, ..], [], []) => {
                if !cards.iter().all(|(c, _)| c.is_number()) {
                    return Err(MoveError::InvalidShape);
                }
                let values: SmallVec<[u32; 5]> = cards.iter().map(|(c, _)| c.points()).collect();
                if !is_valid_numeric_play(&values) {
                    return Err(MoveError::InvalidShape);
                }
                MoveShape::Numeric(cards.iter().map(|&(c, _)| c).collect())
            }
            _ => return Err(MoveError::InvalidShape),
        };

        debug!("{} attempts {:?}", actor, shape);
        Ok(shape)
    }
}

/// A well-formed move, not yet checked against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveShape {
    /// KNIGHT or POTION against `victim`'s awoken `queen`.
    Attack { card: Card, queen: Queen, victim: PlayerId },
    /// KING on a sleeping `queen`.
    WakeUp { card: Card, queen: Queen },
    /// Numbered cards forming a legal combination.
    Numeric(SmallVec<[Card; 5]>),
}
