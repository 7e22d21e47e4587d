//! Game configuration.
//!
//! `GameConfig` collects every setup parameter: seat count, seed, hand size,
//! deck composition, end-of-game thresholds and how defended attacks are
//! treated. Build it with `GameConfig::new` and the `with_*` methods.

use serde::{Deserialize, Serialize};

use crate::cards::DeckComposition;

/// Fewest seats a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game supports.
pub const MAX_PLAYERS: usize = 5;

/// Cards dealt to each player at setup and held thereafter.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Clamp a requested seat count into the supported range.
///
/// Values outside `MIN_PLAYERS..=MAX_PLAYERS` fall back to 2.
///
/// ```
/// use sleeping_queens::core::config::clamp_player_count;
///
/// assert_eq!(clamp_player_count(4), 4);
/// assert_eq!(clamp_player_count(1), 2);
/// assert_eq!(clamp_player_count(9), 2);
/// ```
#[must_use]
pub fn clamp_player_count(requested: usize) -> usize {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&requested) {
        requested
    } else {
        MIN_PLAYERS
    }
}

/// What happens to the attacker when the victim plays a defense card.
///
/// The victim's defense card is always discarded and redrawn, and the move
/// always reports `MoveError::Defended`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefensePolicy {
    /// The attacker's hand is untouched and the attacker stays on turn.
    #[default]
    AttackerKeepsTurn,
    /// The attacker's card is spent (discarded and redrawn) and the turn
    /// passes to the next seat.
    AttackerLosesTurn,
}

/// Score or queen count at which a player wins outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Points needed to win.
    pub points: u32,
    /// Awoken queens needed to win.
    pub queens: usize,
}

impl Thresholds {
    /// Standard thresholds: (50, 5) for 2-3 players, (40, 4) for 4-5.
    #[must_use]
    pub fn for_player_count(player_count: usize) -> Self {
        if player_count <= 3 {
            Self { points: 50, queens: 5 }
        } else {
            Self { points: 40, queens: 4 }
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-5).
    pub player_count: usize,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Cards per hand.
    pub hand_size: usize,

    /// Deck contents.
    pub deck: DeckComposition,

    /// End-of-game thresholds.
    pub thresholds: Thresholds,

    /// Treatment of defended attacks.
    pub defense: DefensePolicy,
}

impl GameConfig {
    /// Create a configuration for `player_count` seats.
    ///
    /// The count is clamped with [`clamp_player_count`]; thresholds follow the
    /// clamped count.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let player_count = clamp_player_count(player_count);

        Self {
            player_count,
            seed: 0,
            hand_size: DEFAULT_HAND_SIZE,
            deck: DeckComposition::standard(),
            thresholds: Thresholds::for_player_count(player_count),
            defense: DefensePolicy::default(),
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckComposition) -> Self {
        self.deck = deck;
        self
    }

    /// Override the end-of-game thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the defended-attack policy.
    #[must_use]
    pub fn with_defense_policy(mut self, defense: DefensePolicy) -> Self {
        self.defense = defense;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}
