//! Turn controller.
//!
//! `Game` owns the table (players, sleeping pool, pile) and serializes moves:
//! only the seat on turn may play, a successful move passes the turn to the
//! next seat, and the end-of-game rule is checked after every move that
//! changed the table. Once finished, every submission is rejected.
//!
//! ## Example
//!
//! ```
//! use sleeping_queens::core::{GameConfig, PlayerId};
//! use sleeping_queens::game::{Game, MoveResult};
//!
//! let mut game = Game::new(GameConfig::new(3).with_seed(7)).unwrap();
//! assert_eq!(game.on_turn(), PlayerId::new(0));
//!
//! // Seat 1 is not on turn: rejected without touching the table.
//! let before = game.snapshot().clone();
//! assert_eq!(game.play(PlayerId::new(1), &[]), MoveResult::OutOfTurn);
//! assert_eq!(game.snapshot(), &before);
//! ```

use im::Vector;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use super::player::Player;
use crate::cards::{Card, Queen, QUEEN_CATALOG};
use crate::core::config::clamp_player_count;
use crate::core::{
    GameConfig, GameRng, GameSnapshot, MoveError, MoveKind, MoveOutcome, MoveRecord, PlayerId,
    PlayerMap, Position, SetupError,
};
use crate::events::GameEventListener;
use crate::rules::{
    FinishRule, GameOutcome, MoveResolver, Resolution, StandardFinish, Standing, Table,
};
use crate::zones::{Hand, Pile, QueenCollection};

/// Result of `Game::play`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move took effect and the turn passed.
    Success(MoveKind),
    /// The move was rejected or defended.
    Failure(MoveError),
    /// The submitting seat is not on turn (or not seated at all).
    OutOfTurn,
}

impl MoveResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, MoveResult::Success(_))
    }
}

impl From<Result<MoveKind, MoveError>> for MoveResult {
    fn from(result: Result<MoveKind, MoveError>) -> Self {
        match result {
            Ok(kind) => MoveResult::Success(kind),
            Err(MoveError::OutOfTurn { .. } | MoveError::UnknownPlayer(_)) => MoveResult::OutOfTurn,
            Err(err) => MoveResult::Failure(err),
        }
    }
}

/// One game of Sleeping Queens.
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    sleeping: QueenCollection,
    pile: Pile,
    resolver: MoveResolver,
    finish: Box<dyn FinishRule>,
    on_turn: PlayerId,
    turn_number: u32,
    outcome: Option<GameOutcome>,
    history: Vector<MoveRecord>,
    snapshot: GameSnapshot,
    listeners: Vec<Box<dyn GameEventListener>>,
}

impl Game {
    /// Set up a shuffled game from `config`.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        GameBuilder::new(config).build()
    }

    /// Submit `player`'s move.
    ///
    /// Rejections never change the table. See [`Game::try_play`] for the
    /// error detail behind `OutOfTurn`.
    pub fn play(&mut self, player: PlayerId, positions: &[Position]) -> MoveResult {
        self.try_play(player, positions).into()
    }

    /// Submit `player`'s move, returning the full error on rejection.
    ///
    /// A defended attack returns `Err(MoveError::Defended)`; whether the turn
    /// passes anyway depends on the configured `DefensePolicy`.
    pub fn try_play(&mut self, player: PlayerId, positions: &[Position]) -> Result<MoveKind, MoveError> {
        if self.outcome.is_some() {
            warn!("{} submitted a move after the game finished", player);
            return Err(MoveError::GameOver);
        }
        if !self.players.contains(player) {
            warn!("{} is not seated", player);
            return Err(MoveError::UnknownPlayer(player));
        }
        if player != self.on_turn {
            warn!("{} moved out of turn, {} is on turn", player, self.on_turn);
            return Err(MoveError::OutOfTurn {
                player,
                on_turn: self.on_turn,
            });
        }

        let mut table = Table {
            players: &mut self.players,
            sleeping: &mut self.sleeping,
            pile: &mut self.pile,
        };
        let resolution = self.resolver.resolve(player, positions, &mut table).map_err(|err| {
            debug!("{} move rejected: {}", player, err);
            err
        })?;

        match resolution {
            Resolution::Played(kind) => {
                self.record(player, MoveOutcome::Played(kind));
                self.end_turn();
                Ok(kind)
            }
            Resolution::Defended {
                defender,
                card,
                turn_consumed,
            } => {
                self.record(player, MoveOutcome::Defended { defender, card });
                if turn_consumed {
                    self.end_turn();
                } else {
                    self.snapshot = self.capture();
                }
                Err(MoveError::Defended { defender, card })
            }
        }
    }

    fn record(&mut self, player: PlayerId, outcome: MoveOutcome) {
        self.history
            .push_back(MoveRecord::new(self.turn_number, player, outcome));
    }

    fn end_turn(&mut self) {
        self.on_turn = self.on_turn.next(self.players.player_count());
        self.turn_number += 1;
        self.outcome = self.finish.check(&self.standings(), self.sleeping.is_empty());
        self.snapshot = self.capture();

        match self.outcome {
            None => {
                info!("turn advanced to {}", self.on_turn);
                for listener in &mut self.listeners {
                    listener.on_turn_advanced(self.on_turn);
                }
            }
            Some(outcome) => {
                info!(
                    "game finished, winner {} with score {} ({:?})",
                    outcome.winner, outcome.score, outcome.reason
                );
                for listener in &mut self.listeners {
                    listener.on_game_finished(&outcome);
                }
            }
        }
    }

    fn capture(&self) -> GameSnapshot {
        snapshot_of(
            &self.players,
            &self.sleeping,
            &self.pile,
            self.on_turn,
            self.turn_number,
            self.outcome.is_some(),
        )
    }

    /// Score line of every seat, by seat index.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|(id, p)| Standing {
                player: id,
                points: p.count_points(),
                queens: p.count_queens(),
            })
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seat that moves next.
    #[must_use]
    pub fn on_turn(&self) -> PlayerId {
        self.on_turn
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn hand(&self, id: PlayerId) -> Option<&Hand> {
        self.players.get(id).map(Player::hand)
    }

    #[must_use]
    pub fn sleeping_queens(&self) -> &QueenCollection {
        &self.sleeping
    }

    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Read-only view, refreshed after every move that changed the table.
    #[must_use]
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Every carried-out move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}

fn snapshot_of(
    players: &PlayerMap<Player>,
    sleeping: &QueenCollection,
    pile: &Pile,
    on_turn: PlayerId,
    turn_number: u32,
    finished: bool,
) -> GameSnapshot {
    GameSnapshot {
        player_count: players.player_count(),
        on_turn,
        turn_number,
        sleeping: sleeping.slots().iter().copied().collect(),
        awoken: players.map(|p| p.awoken().slots().iter().copied().collect()),
        hands: players.map(|p| p.hand().cards().iter().copied().collect()),
        scores: players.map(Player::count_points),
        draw_len: pile.draw_len(),
        discard_len: pile.discard_len(),
        finished,
    }
}

/// Assembles a `Game`.
///
/// By default the deck comes from `config.deck`, the sleeping pool is
/// shuffled, and the end of game follows `StandardFinish` with the
/// configured thresholds.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    queen_order: Option<Vec<Queen>>,
    finish: Option<Box<dyn FinishRule>>,
    listeners: Vec<Box<dyn GameEventListener>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            deck: None,
            queen_order: None,
            finish: None,
            listeners: Vec::new(),
        }
    }

    /// Use `cards` as the draw stack, unshuffled (top = last).
    ///
    /// Hands are dealt from the top, seat 0 first.
    #[must_use]
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = Some(cards);
        self
    }

    /// Lay out the sleeping pool in this order instead of shuffling.
    ///
    /// Must list every catalog queen exactly once.
    #[must_use]
    pub fn sleeping_order(mut self, queens: Vec<Queen>) -> Self {
        self.queen_order = Some(queens);
        self
    }

    /// Replace the end-of-game rule.
    #[must_use]
    pub fn finish_rule(mut self, rule: impl FinishRule + 'static) -> Self {
        self.finish = Some(Box::new(rule));
        self
    }

    /// Register an event listener.
    #[must_use]
    pub fn listener(mut self, listener: impl GameEventListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Deal hands and build the game.
    pub fn build(self) -> Result<Game, SetupError> {
        let mut config = self.config;
        config.player_count = clamp_player_count(config.player_count);

        let rng = GameRng::new(config.seed);

        let mut pile = match self.deck {
            Some(cards) => {
                let mut seen = FxHashSet::default();
                if let Some(dup) = cards.iter().find(|c| !seen.insert(c.id)) {
                    return Err(SetupError::DuplicateCard(dup.id));
                }
                Pile::stacked(cards, rng.for_context("deck"))
            }
            None => Pile::standard(&config.deck, rng.for_context("deck")),
        };

        let mut sleeping = QueenCollection::sleeping();
        let queens = match self.queen_order {
            Some(order) => {
                let distinct: FxHashSet<_> = order.iter().map(|q| q.id).collect();
                if order.len() != QUEEN_CATALOG.len()
                    || distinct.len() != order.len()
                    || !order.iter().all(Queen::is_catalog)
                {
                    return Err(SetupError::InvalidQueenOrder);
                }
                order
            }
            None => {
                let mut all: Vec<Queen> = Queen::all().collect();
                rng.for_context("queens").shuffle(&mut all);
                all
            }
        };
        for queen in queens {
            sleeping.add_queen(queen);
        }

        let needed = config.hand_size * config.player_count;
        if pile.draw_len() < needed {
            return Err(SetupError::NotEnoughCards {
                requested: needed,
                available: pile.draw_len(),
            });
        }

        let mut players = PlayerMap::new(config.player_count, Player::new);
        for (_, player) in players.iter_mut() {
            player.hand_mut().draw_initial(&mut pile, config.hand_size)?;
        }

        info!(
            "new game: {} players, seed {}, {} cards in draw pile",
            config.player_count,
            config.seed,
            pile.draw_len()
        );

        let finish: Box<dyn FinishRule> = match self.finish {
            Some(rule) => rule,
            None => Box::new(StandardFinish::new(config.thresholds)),
        };
        let snapshot = snapshot_of(&players, &sleeping, &pile, PlayerId::new(0), 1, false);

        Ok(Game {
            resolver: MoveResolver::new(config.defense),
            finish,
            config,
            players,
            sleeping,
            pile,
            on_turn: PlayerId::new(0),
            turn_number: 1,
            outcome: None,
            history: Vector::new(),
            snapshot,
            listeners: self.listeners,
        })
    }
}
