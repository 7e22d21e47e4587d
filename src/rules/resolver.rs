//! Applying a classified move to the table.
//!
//! Every check runs before the first mutation: a move either fails with the
//! table unchanged (the acting hand's pick is cleared) or commits in full.
//! The single exception is a defended attack, which always spends the
//! victim's defense card.

use log::{debug, info};

use super::shape::{ClassifiedMove, MoveShape};
use crate::cards::{Card, CardKind, Queen};
use crate::core::{DefensePolicy, MoveError, MoveKind, PlayerId, PlayerMap, Position};
use crate::game::Player;
use crate::zones::{Pile, QueenCollection};

/// Mutable view of everything a move can touch.
pub struct Table<'a> {
    pub players: &'a mut PlayerMap<Player>,
    pub sleeping: &'a mut QueenCollection,
    pub pile: &'a mut Pile,
}

/// What a resolved move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The move took effect.
    Played(MoveKind),
    /// The victim spent `card` to cancel the attack.
    ///
    /// `turn_consumed` tells the turn controller whether the attacker's turn
    /// ends anyway.
    Defended {
        defender: PlayerId,
        card: CardKind,
        turn_consumed: bool,
    },
}

/// Validates and applies moves for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveResolver {
    defense: DefensePolicy,
}

impl MoveResolver {
    #[must_use]
    pub fn new(defense: DefensePolicy) -> Self {
        Self { defense }
    }

    #[must_use]
    pub fn defense_policy(&self) -> DefensePolicy {
        self.defense
    }

    /// Classify `positions` and apply them as `actor`'s move.
    pub fn resolve(
        &self,
        actor: PlayerId,
        positions: &[Position],
        table: &mut Table<'_>,
    ) -> Result<Resolution, MoveError> {
        if !table.players.contains(actor) {
            return Err(MoveError::UnknownPlayer(actor));
        }

        let shape = ClassifiedMove::from_positions(positions).shape(actor)?;

        match shape {
            MoveShape::WakeUp { card, queen } => self.wake_up(actor, card, queen, table),
            MoveShape::Attack { card, queen, victim } => self.attack(actor, card, queen, victim, table),
            MoveShape::Numeric(cards) => self.numeric(actor, &cards, table),
        }
    }

    fn wake_up(
        &self,
        actor: PlayerId,
        card: Card,
        queen: Queen,
        table: &mut Table<'_>,
    ) -> Result<Resolution, MoveError> {
        let player = &mut table.players[actor];
        player.hand_mut().pick_cards(&[card])?;

        let Some(queen) = table.sleeping.remove_queen(&queen) else {
            player.hand_mut().clear_picked();
            return Err(MoveError::StaleReference);
        };

        player.awoken_mut().add_queen(queen);
        player.hand_mut().remove_picked_and_redraw(table.pile);

        info!("{} woke {}", actor, queen);
        Ok(Resolution::Played(MoveKind::WakeUp { queen }))
    }

    fn attack(
        &self,
        actor: PlayerId,
        card: Card,
        queen: Queen,
        victim: PlayerId,
        table: &mut Table<'_>,
    ) -> Result<Resolution, MoveError> {
        let (attacker, target) = table
            .players
            .pair_mut(actor, victim)
            .ok_or(MoveError::StaleReference)?;

        attacker.hand_mut().pick_cards(&[card])?;

        if !target.awoken().contains(&queen) {
            attacker.hand_mut().clear_picked();
            return Err(MoveError::StaleReference);
        }

        if let Some(counter) = card.kind.countered_by() {
            if target.hand_mut().has_card_of_type(counter).is_some() {
                target.hand_mut().remove_picked_and_redraw(table.pile);

                let turn_consumed = match self.defense {
                    DefensePolicy::AttackerKeepsTurn => {
                        attacker.hand_mut().clear_picked();
                        false
                    }
                    DefensePolicy::AttackerLosesTurn => {
                        attacker.hand_mut().remove_picked_and_redraw(table.pile);
                        true
                    }
                };

                info!("{} defended {} with {}", victim, card, counter);
                return Ok(Resolution::Defended {
                    defender: victim,
                    card: counter,
                    turn_consumed,
                });
            }
        }

        let Some(queen) = target.awoken_mut().remove_queen(&queen) else {
            attacker.hand_mut().clear_picked();
            return Err(MoveError::StaleReference);
        };

        let kind = if card.kind == CardKind::Knight {
            attacker.awoken_mut().add_queen(queen);
            MoveKind::Steal { victim, queen }
        } else {
            table.sleeping.add_queen(queen);
            MoveKind::PutToSleep { victim, queen }
        };
        attacker.hand_mut().remove_picked_and_redraw(table.pile);

        info!("{} {}", actor, kind);
        Ok(Resolution::Played(kind))
    }

    fn numeric(
        &self,
        actor: PlayerId,
        cards: &[Card],
        table: &mut Table<'_>,
    ) -> Result<Resolution, MoveError> {
        let hand = table.players[actor].hand_mut();
        hand.pick_cards(cards)?;
        let drawn = hand.remove_picked_and_redraw(table.pile);

        debug!("{} discarded {} numbered card(s), drew {}", actor, cards.len(), drawn.len());
        Ok(Resolution::Played(MoveKind::Numeric { cards: cards.len() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::GameRng;
    use crate::zones::Hand;

    struct Fixture {
        players: PlayerMap<Player>,
        sleeping: QueenCollection,
        pile: Pile,
    }

    impl Fixture {
        /// Two players with the given hands; the pile refills with NUMBER 1s.
        fn new(hand0: Vec<Card>, hand1: Vec<Card>) -> Self {
            let mut players = PlayerMap::new(2, Player::new);
            *players[p(0)].hand_mut() = Hand::with_cards(p(0), hand0);
            *players[p(1)].hand_mut() = Hand::with_cards(p(1), hand1);

            let mut sleeping = QueenCollection::sleeping();
            for q in Queen::all() {
                sleeping.add_queen(q);
            }

            let refill = (0..20).map(|i| Card::number(CardId::new(500 + i), 1)).collect();
            Self {
                players,
                sleeping,
                pile: Pile::stacked(refill, GameRng::new(3)),
            }
        }

        fn resolve(
            &mut self,
            policy: DefensePolicy,
            actor: PlayerId,
            positions: &[Position],
        ) -> Result<Resolution, MoveError> {
            let mut table = Table {
                players: &mut self.players,
                sleeping: &mut self.sleeping,
                pile: &mut self.pile,
            };
            MoveResolver::new(policy).resolve(actor, positions, &mut table)
        }

        fn give_queen(&mut self, player: PlayerId, name: &str) -> Queen {
            let queen = Queen::by_name(name).unwrap();
            self.sleeping.remove_queen(&queen);
            self.players[player].awoken_mut().add_queen(queen);
            queen
        }
    }

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn card(id: u16, kind: CardKind) -> Card {
        Card::new(CardId::new(id), kind)
    }

    #[test]
    fn test_wake_up_moves_queen_and_redraws() {
        let king = card(1, CardKind::King);
        let mut fx = Fixture::new(vec![king], vec![]);
        let rose = Queen::by_name("Rose Queen").unwrap();

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(king, p(0)), Position::sleeping(rose)],
        );

        assert_eq!(result, Ok(Resolution::Played(MoveKind::WakeUp { queen: rose })));
        assert!(fx.players[p(0)].awoken().contains(&rose));
        assert!(!fx.sleeping.contains(&rose));
        assert!(!fx.players[p(0)].hand().contains(&king));
        assert_eq!(fx.players[p(0)].hand().len(), 1);
        assert_eq!(fx.pile.discarded(), &[king]);
    }

    #[test]
    fn test_wake_up_stale_queen() {
        let king = card(1, CardKind::King);
        let mut fx = Fixture::new(vec![king], vec![]);
        let rose = fx.give_queen(p(1), "Rose Queen");

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(king, p(0)), Position::sleeping(rose)],
        );

        assert_eq!(result, Err(MoveError::StaleReference));
        assert!(fx.players[p(0)].hand().contains(&king));
        assert!(fx.players[p(0)].hand().picked().is_empty());
        assert_eq!(fx.pile.discard_len(), 0);
    }

    #[test]
    fn test_knight_steals_without_dragon() {
        let knight = card(2, CardKind::Knight);
        let mut fx = Fixture::new(vec![knight], vec![card(3, CardKind::Wand)]);
        let peacock = fx.give_queen(p(1), "Peacock Queen");
        let rose = fx.give_queen(p(1), "Rose Queen");

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(knight, p(0)), Position::awoken(rose, p(1))],
        );

        assert_eq!(
            result,
            Ok(Resolution::Played(MoveKind::Steal { victim: p(1), queen: rose }))
        );
        assert_eq!(fx.players[p(1)].awoken().slots(), &[Some(peacock), None]);
        assert!(fx.players[p(0)].awoken().contains(&rose));
        assert_eq!(fx.players[p(1)].hand().len(), 1);
    }

    #[test]
    fn test_knight_defended_by_dragon() {
        let knight = card(2, CardKind::Knight);
        let dragon = card(3, CardKind::Dragon);
        let mut fx = Fixture::new(vec![knight], vec![dragon]);
        let rose = fx.give_queen(p(1), "Rose Queen");

        let result = fx.resolve(
            DefensePolicy::AttackerKeepsTurn,
            p(0),
            &[Position::hand(knight, p(0)), Position::awoken(rose, p(1))],
        );

        assert_eq!(
            result,
            Ok(Resolution::Defended {
                defender: p(1),
                card: CardKind::Dragon,
                turn_consumed: false
            })
        );
        assert!(fx.players[p(1)].awoken().contains(&rose));
        assert!(!fx.players[p(1)].hand().contains(&dragon));
        assert_eq!(fx.players[p(1)].hand().len(), 1);
        assert!(fx.players[p(0)].hand().contains(&knight));
        assert_eq!(fx.pile.discarded(), &[dragon]);
    }

    #[test]
    fn test_defended_attack_spends_attacker_card_when_configured() {
        let potion = card(2, CardKind::Potion);
        let wand = card(3, CardKind::Wand);
        let mut fx = Fixture::new(vec![potion], vec![wand]);
        let rose = fx.give_queen(p(1), "Rose Queen");

        let result = fx.resolve(
            DefensePolicy::AttackerLosesTurn,
            p(0),
            &[Position::hand(potion, p(0)), Position::awoken(rose, p(1))],
        );

        assert_eq!(
            result,
            Ok(Resolution::Defended {
                defender: p(1),
                card: CardKind::Wand,
                turn_consumed: true
            })
        );
        assert!(!fx.players[p(0)].hand().contains(&potion));
        assert_eq!(fx.players[p(0)].hand().len(), 1);
        assert_eq!(fx.pile.discarded(), &[wand, potion]);
    }

    #[test]
    fn test_dragon_does_not_stop_potion() {
        let potion = card(2, CardKind::Potion);
        let mut fx = Fixture::new(vec![potion], vec![card(3, CardKind::Dragon)]);
        let rose = fx.give_queen(p(1), "Rose Queen");

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(potion, p(0)), Position::awoken(rose, p(1))],
        );

        assert_eq!(
            result,
            Ok(Resolution::Played(MoveKind::PutToSleep { victim: p(1), queen: rose }))
        );
        assert!(fx.sleeping.contains(&rose));
        assert!(!fx.players[p(0)].awoken().contains(&rose));
        assert_eq!(fx.players[p(1)].count_queens(), 0);
    }

    #[test]
    fn test_attack_on_missing_queen_is_stale() {
        let knight = card(2, CardKind::Knight);
        let dragon = card(3, CardKind::Dragon);
        let mut fx = Fixture::new(vec![knight], vec![dragon]);
        let rose = Queen::by_name("Rose Queen").unwrap();

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(knight, p(0)), Position::awoken(rose, p(1))],
        );

        assert_eq!(result, Err(MoveError::StaleReference));
        assert!(fx.players[p(1)].hand().contains(&dragon));
        assert!(fx.players[p(1)].hand().picked().is_empty());
    }

    #[test]
    fn test_attack_on_unknown_seat_is_stale() {
        let knight = card(2, CardKind::Knight);
        let mut fx = Fixture::new(vec![knight], vec![]);
        let rose = Queen::by_name("Rose Queen").unwrap();

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(knight, p(0)), Position::awoken(rose, p(4))],
        );

        assert_eq!(result, Err(MoveError::StaleReference));
    }

    #[test]
    fn test_numeric_sum() {
        let cards = [
            Card::number(CardId::new(10), 2),
            Card::number(CardId::new(11), 3),
            Card::number(CardId::new(12), 5),
        ];
        let keep = card(13, CardKind::King);
        let mut hand = cards.to_vec();
        hand.push(keep);
        let mut fx = Fixture::new(hand, vec![]);

        let positions: Vec<_> = cards.iter().map(|&c| Position::hand(c, p(0))).collect();
        let result = fx.resolve(DefensePolicy::default(), p(0), &positions);

        assert_eq!(result, Ok(Resolution::Played(MoveKind::Numeric { cards: 3 })));
        assert_eq!(fx.players[p(0)].hand().len(), 4);
        assert!(fx.players[p(0)].hand().contains(&keep));
        assert_eq!(fx.pile.discard_len(), 3);
    }

    #[test]
    fn test_numeric_with_card_not_held() {
        let held = Card::number(CardId::new(10), 4);
        let missing = Card::number(CardId::new(11), 4);
        let mut fx = Fixture::new(vec![held], vec![]);

        let result = fx.resolve(
            DefensePolicy::default(),
            p(0),
            &[Position::hand(held, p(0)), Position::hand(missing, p(0))],
        );

        assert_eq!(result, Err(MoveError::StaleReference));
        assert_eq!(fx.players[p(0)].hand().cards(), &[held]);
        assert_eq!(fx.pile.discard_len(), 0);
    }

    #[test]
    fn test_unknown_actor() {
        let mut fx = Fixture::new(vec![], vec![]);
        let result = fx.resolve(DefensePolicy::default(), p(3), &[]);
        assert_eq!(result, Err(MoveError::UnknownPlayer(p(3))));
    }
}
