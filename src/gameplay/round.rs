use super::decision::Decision;
use super::hand::Hand;
use super::outcome::Outcome;
use super::partial::Partial;
use super::policy::Policy;
use super::turn::Turn;
use crate::HAND_SIZE;
use crate::cards::Deck;
use crate::cards::Exhausted;

/// Stage of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Betting,
    PlayerTurn,
    DealerTurn,
    Settlement,
}

/// One round of Blackjack: a deck, two hands, and the phase they are in.
///
/// Phases only move forward:
/// Betting → PlayerTurn → (DealerTurn) → Settlement.
/// The dealer turn is skipped when the player busts. Each method asserts the
/// phase it belongs to; calling one out of order is a bug in the caller.
/// Wagers and balances live in [`Account`](super::account::Account), not here.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl Round {
    /// Deals two cards each, alternating player and dealer.
    pub fn deal(mut deck: Deck) -> Result<Self, Exhausted> {
        let mut player = Hand::empty();
        let mut dealer = Hand::empty();
        for _ in 0..HAND_SIZE {
            player.take(deck.draw()?);
            dealer.take(deck.draw()?);
        }
        log::debug!("dealt player {} dealer {}", player, dealer);
        Ok(Self {
            deck,
            player,
            dealer,
            phase: Phase::Betting,
        })
    }
    /// The wager is in; decisions may be offered.
    pub fn start(&mut self) {
        assert!(self.phase == Phase::Betting);
        self.phase = Phase::PlayerTurn;
    }
    /// Applies one player decision.
    pub fn act(&mut self, decision: Decision) -> Result<Turn, Exhausted> {
        assert!(self.phase == Phase::PlayerTurn);
        match decision {
            Decision::Hit => {
                let card = self.deck.draw()?;
                self.player.take(card);
                log::debug!("player hits {} -> {}", card, self.player.total());
                if self.player.is_bust() {
                    self.phase = Phase::Settlement;
                    Ok(Turn::PlayerBusted)
                } else {
                    Ok(Turn::InProgress)
                }
            }
            Decision::Stand => {
                log::debug!("player stands on {}", self.player.total());
                self.phase = Phase::DealerTurn;
                Ok(Turn::PlayerStood)
            }
        }
    }
    /// Draws for the dealer until the policy stands.
    pub fn play_dealer(&mut self, policy: &dyn Policy) -> Result<(), Exhausted> {
        assert!(self.phase == Phase::DealerTurn);
        while policy.decide(&self.dealer) == Decision::Hit {
            let card = self.deck.draw()?;
            self.dealer.take(card);
            log::debug!("dealer hits {} -> {}", card, self.dealer.total());
        }
        self.phase = Phase::Settlement;
        Ok(())
    }
    pub fn outcome(&self) -> Outcome {
        assert!(self.phase == Phase::Settlement);
        Outcome::classify(&self.player, &self.dealer)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn player(&self) -> &Hand {
        &self.player
    }
    /// The dealer's full hand. Only for settlement; show players a [`Partial`].
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }
    pub fn partial(&self) -> Partial {
        Partial::from(&self.dealer)
    }
    pub fn remaining(&self) -> usize {
        self.deck.size()
    }
}
