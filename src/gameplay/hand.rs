use crate::ACE_DEMOTION;
use crate::Arbitrary;
use crate::BLACKJACK;
use crate::Points;
use crate::cards::Card;
use crate::cards::Deck;

/// The cards one side of the table holds, with a running score.
///
/// `total` is the sum of base values of every card, minus [`ACE_DEMOTION`]
/// for each Ace already counted as 1. `soft` counts the Aces still counted as
/// 11. Both are maintained incrementally and can always be recomputed from
/// `cards`. Hands only grow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: Points,
    soft: usize,
}

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Appends a card at its base value. Call [`Hand::normalize`] afterwards.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.total += card.points();
        if card.is_ace() {
            self.soft += 1;
        }
    }
    /// Drops soft Aces from 11 to 1 until the hand no longer busts
    /// or there are none left to drop.
    pub fn normalize(&mut self) {
        while self.total > BLACKJACK && self.soft > 0 {
            self.total -= ACE_DEMOTION;
            self.soft -= 1;
        }
    }
    /// Adds a card and normalizes in one step.
    pub fn take(&mut self, card: Card) {
        self.add(card);
        self.normalize();
    }

    pub fn total(&self) -> Points {
        self.total
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
    /// Whether an Ace is still counting as 11.
    pub fn is_soft(&self) -> bool {
        self.soft > 0
    }
    /// Aces that have been demoted to 1.
    pub fn demoted(&self) -> usize {
        self.cards.iter().filter(|c| c.is_ace()).count() - self.soft
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().fold(Self::empty(), |mut hand, card| {
            hand.take(card);
            hand
        })
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        let n = rand::random_range(1..=8);
        Self::from(Deck::random().take(n).collect::<Vec<_>>())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{} ", card)?;
        }
        write!(f, "({})", self.total)
    }
}
