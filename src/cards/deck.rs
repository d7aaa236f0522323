use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::DECK_SIZE;
use rand::Rng;
use rand::seq::SliceRandom;

/// A single 52-card deck, consumed from the top.
///
/// Cards leave the deck through [`Deck::draw`] and never come back, so no card
/// can be dealt twice in the round that owns the deck. Running out is not a
/// user error: a round draws at most a couple dozen cards, so an empty deck
/// means the table logic is broken and [`Exhausted`] is treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh, ordered 52-card deck.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
    /// Reorders the remaining cards uniformly at random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Builder form of [`Deck::shuffle`].
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle(rng);
        self
    }
    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, Exhausted> {
        self.0.pop().ok_or(Exhausted)
    }
    /// Cards left to draw.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

/// A stacked deck: the first card listed is the first card drawn.
impl From<Vec<Card>> for Deck {
    fn from(mut cards: Vec<Card>) -> Self {
        assert!(cards.len() <= DECK_SIZE);
        cards.reverse();
        Self(cards)
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        Self::new().shuffled(&mut rand::rng())
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw().ok()
    }
}

/// A draw was requested from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deck exhausted: no cards left to draw")
    }
}

impl std::error::Error for Exhausted {}
