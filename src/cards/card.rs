use super::rank::Rank;
use super::suit::Suit;
use crate::Points;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`, so cards sort by rank first and suit second.
///
/// Cards parse from short strings like `"As"` (ace of spades), `"Th"` or
/// `"10h"` (ten of hearts). Use [`Card::parse`] for several at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Base value of the card, Aces high.
    pub fn points(&self) -> Points {
        self.rank().points()
    }
    pub fn is_ace(&self) -> bool {
        self.rank().is_ace()
    }
    /// Long form, e.g. "Queen of Hearts".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }
    /// Parses whitespace-separated cards, e.g. `"Th 9s Ac"`.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank(), c.suit())
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// Th
/// 34
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| String::from("empty card str"))?;
        let rank = Rank::try_from(&s[..split])?;
        let suit = Suit::try_from(&s[split..])?;
        Ok(Self::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::Queen, Suit::Heart));
        assert!(card.rank() == Rank::Queen);
        assert!(card.suit() == Suit::Heart);
        assert!((Rank::Queen, Suit::Heart) == <(Rank, Suit)>::from(card));
    }

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn parses_short_form() {
        assert!(Card::try_from("As") == Ok(Card::from((Rank::Ace, Suit::Spade))));
        assert!(Card::try_from("10h") == Ok(Card::from((Rank::Ten, Suit::Heart))));
        assert!(Card::try_from("Td") == Ok(Card::from((Rank::Ten, Suit::Diamond))));
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("Zz").is_err());
    }

    #[test]
    fn parses_many() {
        let cards = Card::parse("Th 9s Ac").unwrap();
        assert!(cards.len() == 3);
        assert!(cards.iter().map(Card::points).sum::<Points>() == 30);
    }

    #[test]
    fn displays_both_forms() {
        let card = Card::from((Rank::King, Suit::Club));
        assert!(card.to_string() == "K♣");
        assert!(card.name() == "King of Clubs");
    }
}
