use super::hand::Hand;
use crate::cards::Card;

/// The dealer's hand as the player is allowed to see it.
///
/// The hole card (the dealer's second card) is dropped when the view is
/// built, so its rank and suit never reach the display layer before the
/// round settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    shown: Vec<Card>,
    hidden: usize,
}

impl Partial {
    const HOLE: usize = 1;

    pub fn shown(&self) -> &[Card] {
        &self.shown
    }
    pub fn hidden(&self) -> usize {
        self.hidden
    }
}

impl From<&Hand> for Partial {
    fn from(hand: &Hand) -> Self {
        Self {
            shown: hand
                .cards()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != Self::HOLE)
                .map(|(_, c)| *c)
                .collect(),
            hidden: usize::from(hand.size() > Self::HOLE),
        }
    }
}

impl std::fmt::Display for Partial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.shown.iter() {
            write!(f, "{} ", card)?;
        }
        for _ in 0..self.hidden {
            write!(f, "?? ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_exactly_the_hole_card() {
        let cards = Card::parse("8c 5d").unwrap();
        let partial = Partial::from(&Hand::from(cards.clone()));
        assert!(partial.hidden() == 1);
        assert!(partial.shown() == &cards[..1]);
        assert!(!partial.shown().contains(&cards[1]));
    }

    #[test]
    fn display_never_names_the_hole_card() {
        let partial = Partial::from(&Hand::from(Card::parse("8c 5d").unwrap()));
        let text = partial.to_string();
        assert!(text.contains("8♣"));
        assert!(!text.contains("5"));
        assert!(text.contains("??"));
    }

    #[test]
    fn single_card_has_nothing_to_hide() {
        let partial = Partial::from(&Hand::from(Card::parse("Ah").unwrap()));
        assert!(partial.hidden() == 0);
        assert!(partial.shown().len() == 1);
    }
}
