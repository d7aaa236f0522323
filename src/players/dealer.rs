use crate::DEALER_STANDS;
use crate::gameplay::Decision;
use crate::gameplay::Hand;
use crate::gameplay::Policy;

/// The house. Hits below 17, stands on anything else, soft or hard.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dealer;

impl Policy for Dealer {
    fn decide(&self, hand: &Hand) -> Decision {
        if hand.total() < DEALER_STANDS {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hand(s: &str) -> Hand {
        Hand::from(Card::parse(s).unwrap())
    }

    #[test]
    fn hits_sixteen() {
        assert!(Dealer.decide(&hand("Tc 6d")) == Decision::Hit);
    }

    #[test]
    fn stands_hard_seventeen() {
        assert!(Dealer.decide(&hand("Tc 7d")) == Decision::Stand);
    }

    #[test]
    fn stands_soft_seventeen() {
        assert!(Dealer.decide(&hand("Ac 6d")) == Decision::Stand);
    }

    #[test]
    fn hits_when_ace_drops() {
        let hand = hand("Ac 6d Tc");
        assert!(hand.total() == 17);
        assert!(Dealer.decide(&hand) == Decision::Stand);
        assert!(Dealer.decide(&self::hand("Ac 5d Tc")) == Decision::Hit);
    }
}
