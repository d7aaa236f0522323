use super::hand::Hand;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerBusts,
    DealerBusts,
    DealerWins,
    PlayerWins,
    Push,
}

impl Outcome {
    /// Compares finished hands. Checked in order: player bust, dealer bust,
    /// dealer higher, player higher, tie. A busted player loses even if the
    /// dealer would have busted too.
    pub fn classify(player: &Hand, dealer: &Hand) -> Self {
        if player.is_bust() {
            Outcome::PlayerBusts
        } else if dealer.is_bust() {
            Outcome::DealerBusts
        } else if dealer.total() > player.total() {
            Outcome::DealerWins
        } else if player.total() > dealer.total() {
            Outcome::PlayerWins
        } else {
            Outcome::Push
        }
    }
    /// `Some(true)` if the player collects, `Some(false)` if the house does,
    /// `None` on a push.
    pub fn is_win(&self) -> Option<bool> {
        match self {
            Outcome::DealerBusts | Outcome::PlayerWins => Some(true),
            Outcome::PlayerBusts | Outcome::DealerWins => Some(false),
            Outcome::Push => None,
        }
    }
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::PlayerBusts => "PLAYER BUSTS!",
            Outcome::DealerBusts => "PLAYER WINS! DEALER BUSTS!",
            Outcome::DealerWins => "DEALER WINS!",
            Outcome::PlayerWins => "PLAYER WINS!",
            Outcome::Push => "PUSH! Player and dealer tie.",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.headline())
    }
}
