use super::hand::Hand;
use super::outcome::Outcome;
use super::partial::Partial;
use super::record::Record;
use crate::Chips;

/// Everything the table tells the player.
///
/// Dealer cards only travel as a [`Partial`] until [`Event::Reveal`].
#[derive(Debug, Clone)]
pub enum Event {
    /// New round starting.
    Welcome { round: usize, balance: Chips },
    /// Wager accepted.
    Bet { bet: Chips, balance: Chips },
    /// Player's cards and the dealer's visible cards.
    Table { dealer: Partial, player: Hand },
    /// Player stood; the dealer plays out.
    Stood,
    /// Every card and both totals.
    Reveal { dealer: Hand, player: Hand },
    /// Round settled against the balance.
    Settled {
        outcome: Outcome,
        delta: i64,
        balance: Chips,
    },
    /// Input could not be used; the question will be asked again.
    Rejected(String),
    /// Balance is gone and no bet can be placed.
    Broke,
    /// Session over.
    Farewell(Record),
}

/// What the table asks the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Wager { balance: Chips },
    Decision,
    Replay,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prompt::Wager { balance } => {
                write!(f, "How many chips would you like to bet? [1-{}]", balance)
            }
            Prompt::Decision => write!(f, "Hit or Stand [H/S]"),
            Prompt::Replay => write!(f, "Play another hand [Y/N]"),
        }
    }
}
