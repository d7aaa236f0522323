use super::outcome::Outcome;
use crate::Chips;

/// The player's chips: a balance that lasts the session and the bet riding
/// on the current round.
///
/// The bet is only ever placed through [`Account::place`], which refuses
/// anything that is not positive or is more than the balance. Losing can
/// therefore never push the balance below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    balance: Chips,
    bet: Chips,
}

impl Account {
    pub fn new(balance: Chips) -> Self {
        Self { balance, bet: 0 }
    }
    pub fn balance(&self) -> Chips {
        self.balance
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// A positive bet can still be covered.
    pub fn can_bet(&self) -> bool {
        self.balance > 0
    }
    /// Parses and validates a typed wager against the balance.
    pub fn parse(&self, input: &str) -> Result<Chips, InvalidWager> {
        let trimmed = input.trim();
        let amount = trimmed
            .parse::<i64>()
            .map_err(|_| InvalidWager::NotANumber(trimmed.to_string()))?;
        self.check(amount)
    }
    /// Validates a wager amount against the balance.
    pub fn check(&self, amount: i64) -> Result<Chips, InvalidWager> {
        if amount <= 0 {
            return Err(InvalidWager::NotPositive(amount));
        }
        match Chips::try_from(amount) {
            Ok(bet) if bet <= self.balance => Ok(bet),
            _ => Err(InvalidWager::Insufficient {
                amount,
                balance: self.balance,
            }),
        }
    }
    /// Records the bet for this round.
    pub fn place(&mut self, amount: Chips) -> Result<(), InvalidWager> {
        self.bet = self.check(i64::from(amount))?;
        Ok(())
    }
    /// Moves the bet into or out of the balance and clears it.
    /// Winnings stop at `Chips::MAX`. Returns the signed change in balance.
    pub fn settle(&mut self, outcome: Outcome) -> i64 {
        let bet = std::mem::take(&mut self.bet);
        let before = self.balance;
        match outcome.is_win() {
            Some(true) => self.balance = self.balance.saturating_add(bet),
            Some(false) => self.balance -= bet,
            None => {}
        }
        i64::from(self.balance) - i64::from(before)
    }
}

/// A wager that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidWager {
    NotANumber(String),
    NotPositive(i64),
    Insufficient { amount: i64, balance: Chips },
}

impl std::fmt::Display for InvalidWager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "{:?} is not a whole number of chips", s),
            Self::NotPositive(n) => write!(f, "bet must be at least 1 chip, got {}", n),
            Self::Insufficient { amount, balance } => {
                write!(f, "cannot bet {}, balance is only {} chips", amount, balance)
            }
        }
    }
}

impl std::error::Error for InvalidWager {}
