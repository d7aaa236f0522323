use super::outcome::Outcome;
use crate::Chips;

/// Running tally of a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    rounds: usize,
    wins: usize,
    losses: usize,
    pushes: usize,
    net: i64,
    balance: Chips,
}

impl Record {
    pub fn new(balance: Chips) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }
    pub fn add(&mut self, outcome: Outcome, delta: i64, balance: Chips) {
        self.rounds += 1;
        self.net += delta;
        self.balance = balance;
        match outcome.is_win() {
            Some(true) => self.wins += 1,
            Some(false) => self.losses += 1,
            None => self.pushes += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn pushes(&self) -> usize {
        self.pushes
    }
    pub fn net(&self) -> i64 {
        self.net
    }
    pub fn balance(&self) -> Chips {
        self.balance
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds  {}W {}L {}P  net {:+}  balance {}",
            self.rounds, self.wins, self.losses, self.pushes, self.net, self.balance
        )
    }
}
