use super::account::Account;
use super::decision::Decision;
use super::decision::Replay;
use super::event::Event;
use super::event::Prompt;
use super::outcome::Outcome;
use super::player::Player;
use super::record::Record;
use super::round::Round;
use super::turn::Turn;
use crate::Chips;
use crate::cards::Deck;
use crate::cards::Exhausted;
use crate::players::Dealer;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt::Display;

/// A session at the table: the player's account, the shuffler, and the house.
///
/// Every round gets a fresh shuffled deck. Only the balance and the session
/// [`Record`] carry over between rounds. Invalid answers are never fatal:
/// the table asks again, for as long as it takes.
#[derive(Debug)]
pub struct Table {
    account: Account,
    record: Record,
    dealer: Dealer,
    rng: SmallRng,
    rounds: usize,
}

impl Table {
    pub fn new(balance: Chips, rng: SmallRng) -> Self {
        Self {
            account: Account::new(balance),
            record: Record::new(balance),
            dealer: Dealer,
            rng,
            rounds: 0,
        }
    }
    /// Reproducible shuffles with a seed, OS entropy without.
    pub fn seeded(balance: Chips, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(balance, SmallRng::seed_from_u64(seed)),
            None => Self::new(balance, SmallRng::from_os_rng()),
        }
    }
    pub fn account(&self) -> &Account {
        &self.account
    }
    pub fn record(&self) -> Record {
        self.record
    }

    /// Plays rounds until the player declines another or runs out of chips.
    pub fn play(&mut self, player: &mut dyn Player) -> anyhow::Result<Record> {
        loop {
            if !self.account.can_bet() {
                log::info!("balance exhausted after {} rounds", self.rounds);
                player.notify(&Event::Broke);
                break;
            }
            let deck = Deck::new().shuffled(&mut self.rng);
            self.round(player, deck)?;
            match Self::ask(player, Prompt::Replay, |s| Replay::try_from(s))? {
                Replay::Again => continue,
                Replay::Quit => break,
            }
        }
        player.notify(&Event::Farewell(self.record));
        Ok(self.record)
    }

    /// Plays one round from the given deck and settles it.
    pub fn round(&mut self, player: &mut dyn Player, deck: Deck) -> anyhow::Result<Outcome> {
        self.rounds += 1;
        player.notify(&Event::Welcome {
            round: self.rounds,
            balance: self.account.balance(),
        });
        let mut round = Round::deal(deck).map_err(Self::fatal)?;

        // betting
        let ref account = self.account;
        let balance = account.balance();
        let bet = Self::ask(player, Prompt::Wager { balance }, |s| account.parse(s))?;
        self.account.place(bet)?;
        round.start();
        log::info!("round {} bet {} of {}", self.rounds, bet, balance);
        player.notify(&Event::Bet { bet, balance });

        // player turn
        let turn = loop {
            player.notify(&Event::Table {
                dealer: round.partial(),
                player: round.player().clone(),
            });
            let decision = Self::ask(player, Prompt::Decision, |s| Decision::try_from(s))?;
            let turn = round.act(decision).map_err(Self::fatal)?;
            if turn.is_over() {
                break turn;
            }
        };

        // dealer turn
        if turn == Turn::PlayerStood {
            player.notify(&Event::Stood);
            round.play_dealer(&self.dealer).map_err(Self::fatal)?;
        }

        // settlement
        player.notify(&Event::Reveal {
            dealer: round.dealer().clone(),
            player: round.player().clone(),
        });
        let outcome = round.outcome();
        let delta = self.account.settle(outcome);
        let balance = self.account.balance();
        self.record.add(outcome, delta, balance);
        log::info!(
            "round {} {:?} player {} dealer {} {:+} -> {}",
            self.rounds,
            outcome,
            round.player().total(),
            round.dealer().total(),
            delta,
            balance
        );
        player.notify(&Event::Settled {
            outcome,
            delta,
            balance,
        });
        Ok(outcome)
    }

    /// Asks until the answer parses.
    fn ask<T, E>(
        player: &mut dyn Player,
        prompt: Prompt,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> anyhow::Result<T>
    where
        E: Display,
    {
        loop {
            let line = player.ask(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!("rejected {:?}: {}", line, e);
                    player.notify(&Event::Rejected(e.to_string()));
                }
            }
        }
    }

    fn fatal(e: Exhausted) -> anyhow::Error {
        log::error!("{}", e);
        anyhow::Error::from(e).context("round aborted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::players::Script;

    fn table(balance: Chips) -> Table {
        Table::seeded(balance, Some(0))
    }
    fn stacked(s: &str) -> Deck {
        Deck::from(Card::parse(s).unwrap())
    }

    #[test]
    fn stand_and_dealer_busts() {
        let mut table = table(100);
        let mut script = Script::new(["10", "s"]);
        let outcome = table.round(&mut script, stacked("Th 8c 9s 5d Kh")).unwrap();
        assert!(outcome == Outcome::DealerBusts);
        assert!(table.account().balance() == 110);
        assert!(table.account().bet() == 0);
        assert!(script.is_done());
    }

    #[test]
    fn winning_at_max_balance_keeps_max() {
        let mut table = table(Chips::MAX);
        let mut script = Script::new([Chips::MAX.to_string(), "s".to_string()]);
        let outcome = table.round(&mut script, stacked("Th 8c 9s 5d Kh")).unwrap();
        assert!(outcome == Outcome::DealerBusts);
        assert!(table.account().balance() == Chips::MAX);
        assert!(table.record().net() == 0);
    }

    #[test]
    fn bust_loses_without_dealer_turn() {
        let mut table = table(100);
        let mut script = Script::new(["10", "h"]);
        let outcome = table.round(&mut script, stacked("Tc 8d 5h 7c Kd")).unwrap();
        assert!(outcome == Outcome::PlayerBusts);
        assert!(table.account().balance() == 90);
        assert!(!script.events().iter().any(|e| matches!(e, Event::Stood)));
        assert!(script.events().iter().any(|e| matches!(
            e,
            Event::Reveal { dealer, .. } if dealer.size() == 2
        )));
    }

    #[test]
    fn equal_totals_push() {
        let mut table = table(100);
        let mut script = Script::new(["30", "S"]);
        let outcome = table.round(&mut script, stacked("Tc Kh Qd Js")).unwrap();
        assert!(outcome == Outcome::Push);
        assert!(table.account().balance() == 100);
    }

    #[test]
    fn dealer_higher_wins() {
        let mut table = table(100);
        let mut script = Script::new(["25", "s"]);
        let outcome = table.round(&mut script, stacked("Tc Kh 7d Js")).unwrap();
        assert!(outcome == Outcome::DealerWins);
        assert!(table.account().balance() == 75);
    }

    #[test]
    fn hits_then_stands() {
        let mut table = table(100);
        let mut script = Script::new(["10", "h", "h", "s"]);
        let outcome = table
            .round(&mut script, stacked("2c Kh 3d 7s 4h 5h"))
            .unwrap();
        // player 2 3 4 5 = 14, dealer K 7 = 17
        assert!(outcome == Outcome::DealerWins);
        let tables = script
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Table { .. }))
            .count();
        assert!(tables == 3);
    }

    #[test]
    fn bad_wagers_are_asked_again() {
        let mut table = table(100);
        let mut script = Script::new(["150", "ten", "0", "-3", "100", "s"]);
        table.round(&mut script, stacked("Th 8c 9s 5d Kh")).unwrap();
        let rejected = script
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Rejected(_)))
            .count();
        assert!(rejected == 4);
        assert!(table.account().balance() == 200);
    }

    #[test]
    fn bad_choices_are_asked_again() {
        let mut table = table(100);
        let mut script = Script::new(["10", "hit", "x", "", "s"]);
        table.round(&mut script, stacked("Th 8c 9s 5d Kh")).unwrap();
        let rejected = script
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Rejected(_)))
            .count();
        assert!(rejected == 3);
        assert!(script.is_done());
    }

    #[test]
    fn hole_card_stays_hidden_until_reveal() {
        let mut table = table(100);
        let mut script = Script::new(["10", "s"]);
        table.round(&mut script, stacked("Th 8c 9s 5d Kh")).unwrap();
        let hole = Card::try_from("5d").unwrap();
        for event in script.events() {
            match event {
                Event::Table { dealer, .. } => assert!(!dealer.shown().contains(&hole)),
                Event::Reveal { dealer, .. } => assert!(dealer.cards().contains(&hole)),
                _ => {}
            }
        }
    }

    #[test]
    fn exhausted_deck_aborts_the_round() {
        let mut table = table(100);
        let mut script = Script::new(["10", "h"]);
        let result = table.round(&mut script, stacked("Tc 2h 2d 3c"));
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<Exhausted>() == Some(&Exhausted));
    }

    #[test]
    fn session_ends_on_no() {
        let mut table = table(100);
        let mut script = Script::new(["10", "s", "n"]);
        let record = table.play(&mut script).unwrap();
        assert!(record.rounds() == 1);
        assert!(script.is_done());
        assert!(matches!(script.events().last(), Some(Event::Farewell(_))));
    }

    #[test]
    fn session_continues_on_yes() {
        let mut table = table(100);
        let mut script = Script::new(["10", "s", "maybe", "y", "10", "s", "N"]);
        let record = table.play(&mut script).unwrap();
        assert!(record.rounds() == 2);
        assert!(record.balance() == table.account().balance());
    }

    #[test]
    fn broke_player_is_shown_the_door() {
        let mut table = table(10);
        let mut script = Script::new(["10", "h"]);
        table.round(&mut script, stacked("Tc 8d 5h 7c Kd")).unwrap();
        assert!(table.account().balance() == 0);
        let record = table.play(&mut script).unwrap();
        assert!(record.rounds() == 1);
        assert!(script.events().iter().any(|e| matches!(e, Event::Broke)));
    }

    #[test]
    fn seeded_tables_shuffle_alike() {
        let mut a = Table::seeded(100, Some(42));
        let mut b = Table::seeded(100, Some(42));
        let mut x = Script::new(["10", "s", "n"]);
        let mut y = Script::new(["10", "s", "n"]);
        assert!(a.play(&mut x).unwrap() == b.play(&mut y).unwrap());
    }
}
