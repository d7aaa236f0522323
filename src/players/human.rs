use crate::cards::Card;
use crate::gameplay::Event;
use crate::gameplay::Hand;
use crate::gameplay::Outcome;
use crate::gameplay::Partial;
use crate::gameplay::Player;
use crate::gameplay::Prompt;
use colored::ColoredString;
use colored::Colorize;
use dialoguer::Input;

const RULE: &str = "--------------------------------";

/// A person at the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn ask(&mut self, prompt: Prompt) -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .report(false)
            .interact_text()?)
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Welcome { round, balance } => {
                println!();
                println!("{}", format!("Round {}", round).bold());
                println!("Get as close to 21 as you can without going over!");
                println!("Dealer hits until 17. Aces count as 1 or 11.");
                println!("You have {} chips.", balance);
            }
            Event::Bet { bet, balance } => println!("Betting {} of {} chips.", bet, balance),
            Event::Table { dealer, player } => Self::table(dealer, player),
            Event::Stood => println!("\nPlayer stands. Dealer's turn."),
            Event::Reveal { dealer, player } => Self::reveal(dealer, player),
            Event::Settled {
                outcome,
                delta,
                balance,
            } => {
                println!("{}", Self::headline(outcome));
                println!("{:+} chips, balance {}", delta, balance);
            }
            Event::Rejected(reason) => println!("{}", reason.yellow()),
            Event::Broke => println!("{}", "You are out of chips.".red()),
            Event::Farewell(record) => {
                println!("\n{}", record);
                println!("Thanks for playing!");
            }
        }
    }
}

impl Human {
    fn table(dealer: &Partial, player: &Hand) {
        println!("\n{}", RULE);
        println!("Dealer's Hand:");
        for _ in 0..dealer.hidden() {
            println!(" <card hidden>");
        }
        for card in dealer.shown() {
            println!(" {}", Self::card(card));
        }
        println!("\nPlayer's Hand:");
        for card in player.cards() {
            println!(" {}", Self::card(card));
        }
        println!("Player's Hand = {}", player.total());
        println!("{}\n", RULE);
    }
    fn reveal(dealer: &Hand, player: &Hand) {
        println!("\n{}", RULE);
        println!("Dealer's Hand:");
        for card in dealer.cards() {
            println!(" {}", Self::card(card));
        }
        println!("Dealer's Hand = {}", dealer.total());
        println!("\nPlayer's Hand:");
        for card in player.cards() {
            println!(" {}", Self::card(card));
        }
        println!("Player's Hand = {}", player.total());
        println!("{}\n", RULE);
    }
    fn card(card: &Card) -> ColoredString {
        let text = format!("{:<4}{}", card.to_string(), card.name());
        if card.suit().is_red() {
            text.red()
        } else {
            text.normal()
        }
    }
    fn headline(outcome: &Outcome) -> ColoredString {
        match outcome.is_win() {
            Some(true) => outcome.headline().green().bold(),
            Some(false) => outcome.headline().red().bold(),
            None => outcome.headline().yellow().bold(),
        }
    }
}
