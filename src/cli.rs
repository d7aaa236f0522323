use crate::Chips;
use crate::STACK;
use clap::ArgAction;
use clap::Parser;

/// Heads-up Blackjack against the house.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chips to start the session with.
    #[arg(short, long, default_value_t = STACK, value_parser = clap::value_parser!(Chips).range(1..))]
    pub balance: Chips,
    /// Seed the shuffler for a reproducible session.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Log to stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
