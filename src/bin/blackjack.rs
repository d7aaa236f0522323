//! Blackjack Binary
//!
//! Deals rounds against the house until you decline another hand.
//!
//! Options: --balance, --seed, -v

use blackjack::cli::Args;
use blackjack::gameplay::Table;
use blackjack::players::Human;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    blackjack::log(args.level());
    log::info!("starting session with {} chips", args.balance);
    let record = Table::seeded(args.balance, args.seed).play(&mut Human)?;
    log::info!("session over: {}", record);
    Ok(())
}
