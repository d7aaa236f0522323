//! Heads-up Blackjack against a house dealer.
//!
//! The crate is split the way the table is:
//!
//! - [`cards`]: ranks, suits, cards, and the 52-card [`cards::Deck`]
//! - [`gameplay`]: hand scoring, the round state machine, wager settlement
//! - [`players`]: the I/O seam between the table and whoever sits at it
//!
//! The binary wires a terminal [`players::Human`] to a [`gameplay::Table`].
pub mod cards;
pub mod gameplay;
pub mod players;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Balances and bet amounts.
pub type Chips = u32;
/// Hand totals. Twenty-one Aces still fit.
pub type Points = u16;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE RULES
// ============================================================================
/// Starting balance of a session.
pub const STACK: Chips = 100;
/// Highest total that does not bust.
pub const BLACKJACK: Points = 21;
/// Dealer draws while below this total.
pub const DEALER_STANDS: Points = 17;
/// What an Ace gives back when it drops from 11 to 1.
pub const ACE_DEMOTION: Points = 10;
/// Cards dealt to each side before the first decision.
pub const HAND_SIZE: usize = 2;
/// Cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so it stays out of the table output.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
