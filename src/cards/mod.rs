//! Card representation and the deck they are dealt from.
//!
//! - [`Rank`]: Two through Ace, with the fixed Blackjack value lookup
//! - [`Suit`]: display only, never affects a score
//! - [`Card`]: a `(Rank, Suit)` pair encoded in one byte
//! - [`Deck`]: 52 unique cards, shuffled and drawn from the top
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
