//! Scoring, the round state machine, and settlement.
//!
//! A [`Table`] runs a session. Each round it deals a [`Round`] from a fresh
//! deck, takes a wager into the [`Account`], drives the player's turn through
//! [`Turn`] values, lets the house [`Policy`] draw, and settles the
//! [`Outcome`].
pub mod account;
pub use account::*;

pub mod decision;
pub use decision::*;

pub mod event;
pub use event::*;

pub mod hand;
pub use hand::*;

pub mod outcome;
pub use outcome::*;

pub mod partial;
pub use partial::*;

pub mod player;
pub use player::*;

pub mod policy;
pub use policy::*;

pub mod record;
pub use record::*;

pub mod round;
pub use round::*;

pub mod table;
pub use table::*;

pub mod turn;
pub use turn::*;
