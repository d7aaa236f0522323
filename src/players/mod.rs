//! Implementations of the [`Player`](crate::gameplay::Player) and
//! [`Policy`](crate::gameplay::Policy) seams.
pub mod dealer;
pub use dealer::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod script;
pub use script::*;
