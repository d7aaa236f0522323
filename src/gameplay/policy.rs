use super::decision::Decision;
use super::hand::Hand;

/// A fixed strategy that decides from its own hand alone.
pub trait Policy {
    fn decide(&self, hand: &Hand) -> Decision;
}
