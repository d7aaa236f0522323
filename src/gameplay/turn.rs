/// Where the player's turn stands after a hit or stand.
///
/// Returned from [`Round::act`](super::round::Round::act) so the table loop
/// decides what happens next from the value alone.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    InProgress,
    PlayerBusted,
    PlayerStood,
}

impl Turn {
    pub fn is_over(&self) -> bool {
        !matches!(self, Turn::InProgress)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::PlayerBusted => write!(f, "player busted"),
            Self::PlayerStood => write!(f, "player stood"),
        }
    }
}
