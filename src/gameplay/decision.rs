/// What the player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Hit => "Hit",
            Decision::Stand => "Stand",
        }
    }
}

/// Accepts exactly one letter, `H` or `S`, in either case.
impl TryFrom<&str> for Decision {
    type Error = InvalidChoice;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "H" => Ok(Decision::Hit),
            "S" => Ok(Decision::Stand),
            _ => Err(InvalidChoice::new(s, "H or S")),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether to deal another round once this one settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Replay {
    Again,
    Quit,
}

/// Only the first character counts, so "yes" and "Nope" are both fine.
impl TryFrom<&str> for Replay {
    type Error = InvalidChoice;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Y') => Ok(Replay::Again),
            Some('N') => Ok(Replay::Quit),
            _ => Err(InvalidChoice::new(s, "Y or N")),
        }
    }
}

/// A hit/stand or play-again answer outside the accepted letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice {
    input: String,
    expected: &'static str,
}

impl InvalidChoice {
    fn new(input: &str, expected: &'static str) -> Self {
        Self {
            input: input.trim().to_string(),
            expected,
        }
    }
}

impl std::fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {}, got {:?}", self.expected, self.input)
    }
}

impl std::error::Error for InvalidChoice {}
