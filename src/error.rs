use crate::parse::{ParseError, ParseErrorKind};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DiceError {
    #[error("empty expression")]
    Empty,
    #[error("malformed expression {0}")]
    Malformed(ParseError),
    #[error("integer overflow while evaluating {0}")]
    Overflow(String),
    #[error("too many dice rolled")]
    TooManyDice,
    #[error("distribution has more than {0} outcomes")]
    TooManyOutcomes(usize),
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl DiceError {
    pub fn overflow(what: impl ToString) -> Self {
        Self::Overflow(what.to_string())
    }

    pub fn invariant(msg: impl ToString) -> Self {
        Self::InternalInvariant(msg.to_string())
    }
}

impl From<ParseError> for DiceError {
    fn from(err: ParseError) -> Self {
        match err.kind {
            ParseErrorKind::Empty => Self::Empty,
            _ => Self::Malformed(err),
        }
    }
}
