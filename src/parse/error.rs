use super::lexer::TokenKind;
use crate::common::NonEmpty;
use crate::dice::ParseDiceError;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    Empty,
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: NonEmpty<TokenKind>,
    },
    InvalidDice,
    InvalidInteger(ParseIntError),
    InvalidDiceLiteral(ParseDiceError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "nothing to evaluate"),
            Self::UnexpectedToken { found, expected } => {
                match found {
                    Some(kind) => write!(f, "unexpected token: found {}, expected ", kind)?,
                    None => write!(f, "unexpected end of input, expected ")?,
                }
                f.write_str(&expected.fmt_expected())
            }
            Self::InvalidDice => write!(f, "invalid dice literal; expected a number of sides above zero"),
            Self::InvalidInteger(err) => write!(f, "invalid integer: {}", err),
            Self::InvalidDiceLiteral(err) => write!(f, "invalid dice literal: {}", err),
        }
    }
}

trait FormatExpected {
    fn fmt_expected(&self) -> String;
}

impl FormatExpected for [TokenKind] {
    fn fmt_expected(&self) -> String {
        match self {
            [] => String::new(),
            [a] => a.to_string(),
            [a, b] => format!("{} or {}", a, b),
            [init @ .., last] => {
                let init: Vec<_> = init.iter().map(ToString::to_string).collect();
                format!("{}, or {}", init.join(", "), last)
            }
        }
    }
}
