use crate::common::*;
use crate::dist::Distribution;
use crate::error::DiceError;
use std::fmt;

/// A dice literal such as `d6`, `3d8` or `d%`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub num: Num,
    pub sides: Sides,
}

impl Dice {
    pub const fn new(num: Num, sides: Sides) -> Self {
        Self { num, sides }
    }

    /// Number of distinct sums, `num * (sides - 1) + 1`. Saturates instead of overflowing.
    pub fn outcome_count(&self) -> usize {
        let faces = usize::try_from(self.sides.get().get() - 1).unwrap_or(usize::MAX);
        self.num.get().saturating_mul(faces).saturating_add(1)
    }

    /// Exact distribution of the sum of `num` dice with `sides` faces each.
    pub fn distribution(&self) -> Result<Distribution, DiceError> {
        let die = Distribution::uniform(self.sides.get());
        die.try_repeat(self.num.get(), |a, b| {
            BinaryOperator::Add.apply(a, b)
        })
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num.get() != 1 {
            write!(f, "{}", self.num)?;
        }
        write!(f, "d{}", self.sides)
    }
}

impl std::str::FromStr for Dice {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, sides) = s.split_once('d').ok_or(ParseDiceError::NoDelimiter)?;
        let num = if num.is_empty() {
            Num::MIN
        } else {
            num.parse().map_err(ParseDiceError::InvalidNum)?
        };
        let sides = sides.parse().map_err(ParseDiceError::InvalidSides)?;
        Ok(Self::new(num, sides))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid dice count: {0}")]
    InvalidNum(std::num::ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSides(std::num::ParseIntError),
}
