use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};
use std::str::FromStr;
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// Number of dice in a dice literal (`3` in `3d6`).
pub type Num = NonZeroUsize;

/// Weight of an outcome, relative to the denominator of its distribution.
pub type Count = num::BigUint;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sides {
    Poly(NonZeroUInt),
    Percentile,
}

impl Sides {
    const PERCENTILE_SIDES: NonZeroUInt = match NonZeroUInt::new(100) {
        Some(x) => x,
        None => panic!("percentile dice have 100 sides"),
    };

    pub const fn get(self) -> NonZeroUInt {
        match self {
            Self::Poly(x) => x,
            Self::Percentile => Self::PERCENTILE_SIDES,
        }
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly(x) => fmt::Display::fmt(x, f),
            Self::Percentile => f.write_char('%'),
        }
    }
}

impl From<NonZeroUInt> for Sides {
    fn from(x: NonZeroUInt) -> Self {
        Self::Poly(x)
    }
}

impl FromStr for Sides {
    type Err = <NonZeroUInt as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "%" {
            Ok(Self::Percentile)
        } else {
            s.parse().map(Self::Poly)
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOperator {
    Pos,
    Neg,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Pos => '+',
            Self::Neg => '-',
        };
        f.write_char(c)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Lt,
    Gt,
}

impl BinaryOperator {
    /// Comparisons collapse their operands to `0` or `1`.
    pub fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Gt)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Lt => '<',
            Self::Gt => '>',
        };
        f.write_char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_from_str() {
        assert_eq!("20".parse::<Sides>(), Ok(Sides::Poly(NonZeroUInt::new(20).unwrap())));
        assert_eq!("%".parse::<Sides>(), Ok(Sides::Percentile));
        assert!("0".parse::<Sides>().is_err());
        assert_eq!(Sides::Percentile.get().get(), 100);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOperator::Lt.to_string(), "<");
        assert_eq!(UnaryOperator::Neg.to_string(), "-");
        assert!(BinaryOperator::Gt.is_comparison());
        assert!(!BinaryOperator::Mul.is_comparison());
    }
}
