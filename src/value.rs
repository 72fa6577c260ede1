use crate::common::Int;
use crate::dist::Distribution;
use crate::error::DiceError;
use crate::roll::Roller;
use crate::table::{Row, Table};
use std::fmt;

/// Operations shared by every kind of evaluated value.
#[enum_dispatch::enum_dispatch]
pub trait Tabulate {
    /// The outcome listing, ascending by outcome.
    fn table(&self) -> Result<Table, DiceError>;

    /// Number of listed outcomes.
    fn outcome_count(&self) -> usize;

    fn is_deterministic(&self) -> bool;

    /// Draws one outcome according to its probability.
    fn roll<R: Roller + ?Sized>(&self, roller: &mut R) -> Int;
}

/// A plain integer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Constant(pub Int);

impl Tabulate for Constant {
    fn table(&self) -> Result<Table, DiceError> {
        Ok(Table::new([Row {
            outcome: self.0,
            percentage: 100.0,
        }]))
    }

    fn outcome_count(&self) -> usize {
        1
    }

    fn is_deterministic(&self) -> bool {
        true
    }

    fn roll<R: Roller + ?Sized>(&self, _roller: &mut R) -> Int {
        self.0
    }
}

impl Tabulate for Distribution {
    fn table(&self) -> Result<Table, DiceError> {
        self.percentages().map(|rows| rows.into_iter().collect())
    }

    fn outcome_count(&self) -> usize {
        self.len()
    }

    fn is_deterministic(&self) -> bool {
        Distribution::is_deterministic(self)
    }

    fn roll<R: Roller + ?Sized>(&self, roller: &mut R) -> Int {
        self.sample(roller)
    }
}

/// Result of evaluating an expression or a part of it.
#[enum_dispatch::enum_dispatch(Tabulate)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Constant(Constant),
    Distribution(Distribution),
}

impl From<Int> for Value {
    fn from(x: Int) -> Self {
        Self::Constant(Constant(x))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(Constant(x)) => fmt::Display::fmt(x, f),
            Self::Distribution(dist) => fmt::Display::fmt(dist, f),
        }
    }
}
