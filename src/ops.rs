use crate::common::*;
use crate::dist::Distribution;
use crate::error::DiceError;
use crate::value::{Constant, Value};

/// Outcomes of a comparison against a constant. Both are listed even when impossible.
const COMPARISON_OUTCOMES: [Int; 2] = [0, 1];

impl BinaryOperator {
    /// Applies the operator to two plain integers. Comparisons yield `1` when they hold and `0`
    /// otherwise.
    pub fn apply(self, lhs: Int, rhs: Int) -> Result<Int, DiceError> {
        let ret = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Lt => Some(Int::from(lhs < rhs)),
            Self::Gt => Some(Int::from(lhs > rhs)),
        };
        ret.ok_or_else(|| DiceError::overflow(format!("{} {} {}", lhs, self, rhs)))
    }
}

impl UnaryOperator {
    pub fn apply(self, x: Int) -> Result<Int, DiceError> {
        match self {
            Self::Pos => Ok(x),
            Self::Neg => x
                .checked_neg()
                .ok_or_else(|| DiceError::overflow(format!("-{}", x))),
        }
    }

    pub fn operate(self, value: Value) -> Result<Value, DiceError> {
        Ok(match value {
            Value::Constant(Constant(x)) => self.apply(x)?.into(),
            Value::Distribution(dist) => dist.try_map(|x| self.apply(x))?.into(),
        })
    }
}

/// A binary operator together with both of its operands, evaluated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    op: BinaryOperator,
    lhs: Value,
    rhs: Value,
}

impl Operation {
    pub fn new(op: BinaryOperator, lhs: Value, rhs: Value) -> Self {
        Self { op, lhs, rhs }
    }

    /// Computes the resulting value. Whenever a distribution is involved the result is the exact
    /// distribution of `lhs op rhs`, with equal outcomes merged.
    pub fn evaluate(self) -> Result<Value, DiceError> {
        let op = self.op;
        let ret: Value = match (self.lhs, self.rhs) {
            (Value::Constant(Constant(a)), Value::Constant(Constant(b))) => op.apply(a, b)?.into(),
            (Value::Distribution(dist), Value::Constant(Constant(c))) => {
                Self::collapse(op, dist.try_map(|x| op.apply(x, c))?).into()
            }
            (Value::Constant(Constant(c)), Value::Distribution(dist)) => {
                Self::collapse(op, dist.try_map(|x| op.apply(c, x))?).into()
            }
            (Value::Distribution(l), Value::Distribution(r)) => {
                l.try_combine_with(&r, |a, b| op.apply(a, b))?.into()
            }
        };
        if let Value::Distribution(dist) = &ret {
            dist.check_mass()?;
        }
        Ok(ret)
    }

    fn collapse(op: BinaryOperator, dist: Distribution) -> Distribution {
        if op.is_comparison() {
            dist.with_buckets(COMPARISON_OUTCOMES)
        } else {
            dist
        }
    }
}
