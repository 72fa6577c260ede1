//! Exact probability distributions of dice expressions.
//!
//! An expression combines integers and dice (`d6`, `3d8`, `d%`) with `+`, `-`, `*`, `<` and `>`,
//! grouped with parentheses. Evaluating it gives the chance of every possible outcome.
//!
//! ```
//! let table = dicedist::distribution("d6 < 4").unwrap();
//! assert_eq!(table.to_string(), "0 50.00\n1 50.00\n");
//!
//! let table = dicedist::distribution("(1 + 2) * 3").unwrap();
//! assert_eq!(table.to_string(), "9 100.00\n");
//! ```

mod common;
mod dice;
mod dist;
mod error;
mod eval;
mod ops;
pub mod parse;
mod roll;
mod table;
mod value;

pub use common::{BinaryOperator, Count, Int, Num, Sides, UnaryOperator};
pub use dice::{Dice, ParseDiceError};
pub use dist::Distribution;
pub use error::DiceError;
pub use eval::{EvalContext, Limits};
pub use ops::Operation;
pub use parse::ast::{Expression, Node};
pub use roll::Roller;
pub use table::{Row, Table};
pub use value::{Constant, Tabulate, Value};

/// Parses `s` into an expression tree.
pub fn parse(s: &str) -> Result<Expression, DiceError> {
    Ok(parse::parse(s)?)
}

/// Evaluates an expression with the default [Limits].
pub fn eval(expr: &Expression) -> Result<Value, DiceError> {
    EvalContext::default().eval(expr)
}

/// Parses and evaluates `s`, returning one row per possible outcome.
pub fn distribution(s: &str) -> Result<Table, DiceError> {
    eval(&parse(s)?)?.table()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution() {
        assert_eq!(distribution("1+2").unwrap().to_string(), "3 100.00\n");
        assert_eq!(distribution(""), Err(DiceError::Empty));
        assert!(matches!(distribution("d6 d6"), Err(DiceError::Malformed(_))));
        assert!(matches!(distribution("(d6"), Err(DiceError::Malformed(_))));
    }

    #[test]
    fn test_parse_then_eval() {
        let expr = parse("2d4 - 1").unwrap();
        assert_eq!(expr.to_string(), "2d4 - 1");
        let value = eval(&expr).unwrap();
        assert_eq!(value.outcome_count(), 7);
        assert!(!value.is_deterministic());
        assert!(eval(&parse("d1 * 5").unwrap()).unwrap().is_deterministic());
    }
}
