use crate::common::*;
use crate::dice::Dice;
use crate::error::DiceError;
use crate::ops::Operation;
use crate::parse::{
    ast,
    visit::{self, Accept},
};
use crate::value::{Tabulate, Value};

type EResult<T = Value> = Result<T, DiceError>;

/// Bounds on how much work a single expression may cause.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    /// Largest count prefix accepted on a dice literal.
    pub max_dice: usize,
    /// Largest number of distinct outcomes any intermediate distribution may have.
    pub max_outcomes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dice: 100,
            max_outcomes: 10_000,
        }
    }
}

/// Reduces an expression tree to a single [Value], innermost operations first.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    limits: Limits,
}

impl EvalContext {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn eval(&mut self, expr: &ast::Expression) -> EResult {
        expr.accept(self)
    }

    fn check_outcomes(&self, value: Value) -> EResult {
        if value.outcome_count() > self.limits.max_outcomes {
            Err(DiceError::TooManyOutcomes(self.limits.max_outcomes))
        } else {
            Ok(value)
        }
    }
}

impl visit::AstVisitor for EvalContext {
    type Output = EResult;

    fn visit_int(&mut self, x: &Int) -> Self::Output {
        Ok((*x).into())
    }

    fn visit_dice(&mut self, dice: &Dice) -> Self::Output {
        if dice.num.get() > self.limits.max_dice {
            return Err(DiceError::TooManyDice);
        }
        if dice.outcome_count() > self.limits.max_outcomes {
            return Err(DiceError::TooManyOutcomes(self.limits.max_outcomes));
        }
        let dist = dice.distribution()?;
        log::debug!("{} has {} outcomes", dice, dist.len());
        self.check_outcomes(dist.into())
    }

    fn visit_parenthetical(&mut self, p: &ast::Node) -> Self::Output {
        p.accept(self)
    }

    fn visit_unary(&mut self, op: &UnaryOperator, r: &ast::Node) -> Self::Output {
        let value = r.accept(self)?;
        op.operate(value)
    }

    fn visit_binary(&mut self, l: &ast::Node, op: &BinaryOperator, r: &ast::Node) -> Self::Output {
        let left = l.accept(self)?;
        let right = r.accept(self)?;
        let ret = Operation::new(*op, left, right).evaluate()?;
        log::debug!("{} {} {} = {}", l, op, r, ret);
        self.check_outcomes(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    fn table_with(limits: Limits, s: &str) -> EResult<Table> {
        let expr = crate::parse::parse(s)?;
        EvalContext::new(limits).eval(&expr)?.table()
    }

    fn table(s: &str) -> Table {
        table_with(Limits::default(), s).unwrap()
    }

    fn check(s: &str, expected: &str) {
        assert_eq!(table(s).to_string(), expected);
    }

    #[test]
    fn test_eval_constants() {
        check("1+2", "3 100.00\n");
        check("(1+2)*3", "9 100.00\n");
        check("(1+2*3)", "7 100.00\n");
        check("2*3+1", "7 100.00\n");
        check("10-3-2", "5 100.00\n");
        check("-(2+3)", "-5 100.00\n");
        check("1<2", "1 100.00\n");
        check("3<2", "0 100.00\n");
    }

    #[test]
    fn test_eval_single_die() {
        check(
            "d6",
            "1 16.67\n2 16.67\n3 16.67\n4 16.67\n5 16.67\n6 16.67\n",
        );
        let t = table("d%");
        assert_eq!(t.len(), 100);
        assert!((t.percentage(57).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_eval_two_dice() {
        let t = table("d6+d6");
        assert_eq!(t.len(), 11);
        let lines: Vec<_> = t.rows().iter().map(|row| row.to_string()).collect();
        assert_eq!(lines.first().map(String::as_str), Some("2 2.78"));
        assert_eq!(lines[5], "7 16.67");
        assert_eq!(lines.last().map(String::as_str), Some("12 2.78"));
        assert_eq!(table("2d6"), t);
    }

    #[test]
    fn test_eval_comparisons() {
        check("d6<4", "0 50.00\n1 50.00\n");
        check("4>d6", "0 50.00\n1 50.00\n");
        check("d6>10", "0 100.00\n1 0.00\n");
        check("d6+d6>10", "0 91.67\n1 8.33\n");
    }

    #[test]
    fn test_eval_tables_sum_to_100() {
        for s in ["d6", "d20+d4*3", "(d6-d6)*d4", "3d6<d20", "-d8+2d4", "d%>50"] {
            let total = table(s).total();
            assert!((total - 100.0).abs() < 1e-6, "{} sums to {}", s, total);
        }
    }

    #[test]
    fn test_eval_limits() {
        let limits = Limits {
            max_dice: 4,
            max_outcomes: 30,
        };
        assert_eq!(table_with(limits, "4d6").map(|t| t.len()), Ok(21));
        assert_eq!(table_with(limits, "5d6"), Err(DiceError::TooManyDice));
        assert_eq!(table_with(limits, "d40"), Err(DiceError::TooManyOutcomes(30)));
        assert_eq!(table_with(limits, "d20+d20"), Err(DiceError::TooManyOutcomes(30)));
        assert_eq!(table_with(limits, "d20<d20").map(|t| t.len()), Ok(2));
    }

    #[test]
    fn test_eval_rejects_huge_dice_before_building() {
        let limits = Limits::default();
        for s in ["d20000000", "60d10000", "4d5000", "d4000000000 + 1"] {
            assert_eq!(
                table_with(limits, s),
                Err(DiceError::TooManyOutcomes(limits.max_outcomes)),
                "{}",
                s
            );
        }
        assert_eq!(table_with(limits, "d10000").map(|t| t.len()), Ok(10_000));
    }

    #[test]
    fn test_eval_overflow() {
        let err = table_with(Limits::default(), "9223372036854775807+d2").unwrap_err();
        assert!(matches!(err, DiceError::Overflow(_)));
    }

    #[test]
    fn test_eval_parse_errors() {
        assert_eq!(table_with(Limits::default(), "  "), Err(DiceError::Empty));
        assert!(matches!(
            table_with(Limits::default(), "1+"),
            Err(DiceError::Malformed(_))
        ));
    }
}
