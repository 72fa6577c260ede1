use crate::common::*;
use crate::dice::Dice;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_int(&mut self, x: &Int) -> Self::Output;

    fn visit_dice(&mut self, dice: &Dice) -> Self::Output;

    fn visit_parenthetical(&mut self, p: &ast::Node) -> Self::Output;

    fn visit_unary(&mut self, op: &UnaryOperator, r: &ast::Node) -> Self::Output;

    fn visit_binary(&mut self, l: &ast::Node, op: &BinaryOperator, r: &ast::Node) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Expression {
    fn accept(&self, v: &mut V) -> V::Output {
        v.visit(&self.root)
    }
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Node {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Literal(x) => v.visit_int(x),
            Self::Dice(x) => v.visit_dice(x),
            Self::Parenthetical(x) => v.visit_parenthetical(x),
            Self::Unary(op, x) => v.visit_unary(op, x),
            Self::Binary(l, op, r) => v.visit_binary(l, op, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts the dice terms in an expression.
    struct DiceCounter;

    impl AstVisitor for DiceCounter {
        type Output = usize;

        fn visit_int(&mut self, _x: &Int) -> usize {
            0
        }

        fn visit_dice(&mut self, dice: &Dice) -> usize {
            dice.num.get()
        }

        fn visit_parenthetical(&mut self, p: &ast::Node) -> usize {
            p.accept(self)
        }

        fn visit_unary(&mut self, _op: &UnaryOperator, r: &ast::Node) -> usize {
            r.accept(self)
        }

        fn visit_binary(&mut self, l: &ast::Node, _op: &BinaryOperator, r: &ast::Node) -> usize {
            l.accept(self) + r.accept(self)
        }
    }

    #[test]
    fn test_visit_counts_dice() {
        let expr = crate::parse::parse("(3d6 + 2) * -d4 > d%").unwrap();
        assert_eq!(DiceCounter.visit(&expr), 5);
        let expr = crate::parse::parse("1 + 2").unwrap();
        assert_eq!(expr.accept(&mut DiceCounter), 0);
    }
}
