use crate::common::*;
use crate::dice::Dice;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) root: Node,
}

impl Expression {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Int),
    Dice(Dice),
    Parenthetical(Box<Node>),
    Unary(UnaryOperator, Box<Node>),
    Binary(Box<Node>, BinaryOperator, Box<Node>),
}

impl Node {
    pub fn new_literal(x: Int) -> Self {
        Self::Literal(x)
    }

    pub fn new_dice(dice: Dice) -> Self {
        Self::Dice(dice)
    }

    pub fn new_parenthetical(inner: Self) -> Self {
        Self::Parenthetical(Box::new(inner))
    }

    pub fn new_unary(op: UnaryOperator, rhs: Self) -> Self {
        Self::Unary(op, Box::new(rhs))
    }

    pub fn new_binary(op: BinaryOperator, lhs: Self, rhs: Self) -> Self {
        Self::Binary(Box::new(lhs), op, Box::new(rhs))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(x) => write!(f, "{}", x),
            Self::Dice(dice) => write!(f, "{}", dice),
            Self::Parenthetical(x) => write!(f, "({})", x),
            Self::Unary(op, x) => write!(f, "{}{}", op, x),
            Self::Binary(l, op, r) => write!(f, "{} {} {}", l, op, r),
        }
    }
}
