use crate::common::{BinaryOperator, UnaryOperator};
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"([1-9][0-9]*)?d(%|[1-9][0-9]*)")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,

    // `d` without sides, `d0`, `0d6`
    #[regex(r"[0-9]*d(0[0-9]*)?|0[0-9]*d(%|[0-9]+)")]
    ErrBadDice,

    #[regex(r"[^0-9d+\-*<>()]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const COMPARISON_OPS: &'static [Self] = &[Self::LessThan, Self::GreaterThan];

    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const MULTIPLICATION_OPS: &'static [Self] = &[Self::Star];

    pub const UNARY_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer => "<integer>",
            Dice => "<dice>",
            LeftParen => "'('",
            RightParen => "')'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            LessThan => "'<'",
            GreaterThan => "'>'",
            ErrBadDice | Error => "<error>",
        }
    }

    pub fn as_unary_op(&self) -> Option<UnaryOperator> {
        use UnaryOperator::*;
        Some(match self {
            Self::Plus => Pos,
            Self::Minus => Neg,
            _ => return None,
        })
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::LessThan => Lt,
            Self::GreaterThan => Gt,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_numbers_and_ops() {
        use TokenKind::*;
        assert_eq!(kinds("12+3"), vec![Integer, Plus, Integer]);
        assert_eq!(kinds("(1 - 2) * 3"), vec![LeftParen, Integer, Minus, Integer, RightParen, Star, Integer]);
        assert_eq!(kinds("d6<4>1"), vec![Dice, LessThan, Integer, GreaterThan, Integer]);
    }

    #[test]
    fn test_lex_dice() {
        use TokenKind::*;
        assert_eq!(kinds("d6"), vec![Dice]);
        assert_eq!(kinds("d20"), vec![Dice]);
        assert_eq!(kinds("3d6"), vec![Dice]);
        assert_eq!(kinds("d%"), vec![Dice]);
        assert_eq!(kinds("d6d6"), vec![Dice, Dice]);
    }

    #[test]
    fn test_lex_bad_dice() {
        use TokenKind::*;
        assert_eq!(kinds("d"), vec![ErrBadDice]);
        assert_eq!(kinds("d+1"), vec![ErrBadDice, Plus, Integer]);
        assert_eq!(kinds("d0"), vec![ErrBadDice]);
        assert_eq!(kinds("0d6"), vec![ErrBadDice]);
        assert_eq!(kinds("2d"), vec![ErrBadDice]);
    }

    #[test]
    fn test_lex_skips_unknown() {
        use TokenKind::*;
        assert_eq!(kinds("  1 x+ y2 "), vec![Integer, Plus, Integer]);
        assert_eq!(kinds("roll: 1+2!"), vec![Integer, Plus, Integer]);
        assert!(kinds(" \t").is_empty());
    }
}
