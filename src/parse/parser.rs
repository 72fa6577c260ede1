use super::error::{ParseError, ParseErrorKind};
use super::{ast::*, lexer::*};
use crate::common::*;
use crate::dice::Dice;
use logos_iter::LogosIter;

type PResult<T = Node> = Result<T, ParseError>;

/// Recursive-descent parser. Precedence from loosest to tightest: comparisons, addition and
/// subtraction, multiplication, unary prefixes, atoms. Binary operators are left-associative.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        if self.lexer.peek().is_none() {
            return self.error_at_end(ParseErrorKind::Empty);
        }

        let root = self.parse_node()?;
        if self.lexer.peek().is_some() {
            return self.unexpected_token(vec1![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
            ]);
        }
        Ok(Expression::new(root))
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(vec1![expected])
        }
    }

    fn consume_as<T: std::str::FromStr>(
        &mut self,
        expected: TokenKind,
    ) -> PResult<Result<T, T::Err>> {
        self.consume(expected)?;
        Ok(self.lexer.slice().parse())
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn error_at_end<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        let end = self.source.len();
        Err(ParseError {
            kind,
            span: end..end,
            slice: String::new(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: NonEmpty<TokenKind>) -> PResult<T> {
        match self.advance() {
            Some(TokenKind::ErrBadDice) => self.error(ParseErrorKind::InvalidDice),
            None => self.error_at_end(ParseErrorKind::UnexpectedToken {
                found: None,
                expected,
            }),
            found => self.error(ParseErrorKind::UnexpectedToken { found, expected }),
        }
    }

    fn next_binary_op(&mut self, options: &[TokenKind]) -> Option<BinaryOperator> {
        if self.matches_any(options) {
            self.advance().and_then(|kind| kind.as_binary_op())
        } else {
            None
        }
    }

    fn parse_node(&mut self) -> PResult {
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> PResult {
        let mut lhs = self.parse_addition()?;

        while let Some(op) = self.next_binary_op(TokenKind::COMPARISON_OPS) {
            let rhs = self.parse_addition()?;
            lhs = Node::new_binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_addition(&mut self) -> PResult {
        let mut lhs = self.parse_multiplication()?;

        while let Some(op) = self.next_binary_op(TokenKind::ADDITION_OPS) {
            let rhs = self.parse_multiplication()?;
            lhs = Node::new_binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_multiplication(&mut self) -> PResult {
        let mut lhs = self.parse_unary_prefix()?;

        while let Some(op) = self.next_binary_op(TokenKind::MULTIPLICATION_OPS) {
            let rhs = self.parse_unary_prefix()?;
            lhs = Node::new_binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_unary_prefix(&mut self) -> PResult {
        let op = if self.matches_any(TokenKind::UNARY_OPS) {
            self.advance().and_then(|kind| kind.as_unary_op())
        } else {
            None
        };

        match op {
            Some(op) => {
                let rhs = self.parse_unary_prefix()?;
                Ok(Node::new_unary(op, rhs))
            }
            None => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> PResult {
        match self.lexer.peek().copied() {
            Some(TokenKind::LeftParen) => self.parse_parens(),
            Some(TokenKind::Integer) => self.parse_integer(),
            Some(TokenKind::Dice) => self.parse_dice(),
            _ => self.unexpected_token(vec1![
                TokenKind::Integer,
                TokenKind::Dice,
                TokenKind::LeftParen,
            ]),
        }
    }

    fn parse_parens(&mut self) -> PResult {
        self.consume(TokenKind::LeftParen)?;
        let inner = self.parse_node()?;
        self.consume(TokenKind::RightParen)?;
        Ok(Node::new_parenthetical(inner))
    }

    fn parse_integer(&mut self) -> PResult {
        match self.consume_as::<Int>(TokenKind::Integer)? {
            Ok(x) => Ok(Node::new_literal(x)),
            Err(err) => self.error(ParseErrorKind::InvalidInteger(err)),
        }
    }

    fn parse_dice(&mut self) -> PResult {
        match self.consume_as::<Dice>(TokenKind::Dice)? {
            Ok(dice) => Ok(Node::new_dice(dice)),
            Err(err) => self.error(ParseErrorKind::InvalidDiceLiteral(err)),
        }
    }
}
