pub mod ast;
mod error;
mod lexer;
mod parser;
pub mod visit;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::TokenKind;

/// Parses a dice expression such as `(d6 + 2) * 3 > 10` into its expression tree.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    let expr = parser::Parser::new(s).parse()?;
    log::trace!("parsed {:?} as {}", s, expr);
    Ok(expr)
}
