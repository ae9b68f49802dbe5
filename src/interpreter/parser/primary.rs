use std::iter::Peekable;

use crate::{
    ast::{Expr, Interpretation},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends where an operand is expected.
/// - `UnexpectedToken` for an operator or `)` in operand position.
/// - `ExpectedClosingParen` if a group is never closed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   interpretation: Interpretation)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), column)) => Ok(Expr::Literal { value:  *value,
                                                                    column: *column, }),
        Some((Token::LParen, column)) => parse_grouping(tokens, interpretation, *column),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                                 column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the body of a group whose `(` has already been consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         interpretation: Interpretation,
                         column: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, interpretation)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { column }),
    }
}
