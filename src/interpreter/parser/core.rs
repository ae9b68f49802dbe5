use std::iter::Peekable;

use crate::{
    ast::{Expr, Interpretation},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::binary::{parse_multiplicative, parse_uniform},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression under the given interpretation.
///
/// This is the recursive entry point, also used for parenthesised groups.
///
/// Grammar:
/// ```text
///     Swapped:        expression := uniform
///     AdditionFirst:  expression := multiplicative
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `interpretation`: Which precedence rules to build the tree with.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               interpretation: Interpretation)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match interpretation {
        Interpretation::Swapped => parse_uniform(tokens, interpretation),
        Interpretation::AdditionFirst => parse_multiplicative(tokens, interpretation),
    }
}

/// Parses one complete line of tokens.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if there are no tokens.
/// - [`ParseError::UnexpectedTrailingTokens`] if a complete expression is
///   followed by anything else.
/// - Any error from [`parse_expression`].
///
/// # Example
/// ```
/// use swapcalc::{
///     ast::Interpretation,
///     interpreter::{lexer::tokenize, parser::core::parse_line},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let tree = parse_line(&tokens, Interpretation::AdditionFirst).unwrap();
/// assert_eq!(tree.to_string(), "((1 + 2) * 3)");
/// ```
pub fn parse_line(tokens: &[(Token, usize)], interpretation: Interpretation) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, interpretation)?;

    match iter.next() {
        None => Ok(expr),
        Some((token, column)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                       column: *column, })
        },
    }
}
