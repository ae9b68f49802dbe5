use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Interpretation},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses a single precedence level of `+` and `*`.
///
/// Every operator binds equally and the fold is left-associative, so
/// `a + b * c` becomes `(a + b) * c` before operator meanings are applied.
///
/// The rule is: `uniform := primary (("+" | "*") primary)*`
pub fn parse_uniform<'a, I>(tokens: &mut Peekable<I>,
                            interpretation: Interpretation)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_primary(tokens, interpretation)?;
    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token, interpretation)
    {
        let column = *column;
        tokens.next();
        let right = parse_primary(tokens, interpretation)?;
        left = Expr::binary(left, op, right, column);
    }
    Ok(left)
}

/// Parses a product of sums.
///
/// The rule is: `multiplicative := additive ("*" additive)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   interpretation: Interpretation)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, interpretation)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token, interpretation)
           && matches!(op, BinaryOperator::Mul)
        {
            let column = *column;
            tokens.next();
            let right = parse_additive(tokens, interpretation)?;
            left = Expr::binary(left, op, right, column);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a sum of primaries; binds tighter than [`parse_multiplicative`].
///
/// The rule is: `additive := primary ("+" primary)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             interpretation: Interpretation)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_primary(tokens, interpretation)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token, interpretation)
           && matches!(op, BinaryOperator::Add)
        {
            let column = *column;
            tokens.next();
            let right = parse_primary(tokens, interpretation)?;
            left = Expr::binary(left, op, right, column);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps an operator token to the arithmetic it performs.
///
/// Under [`Interpretation::Swapped`] the written `+` multiplies and the
/// written `*` adds. Returns `None` for tokens that are not operators.
///
/// # Example
/// ```
/// use swapcalc::{
///     ast::{BinaryOperator, Interpretation},
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus, Interpretation::Swapped),
///            Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Plus, Interpretation::AdditionFirst),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token,
                                      interpretation: Interpretation)
                                      -> Option<BinaryOperator> {
    match (token, interpretation) {
        (Token::Plus, Interpretation::Swapped) | (Token::Star, Interpretation::AdditionFirst) => {
            Some(BinaryOperator::Mul)
        },
        (Token::Star, Interpretation::Swapped) | (Token::Plus, Interpretation::AdditionFirst) => {
            Some(BinaryOperator::Add)
        },
        _ => None,
    }
}
