/// The evaluator module reduces parsed trees to values.
///
/// Evaluation is pure: the same tree always yields the same value or the same
/// overflow error.
pub mod evaluator;
/// The lexer module tokenizes one expression line.
///
/// It recognises integer literals, `+`, `*` and parentheses, skips
/// whitespace, and records the byte column of every token.
pub mod lexer;
/// The parser module builds an AST from tokens.
///
/// There is one grammar per
/// [`Interpretation`](crate::ast::Interpretation), and the operator each
/// node performs is fixed at parse time.
pub mod parser;

use crate::{
    ast::{Expr, Interpretation},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_line},
};

/// Lexes and parses one line under the given interpretation.
///
/// # Errors
/// Returns a [`ParseError`] for any lexical or grammatical problem.
pub fn parse(source: &str, interpretation: Interpretation) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_line(&tokens, interpretation)
}
