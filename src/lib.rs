//! # swapcalc
//!
//! swapcalc evaluates worksheets of `+` and `*` expressions under two
//! precedence rules and sums the results line by line:
//!
//! - **swapped**: one precedence level, left to right, with the written `+`
//!   multiplying and the written `*` adding;
//! - **addition first**: natural meanings, but `+` binds tighter than `*`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// Declares the [`ast::Expr`] tree, the arithmetic [`ast::BinaryOperator`]
/// each node performs, and the [`ast::Interpretation`] a line is parsed
/// under.
pub mod ast;
/// Provides error types for parsing, evaluation and file handling.
///
/// Parse and runtime errors carry the byte column they refer to; the
/// top-level [`error::Error`] adds the input line number or file path.
pub mod error;
/// Orchestrates lexing, parsing and evaluation of a single line.
pub mod interpreter;
/// Subscriber setup for `tracing` diagnostics.
pub mod logging;
/// Sums whole worksheets, line by line, under both interpretations.
pub mod worksheet;

pub use ast::Interpretation;
pub use error::Error;
pub use worksheet::{Totals, sum_file, sum_source};

/// Evaluates a single expression under one interpretation.
///
/// Errors are reported as if the expression were line 1.
///
/// # Examples
/// ```
/// use swapcalc::{Interpretation, evaluate};
///
/// assert_eq!(evaluate("2 + 3", Interpretation::Swapped).unwrap(), 6);
/// assert_eq!(evaluate("2 + 3", Interpretation::AdditionFirst).unwrap(), 5);
/// assert!(evaluate("2 +", Interpretation::Swapped).is_err());
/// ```
pub fn evaluate(source: &str, interpretation: Interpretation) -> Result<u64, Error> {
    worksheet::evaluate_line(source.trim(), interpretation, 1)
}
