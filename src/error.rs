/// Parsing errors.
///
/// Defines the errors raised while lexing and parsing a single line, such as
/// unknown characters, unbalanced parentheses or oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reducing a parsed expression.
pub mod runtime_error;

use std::path::PathBuf;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Top-level error for evaluating lines and files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("Failed to read the input file '{}'", .path.display())]
    Io {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A line could not be parsed.
    #[error("Error on line {line}")]
    Parse {
        /// 1-based line number in the input.
        line:   usize,
        /// What went wrong.
        #[source]
        source: ParseError,
    },
    /// A line parsed but could not be evaluated.
    #[error("Error on line {line}")]
    Runtime {
        /// 1-based line number in the input.
        line:   usize,
        /// What went wrong.
        #[source]
        source: RuntimeError,
    },
    /// Summing the per-line results overflowed.
    #[error("Total for the {interpretation} interpretation overflowed at line {line}")]
    TotalOverflow {
        /// Which total overflowed.
        interpretation: crate::ast::Interpretation,
        /// 1-based line number whose result pushed it over.
        line:           usize,
    },
}
