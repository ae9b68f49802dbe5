use crate::ast::BinaryOperator;

/// Represents all errors that can occur while reducing an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// An intermediate result does not fit in an unsigned 64-bit integer.
    #[error("Overflow evaluating {left} {op} {right} (operator at column {column}).")]
    Overflow {
        /// The arithmetic that overflowed.
        op:     BinaryOperator,
        /// Left operand value.
        left:   u64,
        /// Right operand value.
        right:  u64,
        /// Column of the operator symbol.
        column: usize,
    },
}
