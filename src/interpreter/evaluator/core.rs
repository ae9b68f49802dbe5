use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its value.
///
/// The tree already encodes the interpretation it was parsed under. Operator
/// chains parse into left-deep trees, so the left spine is walked with a
/// loop and folded from the innermost node outwards. Only right operands
/// recurse, so stack depth follows parenthesis nesting.
///
/// # Errors
/// Returns [`RuntimeError::Overflow`] if any intermediate value exceeds
/// `u64::MAX`.
///
/// # Example
/// ```
/// use swapcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::eval,
/// };
///
/// let two = Expr::Literal { value: 2, column: 0 };
/// let three = Expr::Literal { value: 3, column: 4 };
/// let tree = Expr::binary(two, BinaryOperator::Mul, three, 2);
/// assert_eq!(eval(&tree).unwrap(), 6);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<u64> {
    let mut spine = Vec::new();
    let mut node = expr;
    let mut value = loop {
        match node {
            Expr::Literal { value, .. } => break *value,
            Expr::BinaryOp { left, op, right, column } => {
                spine.push((*op, right.as_ref(), *column));
                node = left.as_ref();
            },
        }
    };

    for (op, right, column) in spine.into_iter().rev() {
        value = eval_binary_op(op, value, eval(right)?, column)?;
    }
    Ok(value)
}

/// Applies one arithmetic operator with overflow checking.
///
/// # Parameters
/// - `op`: The arithmetic to perform.
/// - `left`, `right`: Operand values.
/// - `column`: Operator column for error reporting.
pub fn eval_binary_op(op: BinaryOperator, left: u64, right: u64, column: usize) -> EvalResult<u64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Mul => left.checked_mul(right),
    };
    result.ok_or(RuntimeError::Overflow { op,
                                          left,
                                          right,
                                          column })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: u64) -> Expr {
        Expr::Literal { value, column: 0 }
    }

    #[test]
    fn literal_evaluates_to_itself() {
        assert_eq!(eval(&lit(17)).unwrap(), 17);
    }

    #[test]
    fn nested_operations() {
        // (1 + 2) * (3 + 4)
        let tree = Expr::binary(Expr::binary(lit(1), BinaryOperator::Add, lit(2), 0),
                                BinaryOperator::Mul,
                                Expr::binary(lit(3), BinaryOperator::Add, lit(4), 0),
                                0);
        assert_eq!(eval(&tree).unwrap(), 21);
    }

    #[test]
    fn long_left_deep_chain() {
        let tree = (1..200_000).fold(lit(1), |acc, _| {
                                   Expr::binary(acc, BinaryOperator::Add, lit(1), 0)
                               });
        assert_eq!(eval(&tree).unwrap(), 200_000);
    }

    #[test]
    fn zero_operands() {
        assert_eq!(eval_binary_op(BinaryOperator::Mul, 0, 99, 0).unwrap(), 0);
        assert_eq!(eval_binary_op(BinaryOperator::Add, 0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(eval_binary_op(BinaryOperator::Mul, u64::MAX, 2, 5),
                   Err(RuntimeError::Overflow { op:     BinaryOperator::Mul,
                                                left:   u64::MAX,
                                                right:  2,
                                                column: 5, }));
        assert!(eval_binary_op(BinaryOperator::Add, u64::MAX, 1, 0).is_err());
    }
}
