use std::{fmt, mem};

/// The precedence rules a line is read under.
///
/// The same source text produces a different tree for each interpretation,
/// so the choice is made once, at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// One precedence level, left to right. The written `+` multiplies and
    /// the written `*` adds.
    Swapped,
    /// Natural meanings, but `+` binds tighter than `*`.
    AdditionFirst,
}

impl Interpretation {
    /// Both interpretations, in the order their totals are reported.
    pub const ALL: [Self; 2] = [Self::Swapped, Self::AdditionFirst];
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swapped => write!(f, "swapped"),
            Self::AdditionFirst => write!(f, "addition-first"),
        }
    }
}

/// The arithmetic performed by a binary node.
///
/// This is the operation actually carried out, which is not necessarily the
/// symbol written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition.
    Add,
    /// Multiplication.
    Mul,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Mul => write!(f, "*"),
        }
    }
}

/// An abstract syntax tree node.
///
/// Leaves are integer literals; every inner node is a binary operation whose
/// `op` already reflects the interpretation the tree was parsed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:  u64,
        /// Byte column of the literal in its line.
        column: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Expr>,
        /// Arithmetic to perform.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Expr>,
        /// Byte column of the operator symbol.
        column: usize,
    },
}

impl Expr {
    /// Builds a binary node from two subtrees.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, column: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         column }
    }
}

/// Tears the tree down with an explicit work list so that long operator
/// chains do not recurse once per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Moves the binary children of `expr` onto `pending`, leaving literals in
/// their place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::BinaryOp { left, right, .. } = expr {
        for child in [left, right] {
            if matches!(**child, Expr::BinaryOp { .. }) {
                pending.push(mem::replace(&mut **child, Expr::Literal { value: 0, column: 0 }));
            }
        }
    }
}

/// Renders the tree fully parenthesised, using the arithmetic symbols.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
