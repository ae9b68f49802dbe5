/// Represents all errors that can occur during lexing or parsing of a line.
///
/// Columns are 0-based byte offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that is not part of the expression grammar.
    #[error("Unexpected character '{character}' at column {column}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        column:    usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Unexpected token '{token}' at column {column}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Where it was found.
        column: usize,
    },
    /// Reached the end of the line while an operand was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' for the '(' at column {column}.")]
    ExpectedClosingParen {
        /// Column of the unmatched `(`.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression, starting with '{token}' at column {column}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Where it was found.
        column: usize,
    },
    /// The line contained no tokens at all.
    #[error("Empty expression.")]
    EmptyExpression,
    /// A literal does not fit in an unsigned 64-bit integer.
    #[error("Literal at column {column} is too large.")]
    LiteralTooLarge {
        /// Where the literal starts.
        column: usize,
    },
}
