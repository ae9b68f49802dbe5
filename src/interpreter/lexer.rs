use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an expression line.
///
/// Spaces, tabs, feeds and stray carriage returns between tokens are skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Star => write!(f, "*"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit in a `u64`, which the lexer
/// reports as an error for that span.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}

/// Splits one line into tokens, each paired with its starting byte column.
///
/// # Errors
/// - [`ParseError::LiteralTooLarge`] for a digit run that overflows `u64`.
/// - [`ParseError::UnexpectedCharacter`] for anything outside the grammar.
///
/// # Example
/// ```
/// use swapcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 + 30").unwrap();
/// assert_eq!(tokens, vec![(Token::Integer(2), 0), (Token::Plus, 2), (Token::Integer(30), 4)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { column });
                }
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::UnexpectedCharacter { character, column });
            },
        }
    }

    Ok(tokens)
}
