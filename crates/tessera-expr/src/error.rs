//! Lexing and parsing errors.

use thiserror::Error;

use crate::parser::{MAX_DEPTH, MAX_TOKENS};

/// An error produced while tokenizing or parsing an expression.
///
/// Byte offsets refer to the original input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside the grammar, such as `=` or `{`.
    #[error("unexpected character `{ch}` at byte {at}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        at: usize,
    },
    /// A numeric literal the lexer could not finish, such as `1e+` or
    /// an integer with leading zeros.
    #[error("malformed numeric literal at byte {at}")]
    MalformedNumber {
        /// Byte offset where the literal starts.
        at: usize,
    },
    /// A string literal with no closing quote.
    #[error("unterminated string starting at byte {at}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        at: usize,
    },
    /// A well-formed token in a position the grammar does not allow.
    #[error("unexpected token `{found}` at byte {at}")]
    UnexpectedToken {
        /// Display form of the token.
        found: String,
        /// Byte offset of the token.
        at: usize,
    },
    /// Input ended where the grammar required more.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// The expression nests deeper than [`MAX_DEPTH`] levels.
    #[error("expression nests deeper than {} levels", MAX_DEPTH)]
    NestedTooDeep,
    /// The expression has more than [`MAX_TOKENS`] tokens.
    #[error("expression exceeds {} tokens", MAX_TOKENS)]
    TooLong,
}
