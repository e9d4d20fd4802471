//! Lexing and parsing of arithmetic expressions.
//!
//! The grammar is the expression subset of general-purpose arithmetic:
//! numeric literals (decimal, scientific, and `0x`/`0o`/`0b` radix
//! forms), the binary operators `+ - * / // % ** << >> & ^ |`, the
//! unary operators `- + ~` and the keyword `not`, parentheses, and
//! tuple syntax with trailing commas.
//!
//! Some shapes that evaluation always rejects, such as names, calls,
//! attribute access, strings, and list literals, are still parsed into
//! the AST. Classifying `__import__('os')` as a type error rather than
//! a syntax error requires seeing the call, and error taxonomy is the
//! whole point of the safe evaluator built on top of this crate.
//!
//! Operator precedence, from loosest to tightest:
//!
//! 1. tuple `,`
//! 2. `not`
//! 3. `|`
//! 4. `^`
//! 5. `&`
//! 6. `<<` `>>`
//! 7. `+` `-`
//! 8. `*` `/` `//` `%`
//! 9. unary `-` `+` `~`
//! 10. `**` (right-associative, binds tighter than unary on its left,
//!     so `-2**2` is `-(2**2)`)
//! 11. calls, attribute access

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod error;
pub mod parser;
pub mod token;

pub use ast::{BinaryOp, Expr, Op, UnaryOp};
pub use error::ParseError;
pub use parser::{parse, MAX_DEPTH, MAX_TOKENS};
pub use token::{tokenize, SpannedToken, Token};

#[cfg(test)]
mod proptests;
