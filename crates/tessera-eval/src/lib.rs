//! Safe evaluation of untrusted arithmetic expressions.
//!
//! The evaluator walks a parsed [`tessera_expr::Expr`] and computes an
//! exact [`tessera_num::Number`]. Nothing is ever executed: names,
//! calls, and attribute access parse but always evaluate to a type
//! error, so `__import__('os').system('rm -rf /')` is as inert as
//! `"abc" + 1`.
//!
//! Callers restrict which operators are live through an [`OpSet`].
//! The allow-list is resolved when the evaluator is built: each
//! permitted operator tag is mapped to its numeric function once, and
//! evaluation does a table lookup per node.
//!
//! Every failure carries an [`ErrorKind`]: `Syntax` for input that
//! does not parse, `Type` for structurally valid input that is not
//! arithmetic over numbers, and `Arithmetic` for disallowed operators
//! and unevaluable values such as division by zero.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod evaluator;
pub mod ops;

pub use error::{ErrorKind, EvalError};
pub use evaluator::{parse_and_evaluate, MathEvaluator};
pub use ops::{BinaryFn, OpSet, UnaryFn};
