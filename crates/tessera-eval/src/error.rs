//! Evaluation errors and their classification.

use thiserror::Error;

use tessera_expr::{Op, ParseError};
use tessera_num::NumError;

/// The three failure classes of expression evaluation.
///
/// Callers that relay errors to users usually branch on this rather
/// than on the concrete [`EvalError`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a well-formed expression.
    Syntax,
    /// The input parses but is not arithmetic over numbers.
    Type,
    /// The arithmetic itself cannot be carried out.
    Arithmetic,
}

/// An error from [`crate::parse_and_evaluate`] or
/// [`crate::MathEvaluator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input failed to lex or parse.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// A literal other than a number, such as `'abc'`, `True`, or
    /// `None`.
    #[error("non-numeric literal {literal}")]
    NonNumericLiteral {
        /// Display form of the literal.
        literal: String,
    },
    /// A node shape evaluation never supports, such as a call or a
    /// list.
    #[error("unsupported expression: {shape}")]
    Unsupported {
        /// Short noun for the node shape.
        shape: &'static str,
    },
    /// An operator outside the evaluator's allow-list.
    #[error("operation `{op}` is not allowed")]
    OperatorNotAllowed {
        /// The operator tag.
        op: Op,
    },
    /// A numeric operation failed.
    #[error(transparent)]
    Numeric(#[from] NumError),
}

impl EvalError {
    /// Classifies this error.
    ///
    /// Disallowed operators count as arithmetic errors: the operation
    /// is recognized, this evaluator just refuses to carry it out.
    /// A [`NumError::IntegerRequired`] counts as a type error because
    /// the operand, not the value, is what is wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::NonNumericLiteral { .. } | Self::Unsupported { .. } => ErrorKind::Type,
            Self::OperatorNotAllowed { .. } => ErrorKind::Arithmetic,
            Self::Numeric(e) => match e {
                NumError::IntegerRequired { .. } => ErrorKind::Type,
                _ => ErrorKind::Arithmetic,
            },
        }
    }
}
