//! Game operations and solution derivations.
//!
//! The solver works over exact rationals, so a derivation like
//! `8 / (3 - (8 / 3))` is found and rendered without any rounding
//! questions. A [`Derivation`] remembers how a value was built and
//! prints itself as an expression the evaluator accepts back.

use std::fmt;

use num_traits::Zero;
use tessera_expr::BinaryOp;
use tessera_num::Rational;

/// The four operations a hand may be combined with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl GameOp {
    /// Every game operation, in the order they are tried.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// The surface symbol used when rendering derivations.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// The evaluator-side operator this corresponds to.
    #[must_use]
    pub fn binary_op(self) -> BinaryOp {
        match self {
            Self::Add => BinaryOp::Add,
            Self::Sub => BinaryOp::Sub,
            Self::Mul => BinaryOp::Mul,
            Self::Div => BinaryOp::Div,
        }
    }

    /// Applies the operation exactly.
    ///
    /// Returns `None` only for division by zero; every other
    /// combination of rationals is defined.
    #[must_use]
    pub fn apply(self, lhs: &Rational, rhs: &Rational) -> Option<Rational> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div => {
                if rhs.is_zero() {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for GameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How a value was built from the starting numbers.
///
/// Rendering parenthesizes every combined operand and leaves the
/// outermost combination bare, so `(6 - 4) * 2` rather than
/// `((6 - 4) * 2)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Derivation {
    /// A starting number, used as written.
    Leaf(i64),
    /// Two earlier derivations combined with a game operation.
    Combine {
        /// The operation applied.
        op: GameOp,
        /// Derivation of the left operand.
        left: Box<Derivation>,
        /// Derivation of the right operand.
        right: Box<Derivation>,
    },
}

impl Derivation {
    /// Combines two derivations under `op`.
    #[must_use]
    pub fn combine(op: GameOp, left: Derivation, right: Derivation) -> Self {
        Self::Combine {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(n) => write!(f, "{n}"),
            Self::Combine { .. } => write!(f, "({self})"),
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(n) => write!(f, "{n}"),
            Self::Combine { op, left, right } => {
                left.fmt_operand(f)?;
                write!(f, " {op} ")?;
                right.fmt_operand(f)
            }
        }
    }
}
