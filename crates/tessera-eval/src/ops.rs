//! Operator allow-lists and numeric dispatch.

use rustc_hash::FxHashSet;

use tessera_expr::{BinaryOp, Op, UnaryOp};
use tessera_num::{NumError, Number};

/// The signature of a binary numeric operation.
pub type BinaryFn = fn(&Number, &Number) -> Result<Number, NumError>;

/// The signature of a unary numeric operation.
pub type UnaryFn = fn(&Number) -> Result<Number, NumError>;

/// A set of permitted operators.
///
/// Restricting to `+ - * /` is how the puzzle side of this workspace
/// keeps `4 ** 4` out of submitted answers while the evaluator stays
/// generic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpSet {
    members: FxHashSet<Op>,
}

impl OpSet {
    /// The empty set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Every binary and unary operator.
    #[must_use]
    pub fn all() -> Self {
        let mut set = Self::none();
        for op in BinaryOp::ALL {
            set.insert(op);
        }
        for op in UnaryOp::ALL {
            set.insert(op);
        }
        set
    }

    /// Adds an operator.
    pub fn insert(&mut self, op: impl Into<Op>) {
        self.members.insert(op.into());
    }

    /// Removes an operator. Returns whether it was present.
    pub fn remove(&mut self, op: impl Into<Op>) -> bool {
        self.members.remove(&op.into())
    }

    /// Whether an operator is permitted.
    #[must_use]
    pub fn contains(&self, op: impl Into<Op>) -> bool {
        self.members.contains(&op.into())
    }

    /// Number of permitted operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no operator is permitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: Into<Op>> FromIterator<T> for OpSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::none();
        for op in iter {
            set.insert(op);
        }
        set
    }
}

/// The numeric function behind a binary operator tag.
pub(crate) fn binary_fn(op: BinaryOp) -> BinaryFn {
    match op {
        BinaryOp::Add => |a, b| Ok(a + b),
        BinaryOp::Sub => |a, b| Ok(a - b),
        BinaryOp::Mul => |a, b| Ok(a * b),
        BinaryOp::Div => Number::true_div,
        BinaryOp::FloorDiv => Number::floor_div,
        BinaryOp::Mod => Number::floor_mod,
        BinaryOp::Pow => Number::pow,
        BinaryOp::Shl => Number::shift_left,
        BinaryOp::Shr => Number::shift_right,
        BinaryOp::BitAnd => Number::bit_and,
        BinaryOp::BitXor => Number::bit_xor,
        BinaryOp::BitOr => Number::bit_or,
    }
}

/// The numeric function behind a unary operator tag.
pub(crate) fn unary_fn(op: UnaryOp) -> UnaryFn {
    match op {
        UnaryOp::Neg => |v| Ok(-v),
        UnaryOp::Pos => |v| Ok(v.clone()),
        UnaryOp::Invert => Number::invert,
        UnaryOp::Not => |v| Ok(v.logical_not()),
    }
}
