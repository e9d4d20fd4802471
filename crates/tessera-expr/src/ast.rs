//! Expression trees and operator tags.

use std::fmt;

use tessera_num::Number;

/// A binary operator tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (true division)
    Div,
    /// `//` (floored division)
    FloorDiv,
    /// `%` (floored remainder)
    Mod,
    /// `**`
    Pow,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
    /// `|`
    BitOr,
}

impl BinaryOp {
    /// Every binary operator, in precedence-table order.
    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::FloorDiv,
        Self::Mod,
        Self::Pow,
        Self::Shl,
        Self::Shr,
        Self::BitAnd,
        Self::BitXor,
        Self::BitOr,
    ];

    /// The surface syntax of this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A unary operator tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `+` (identity on numbers)
    Pos,
    /// `~` (bitwise complement)
    Invert,
    /// keyword `not`
    Not,
}

impl UnaryOp {
    /// Every unary operator.
    pub const ALL: [Self; 4] = [Self::Neg, Self::Pos, Self::Invert, Self::Not];

    /// The surface syntax of this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Invert => "~",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Either kind of operator. This is the currency of operator
/// allow-lists: a caller that permits `[Binary(Add), Unary(Neg)]` gets
/// subtraction-free arithmetic with negative literals intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// A binary operator.
    Binary(BinaryOp),
    /// A unary operator.
    Unary(UnaryOp),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(op) => op.fmt(f),
            Self::Unary(op) => op.fmt(f),
        }
    }
}

impl From<BinaryOp> for Op {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOp> for Op {
    fn from(op: UnaryOp) -> Self {
        Self::Unary(op)
    }
}

/// A parsed expression.
///
/// Only [`Expr::Literal`], [`Expr::Unary`], and [`Expr::Binary`] can
/// evaluate to a value. The remaining shapes exist so the evaluator
/// can report them precisely instead of the parser flattening them all
/// into one syntax error.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal(Number),
    /// A string literal, quotes stripped.
    Str(String),
    /// `True` or `False`.
    Bool(bool),
    /// The `None` keyword.
    NoneLit,
    /// A bare name such as `pi` or `__import__`.
    Name(String),
    /// A unary application.
    Unary {
        /// Operator tag.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// A binary application.
    Binary {
        /// Operator tag.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A tuple display such as `(1, 2)` or a bare `1, 2`.
    Tuple(Vec<Expr>),
    /// A list display such as `[1, 2]`.
    List(Vec<Expr>),
    /// A call such as `abs(-1)`.
    Call {
        /// The called expression.
        callee: Box<Expr>,
        /// Positional arguments.
        args: Vec<Expr>,
    },
    /// An attribute access such as `math.pi`.
    Attribute {
        /// The object expression.
        object: Box<Expr>,
        /// Attribute name.
        name: String,
    },
}

impl Expr {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// A short noun for this node shape, used in error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Literal(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::NoneLit => "None",
            Self::Name(_) => "name",
            Self::Unary { .. } => "unary operation",
            Self::Binary { .. } => "binary operation",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
            Self::Call { .. } => "function call",
            Self::Attribute { .. } => "attribute access",
        }
    }
}
