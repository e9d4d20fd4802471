//! # Tessera
//!
//! Safe arithmetic expression evaluation and exhaustive 24-game
//! solving, on exact arbitrary-precision arithmetic.
//!
//! Tessera evaluates untrusted arithmetic without ever executing it:
//! expressions are parsed into a small AST and walked under an
//! operator allow-list, so `__import__('os')` is just an unsupported
//! shape and `10**30` is just a large integer. On top of the evaluator
//! sits a 24-game solver that searches over exact rationals and a
//! checker that scores submitted answers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tessera::prelude::*;
//!
//! let value = parse_and_evaluate("2 ** 10 - 24", None)?;
//! let puzzle = Puzzle::new([3, 3, 8, 8])?;
//! let verdict = check_answer("8 / (3 - 8 / 3)", &puzzle);
//! assert_eq!(verdict, Verdict::Correct);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tessera_eval as eval;
pub use tessera_expr as expr;
pub use tessera_num as num;
pub use tessera_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tessera_eval::{parse_and_evaluate, ErrorKind, EvalError, MathEvaluator, OpSet};
    pub use tessera_expr::{parse, BinaryOp, Expr, UnaryOp};
    pub use tessera_num::{Integer, Number, Rational};
    pub use tessera_solve::{
        check_answer, find_solutions, has_solution, InvalidAnswer, Puzzle, Verdict,
    };
}
