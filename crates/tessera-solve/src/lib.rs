//! 24-game solving on top of exact rational arithmetic.
//!
//! A hand of four digits is solvable when some arrangement of `+`,
//! `-`, `*`, `/` and parentheses over all four digits equals 24. The
//! search enumerates every arrangement over exact rationals, so hands
//! that need fractional intermediates (`8 / (3 - 8 / 3)`) are decided
//! correctly.
//!
//! Three entry points cover play:
//!
//! - [`Puzzle::generate`] draws a solvable hand,
//! - [`find_solutions`] and [`has_solution`] answer "how" and
//!   "whether",
//! - [`check_answer`] scores a submitted expression by evaluating it
//!   under the game's operator set and accounting for every digit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod answer;
pub mod derivation;
pub mod puzzle;
pub mod search;

pub use answer::{check_answer, game_op_set, InvalidAnswer, Verdict};
pub use derivation::{Derivation, GameOp};
pub use puzzle::{Puzzle, PuzzleError, PUZZLE_SIZE};
pub use search::{find_solutions, has_solution, DEFAULT_TARGET};

#[cfg(test)]
mod proptests;
