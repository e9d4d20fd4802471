//! Scoring submitted answers.
//!
//! An answer is scored in three stages: evaluate it under the game's
//! operator set, check that it spends exactly the puzzle's digits, and
//! compare its value against the target. Evaluation problems surface
//! first, so `4 * (4` is reported as bad syntax even when its digits
//! are also wrong.

use tessera_eval::{parse_and_evaluate, ErrorKind, EvalError, OpSet};
use tessera_expr::{tokenize, Token};
use tessera_num::{Integer, NumError, Number, Rational};
use thiserror::Error;

use crate::derivation::GameOp;
use crate::puzzle::Puzzle;
use crate::search::DEFAULT_TARGET;

/// Why an answer could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAnswer {
    /// The expression does not parse.
    #[error("the expression does not parse")]
    BadSyntax,
    /// The expression is not plain arithmetic over numbers.
    #[error("the expression is not plain arithmetic")]
    NotArithmetic,
    /// The expression uses an operation outside `+`, `-`, `*`, `/`.
    #[error("only `+`, `-`, `*` and `/` are allowed")]
    DisallowedOperation,
    /// The expression divides by zero.
    #[error("the expression divides by zero")]
    DivisionByZero,
    /// The numbers used are not exactly the puzzle's digits.
    #[error("use each of the puzzle's numbers exactly once")]
    WrongNumbers,
}

/// The outcome of scoring an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Evaluates to the target using exactly the puzzle's digits.
    Correct,
    /// A well-formed attempt whose value is not the target.
    Incorrect(Number),
    /// Not scoreable at all.
    Invalid(InvalidAnswer),
}

/// The operator set answers are evaluated under.
///
/// Exactly the four [`GameOp`]s; no unary minus, so `-4 + 28` is a
/// disallowed operation rather than a sneaky way around the digit
/// rule.
#[must_use]
pub fn game_op_set() -> OpSet {
    GameOp::ALL.iter().map(|op| op.binary_op()).collect()
}

/// Scores `answer` against `puzzle`.
///
/// Surrounding whitespace and code-formatting backticks are stripped
/// before parsing, so `` `4 * 4 + 4 + 4` `` scores like the bare
/// expression.
#[must_use]
pub fn check_answer(answer: &str, puzzle: &Puzzle) -> Verdict {
    let cleaned = answer.trim().trim_matches('`').trim();
    let value = match parse_and_evaluate(cleaned, Some(&game_op_set())) {
        Ok(value) => value,
        Err(err) => return Verdict::Invalid(classify(&err)),
    };
    if !uses_exact_digits(cleaned, puzzle) {
        return Verdict::Invalid(InvalidAnswer::WrongNumbers);
    }
    if value.to_rational() == Rational::from(DEFAULT_TARGET) {
        Verdict::Correct
    } else {
        Verdict::Incorrect(value)
    }
}

fn classify(err: &EvalError) -> InvalidAnswer {
    match err.kind() {
        ErrorKind::Syntax => InvalidAnswer::BadSyntax,
        ErrorKind::Type => InvalidAnswer::NotArithmetic,
        ErrorKind::Arithmetic => match err {
            EvalError::Numeric(NumError::DivisionByZero) => InvalidAnswer::DivisionByZero,
            _ => InvalidAnswer::DisallowedOperation,
        },
    }
}

/// Token-level digit accounting.
///
/// Every number token must be a plain integer small enough to compare,
/// and the multiset of number tokens must equal the puzzle's digits.
/// Working at the token level stops digits being glued together:
/// `10 * 2 + 4` has number tokens `{10, 2, 4}` and cannot clear a
/// `1 0 2 4` hand.
fn uses_exact_digits(expr: &str, puzzle: &Puzzle) -> bool {
    let Ok(tokens) = tokenize(expr) else {
        return false;
    };
    let mut used = Vec::with_capacity(tokens.len());
    for spanned in tokens {
        if let Token::Number(value) = spanned.token {
            let Some(written) = value.as_integer().and_then(Integer::to_i64) else {
                return false;
            };
            used.push(written);
        }
    }
    used.sort_unstable();
    let mut expected = puzzle.digits();
    expected.sort_unstable();
    used == expected
}
