//! The evaluator proper.

use rustc_hash::FxHashMap;

use tessera_expr::{parse, BinaryOp, Expr, Op, UnaryOp};
use tessera_num::Number;

use crate::error::EvalError;
use crate::ops::{binary_fn, unary_fn, BinaryFn, OpSet, UnaryFn};

/// Evaluates expressions against a fixed operator allow-list.
///
/// Construction resolves the allow-list into dispatch tables, so an
/// evaluator can be built once and reused across many inputs.
pub struct MathEvaluator {
    binary: FxHashMap<BinaryOp, BinaryFn>,
    unary: FxHashMap<UnaryOp, UnaryFn>,
}

impl MathEvaluator {
    /// An evaluator permitting every operator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_allowed(&OpSet::all())
    }

    /// An evaluator permitting exactly the operators in `allowed`.
    #[must_use]
    pub fn with_allowed(allowed: &OpSet) -> Self {
        let mut binary = FxHashMap::default();
        for op in BinaryOp::ALL {
            if allowed.contains(op) {
                binary.insert(op, binary_fn(op));
            }
        }
        let mut unary = FxHashMap::default();
        for op in UnaryOp::ALL {
            if allowed.contains(op) {
                unary.insert(op, unary_fn(op));
            }
        }
        Self { binary, unary }
    }

    /// Parses and evaluates one expression string.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`]; call [`EvalError::kind`] to classify
    /// it as syntax, type, or arithmetic.
    pub fn evaluate(&self, input: &str) -> Result<Number, EvalError> {
        let expr = parse(input)?;
        self.eval_expr(&expr)
    }

    /// Evaluates an already-parsed expression.
    ///
    /// The operator check happens before the operands are evaluated,
    /// so `(1/0) * 2` with `*` disallowed reports the disallowed
    /// operator, not the division by zero under it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MathEvaluator::evaluate`], minus syntax.
    pub fn eval_expr(&self, expr: &Expr) -> Result<Number, EvalError> {
        match expr {
            Expr::Literal(n) => Ok(n.clone()),
            Expr::Binary { op, left, right } => {
                let f = self
                    .binary
                    .get(op)
                    .copied()
                    .ok_or(EvalError::OperatorNotAllowed {
                        op: Op::Binary(*op),
                    })?;
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                Ok(f(&lhs, &rhs)?)
            }
            Expr::Unary { op, operand } => {
                let f = self
                    .unary
                    .get(op)
                    .copied()
                    .ok_or(EvalError::OperatorNotAllowed { op: Op::Unary(*op) })?;
                let value = self.eval_expr(operand)?;
                Ok(f(&value)?)
            }
            Expr::Str(s) => Err(EvalError::NonNumericLiteral {
                literal: format!("'{s}'"),
            }),
            Expr::Bool(b) => Err(EvalError::NonNumericLiteral {
                literal: (if *b { "True" } else { "False" }).to_owned(),
            }),
            Expr::NoneLit => Err(EvalError::NonNumericLiteral {
                literal: "None".to_owned(),
            }),
            other => Err(EvalError::Unsupported {
                shape: other.shape(),
            }),
        }
    }
}

impl Default for MathEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses and evaluates `input`, permitting the operators in
/// `allowed`, or every operator when `allowed` is `None`.
///
/// This is the one-shot form; build a [`MathEvaluator`] to amortize
/// table construction over many inputs.
///
/// # Errors
///
/// Returns an [`EvalError`]; call [`EvalError::kind`] to classify it.
pub fn parse_and_evaluate(input: &str, allowed: Option<&OpSet>) -> Result<Number, EvalError> {
    let evaluator = match allowed {
        Some(ops) => MathEvaluator::with_allowed(ops),
        None => MathEvaluator::new(),
    };
    evaluator.evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tessera_num::Rational;

    fn eval(input: &str) -> Result<Number, EvalError> {
        parse_and_evaluate(input, None)
    }

    fn eval_num(input: &str) -> Number {
        eval(input).unwrap_or_else(|e| panic!("eval of {input:?} failed: {e}"))
    }

    fn kind_of(input: &str) -> ErrorKind {
        eval(input)
            .expect_err("expected an error")
            .kind()
    }

    fn int(n: i64) -> Number {
        Number::from(n)
    }

    fn rat(n: i64, d: i64) -> Number {
        Number::from(Rational::from_i64(n, d))
    }

    #[test]
    fn test_arithmetic_basics() {
        assert_eq!(eval_num("2+3*4"), int(14));
        assert_eq!(eval_num("(2+3)*4"), int(20));
        assert_eq!(eval_num("3*(8-6)+5*2"), int(16));
        assert_eq!(eval_num("10-3-2"), int(5));
        assert_eq!(eval_num("7//2"), int(3));
        assert_eq!(eval_num("7%3"), int(1));
        assert_eq!(eval_num("2**10"), int(1024));
    }

    #[test]
    fn test_division_is_exact_and_rational() {
        assert_eq!(eval_num("1/3"), rat(1, 3));
        assert_eq!(eval_num("1/3 + 1/6"), rat(1, 2));
        let q = eval_num("4/2");
        assert_eq!(q, int(2));
        assert!(matches!(q, Number::Rational(_)));
    }

    #[test]
    fn test_floored_division_signs() {
        assert_eq!(eval_num("-5//2"), int(-3));
        assert_eq!(eval_num("-5%2"), int(1));
        assert_eq!(eval_num("7%-3"), int(-2));
        assert_eq!(eval_num("-7//-3"), int(2));
        assert_eq!(eval_num("7.5%-2"), rat(-1, 2));
    }

    #[test]
    fn test_power() {
        assert_eq!(eval_num("2**-2"), rat(1, 4));
        assert_eq!(eval_num("-2**2"), int(-4));
        assert_eq!(eval_num("(-2)**2"), int(4));
        assert_eq!(eval_num("2**3**2"), int(512));
        assert_eq!(eval_num("0**0"), int(1));
        assert_eq!(kind_of("0**-1"), ErrorKind::Arithmetic);
        assert_eq!(kind_of("2**0.5"), ErrorKind::Arithmetic);
        assert_eq!(kind_of("2**9999999"), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_shifts() {
        assert_eq!(eval_num("6<<2"), int(24));
        assert_eq!(eval_num("24>>2"), int(6));
        assert_eq!(eval_num("-5>>1"), int(-3));
        assert_eq!(kind_of("1<<-1"), ErrorKind::Arithmetic);
        assert_eq!(kind_of("1<<999999"), ErrorKind::Arithmetic);
        assert_eq!(kind_of("1.5<<1"), ErrorKind::Type);
        assert_eq!(kind_of("1<<(4/4)"), ErrorKind::Type);
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(eval_num("5&3"), int(1));
        assert_eq!(eval_num("5|3"), int(7));
        assert_eq!(eval_num("5^3"), int(6));
        assert_eq!(eval_num("~5"), int(-6));
        assert_eq!(eval_num("~-3"), int(2));
        assert_eq!(kind_of("1.5&2"), ErrorKind::Type);
        assert_eq!(kind_of("(4/2)&1"), ErrorKind::Type);
        assert_eq!(kind_of("~1.5"), ErrorKind::Type);
    }

    #[test]
    fn test_not_and_truthiness() {
        assert_eq!(eval_num("not 0"), int(1));
        assert_eq!(eval_num("not 5"), int(0));
        assert_eq!(eval_num("not 0.0"), int(1));
        assert_eq!(eval_num("not not 3"), int(1));
        assert_eq!(eval_num("not 1 + 2"), int(0));
    }

    #[test]
    fn test_decimal_literals() {
        assert_eq!(eval_num("1.5*2"), int(3));
        assert_eq!(eval_num(".5+.5"), int(1));
        assert_eq!(eval_num("2.5e-1"), rat(1, 4));
        assert_eq!(eval_num("0x10 + 0b1 + 0o10"), int(25));
    }

    #[test]
    fn test_restricted_operator_set() {
        let basic: OpSet = [BinaryOp::Add, BinaryOp::Sub].into_iter().collect();
        assert_eq!(parse_and_evaluate("1+2-3", Some(&basic)).unwrap(), int(0));

        let err = parse_and_evaluate("2*3", Some(&basic)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        assert!(err.to_string().contains('*'), "message was {err}");

        // Unary minus is its own operator; an allow-list without it
        // rejects negative literals.
        let err = parse_and_evaluate("-1", Some(&basic)).unwrap_err();
        assert_eq!(
            err,
            EvalError::OperatorNotAllowed {
                op: Op::Unary(UnaryOp::Neg)
            }
        );
    }

    #[test]
    fn test_operator_check_precedes_operand_evaluation() {
        let no_mul: OpSet = [BinaryOp::Add, BinaryOp::Div].into_iter().collect();
        let err = parse_and_evaluate("(1/0)*2", Some(&no_mul)).unwrap_err();
        assert_eq!(
            err,
            EvalError::OperatorNotAllowed {
                op: Op::Binary(BinaryOp::Mul)
            }
        );
    }

    #[test]
    fn test_injection_shapes_are_type_errors() {
        for input in [
            "__import__('os').system('ls')",
            "abs(1)",
            "x",
            "math.pi",
            "[1,2]",
            "(1,2)",
            "()",
            "1, 2",
            "(1).bit_length()",
        ] {
            assert_eq!(kind_of(input), ErrorKind::Type, "input {input:?}");
        }
    }

    #[test]
    fn test_non_numeric_literals_are_type_errors() {
        for input in ["'abc'", "\"x\"", "True", "None", "True + 1", "1 + 'a'"] {
            let err = eval(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "input {input:?}");
        }
    }

    #[test]
    fn test_syntax_errors() {
        for input in ["", "   ", "2 +", "(((1", "1 < 2", "2**", "4_3", "1 = 2", "'a' 'b'"] {
            assert_eq!(kind_of(input), ErrorKind::Syntax, "input {input:?}");
        }
    }

    #[test]
    fn test_arithmetic_errors() {
        for input in ["1/0", "1//0", "1%0", "4/(2-2)"] {
            let err = eval(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Arithmetic, "input {input:?}");
            assert_eq!(err, EvalError::Numeric(tessera_num::NumError::DivisionByZero));
        }
    }

    #[test]
    fn test_evaluator_is_reusable() {
        let evaluator = MathEvaluator::new();
        assert_eq!(evaluator.evaluate("6*4").unwrap(), int(24));
        assert_eq!(evaluator.evaluate("6*4").unwrap(), int(24));
        assert!(evaluator.evaluate("6*").is_err());
        // A failed evaluation leaves the evaluator intact.
        assert_eq!(evaluator.evaluate("6*4").unwrap(), int(24));
    }

    #[test]
    fn test_large_exact_results() {
        let value = eval_num("10**30 + 1");
        assert_eq!(value.to_string(), "1000000000000000000000000000001");
    }
}
