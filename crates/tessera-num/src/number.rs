//! Runtime numeric values.
//!
//! [`Number`] is what expression evaluation produces: an exact integer
//! or an exact rational. The split mirrors the distinction between a
//! whole-number literal and a division result. True division always
//! yields the rational variant, so `4 / 2` is `Rational(2)` rather
//! than `Int(2)`, and integer-only operations on it fail the same way
//! they would on any non-integer.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

use crate::{Integer, Rational};

/// Largest exponent magnitude accepted by [`Number::pow`].
pub const MAX_EXPONENT: u32 = 1 << 20;

/// Largest shift count accepted by [`Number::shift_left`] and
/// [`Number::shift_right`], in bits.
pub const MAX_SHIFT: u32 = 1 << 16;

/// An error from a numeric operation.
///
/// [`NumError::IntegerRequired`] reports an operand of the wrong
/// numeric kind; every other variant reports a value the operation
/// cannot produce a result for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumError {
    /// Division or modulo by zero, or a negative power of zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A bitwise or shift operation received a rational operand.
    #[error("`{op}` requires whole-number operands")]
    IntegerRequired {
        /// Symbol of the offending operation.
        op: &'static str,
    },
    /// An exponent with a fractional part.
    #[error("exponent is not a whole number")]
    NonIntegerExponent,
    /// An exponent too large to evaluate exactly.
    #[error("exponent magnitude exceeds {}", MAX_EXPONENT)]
    ExponentTooLarge,
    /// A shift by a negative count.
    #[error("negative shift count")]
    NegativeShift,
    /// A shift by more than [`MAX_SHIFT`] bits.
    #[error("shift count exceeds {} bits", MAX_SHIFT)]
    ShiftTooLarge,
    /// A bitwise operand outside the supported 128-bit range.
    #[error("operand exceeds the 128-bit range of bitwise operations")]
    BitwiseOverflow,
}

/// An exact numeric value: a whole number or a fraction.
#[derive(Clone, Debug)]
pub enum Number {
    /// A whole number.
    Int(Integer),
    /// A fraction in lowest terms. May be integer-valued: `4 / 2`
    /// stays in this variant.
    Rational(Rational),
}

impl Number {
    /// Returns the integer inside the [`Number::Int`] variant.
    ///
    /// Integer-valued rationals return `None`; the variant records how
    /// the value was produced, not just its magnitude.
    #[must_use]
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Int(n) => Some(n),
            Self::Rational(_) => None,
        }
    }

    /// Returns this value as a rational, promoting integers.
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        match self {
            Self::Int(n) => Rational::from_integer(n.clone()),
            Self::Rational(r) => r.clone(),
        }
    }

    /// Returns true if the value is zero, in either variant.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Rational(r) => r.is_zero(),
        }
    }

    /// True division. The result is always rational, even when it is
    /// integer-valued.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `rhs` is zero.
    pub fn true_div(&self, rhs: &Self) -> Result<Self, NumError> {
        if rhs.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self::Rational(self.to_rational() / rhs.to_rational()))
    }

    /// Floored division. Two integers give an integer; any rational
    /// operand gives an integer-valued rational.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `rhs` is zero.
    pub fn floor_div(&self, rhs: &Self) -> Result<Self, NumError> {
        if rhs.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a.div_floor(b))),
            _ => {
                let q = (self.to_rational() / rhs.to_rational()).floor();
                Ok(Self::Rational(Rational::from_integer(q)))
            }
        }
    }

    /// Floored remainder. The result is zero or has the sign of `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `rhs` is zero.
    pub fn floor_mod(&self, rhs: &Self) -> Result<Self, NumError> {
        if rhs.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a.mod_floor(b))),
            _ => {
                let a = self.to_rational();
                let b = rhs.to_rational();
                let q = Rational::from_integer((&a / &b).floor());
                Ok(Self::Rational(a - b * q))
            }
        }
    }

    /// Exponentiation. The exponent must be integer-valued; negative
    /// exponents produce the exact reciprocal.
    ///
    /// # Errors
    ///
    /// - [`NumError::NonIntegerExponent`] for a fractional exponent.
    /// - [`NumError::ExponentTooLarge`] when the exponent magnitude
    ///   exceeds [`MAX_EXPONENT`].
    /// - [`NumError::DivisionByZero`] for a negative power of zero.
    pub fn pow(&self, rhs: &Self) -> Result<Self, NumError> {
        let (exponent, force_rational) = match rhs {
            Self::Int(e) => (e.clone(), false),
            Self::Rational(r) => match r.to_integer() {
                Some(e) => (e, true),
                None => return Err(NumError::NonIntegerExponent),
            },
        };
        let Some(exp) = exponent.to_i64() else {
            return Err(NumError::ExponentTooLarge);
        };
        if exp.unsigned_abs() > u64::from(MAX_EXPONENT) {
            return Err(NumError::ExponentTooLarge);
        }
        let magnitude =
            u32::try_from(exp.unsigned_abs()).map_err(|_| NumError::ExponentTooLarge)?;

        if exp >= 0 {
            match self {
                Self::Int(base) if !force_rational => Ok(Self::Int(base.pow(magnitude))),
                _ => Ok(Self::Rational(self.to_rational().pow(magnitude))),
            }
        } else if self.is_zero() {
            Err(NumError::DivisionByZero)
        } else {
            Ok(Self::Rational(self.to_rational().pow(magnitude).recip()))
        }
    }

    /// Left shift, defined as multiplication by a power of two.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::IntegerRequired`] for rational operands,
    /// [`NumError::NegativeShift`] for a negative count, and
    /// [`NumError::ShiftTooLarge`] past [`MAX_SHIFT`].
    pub fn shift_left(&self, rhs: &Self) -> Result<Self, NumError> {
        let Self::Int(base) = self else {
            return Err(NumError::IntegerRequired { op: "<<" });
        };
        let count = shift_amount(rhs, "<<")?;
        Ok(Self::Int(base * &Integer::new(2).pow(count)))
    }

    /// Right shift, defined as floored division by a power of two, so
    /// `-5 >> 1 == -3`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Number::shift_left`].
    pub fn shift_right(&self, rhs: &Self) -> Result<Self, NumError> {
        let Self::Int(base) = self else {
            return Err(NumError::IntegerRequired { op: ">>" });
        };
        let count = shift_amount(rhs, ">>")?;
        Ok(Self::Int(base.div_floor(&Integer::new(2).pow(count))))
    }

    /// Bitwise conjunction on whole numbers in two's complement.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::IntegerRequired`] for rational operands and
    /// [`NumError::BitwiseOverflow`] for operands outside 128 bits.
    pub fn bit_and(&self, rhs: &Self) -> Result<Self, NumError> {
        let (a, b) = bitwise_operands(self, rhs, "&")?;
        Ok(Self::Int(Integer::from(a & b)))
    }

    /// Bitwise exclusive or. Same operand rules as [`Number::bit_and`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Number::bit_and`].
    pub fn bit_xor(&self, rhs: &Self) -> Result<Self, NumError> {
        let (a, b) = bitwise_operands(self, rhs, "^")?;
        Ok(Self::Int(Integer::from(a ^ b)))
    }

    /// Bitwise disjunction. Same operand rules as [`Number::bit_and`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Number::bit_and`].
    pub fn bit_or(&self, rhs: &Self) -> Result<Self, NumError> {
        let (a, b) = bitwise_operands(self, rhs, "|")?;
        Ok(Self::Int(Integer::from(a | b)))
    }

    /// Bitwise complement: `~x` is `-x - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::IntegerRequired`] for a rational operand.
    pub fn invert(&self) -> Result<Self, NumError> {
        match self {
            Self::Int(n) => Ok(Self::Int(-(n + &Integer::one()))),
            Self::Rational(_) => Err(NumError::IntegerRequired { op: "~" }),
        }
    }

    /// Boolean negation under numeric truthiness: zero is falsy,
    /// everything else is truthy. Returns `1` or `0`.
    #[must_use]
    pub fn logical_not(&self) -> Self {
        if self.is_zero() {
            Self::Int(Integer::one())
        } else {
            Self::Int(Integer::zero())
        }
    }
}

fn shift_amount(rhs: &Number, op: &'static str) -> Result<u32, NumError> {
    let Number::Int(count) = rhs else {
        return Err(NumError::IntegerRequired { op });
    };
    if count.is_negative() {
        return Err(NumError::NegativeShift);
    }
    match count.to_i64() {
        Some(v) if v <= i64::from(MAX_SHIFT) => {
            u32::try_from(v).map_err(|_| NumError::ShiftTooLarge)
        }
        _ => Err(NumError::ShiftTooLarge),
    }
}

fn bitwise_operands(
    lhs: &Number,
    rhs: &Number,
    op: &'static str,
) -> Result<(i128, i128), NumError> {
    let (Number::Int(a), Number::Int(b)) = (lhs, rhs) else {
        return Err(NumError::IntegerRequired { op });
    };
    match (a.to_i128(), b.to_i128()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(NumError::BitwiseOverflow),
    }
}

impl PartialEq for Number {
    /// Numeric equality across variants: `Int(24)` equals
    /// `Rational(24)`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Rational(a), Self::Rational(b)) => a == b,
            _ => self.to_rational() == other.to_rational(),
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Rational(r) => write!(f, "{r}"),
        }
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
            _ => Number::Rational(self.to_rational() + rhs.to_rational()),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a - b),
            _ => Number::Rational(self.to_rational() - rhs.to_rational()),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
            _ => Number::Rational(self.to_rational() * rhs.to_rational()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(n) => Number::Int(-n),
            Number::Rational(r) => Number::Rational(-r),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(Integer::new(value))
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Number {
        Number::from(n)
    }

    fn rat(n: i64, d: i64) -> Number {
        Number::Rational(Rational::from_i64(n, d))
    }

    #[test]
    fn test_promotion() {
        assert_eq!(&int(2) + &int(3), int(5));
        assert!(matches!(&int(2) + &int(3), Number::Int(_)));
        assert!(matches!(&int(2) + &rat(1, 2), Number::Rational(_)));
        assert_eq!(&int(2) + &rat(1, 2), rat(5, 2));
    }

    #[test]
    fn test_true_div_always_rational() {
        let q = int(4).true_div(&int(2)).unwrap();
        assert!(matches!(q, Number::Rational(_)));
        assert_eq!(q, int(2));
        assert_eq!(int(1).true_div(&int(3)).unwrap(), rat(1, 3));
        assert_eq!(int(1).true_div(&int(0)), Err(NumError::DivisionByZero));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(int(-5).floor_div(&int(2)).unwrap(), int(-3));
        assert_eq!(int(7).floor_div(&int(2)).unwrap(), int(3));
        let mixed = rat(7, 1).floor_div(&int(2)).unwrap();
        assert!(matches!(mixed, Number::Rational(_)));
        assert_eq!(mixed, int(3));
        assert_eq!(rat(-7, 2).floor_div(&int(1)).unwrap(), int(-4));
        assert_eq!(int(1).floor_div(&int(0)), Err(NumError::DivisionByZero));
    }

    #[test]
    fn test_floor_mod() {
        assert_eq!(int(7).floor_mod(&int(-3)).unwrap(), int(-2));
        assert_eq!(int(-7).floor_mod(&int(3)).unwrap(), int(2));
        assert_eq!(rat(15, 2).floor_mod(&int(-2)).unwrap(), rat(-1, 2));
        assert_eq!(int(1).floor_mod(&int(0)), Err(NumError::DivisionByZero));
    }

    #[test]
    fn test_pow() {
        assert_eq!(int(2).pow(&int(10)).unwrap(), int(1024));
        assert_eq!(int(0).pow(&int(0)).unwrap(), int(1));
        assert_eq!(int(2).pow(&int(-2)).unwrap(), rat(1, 4));
        assert_eq!(int(0).pow(&int(-1)), Err(NumError::DivisionByZero));
        // Integer-valued rational exponents work but force a rational
        // result, matching the way division results behave elsewhere.
        let forced = int(2).pow(&rat(4, 2)).unwrap();
        assert!(matches!(forced, Number::Rational(_)));
        assert_eq!(forced, int(4));
        assert_eq!(int(2).pow(&rat(1, 2)), Err(NumError::NonIntegerExponent));
        assert_eq!(
            int(2).pow(&int(i64::from(MAX_EXPONENT) + 1)),
            Err(NumError::ExponentTooLarge)
        );
    }

    #[test]
    fn test_shifts() {
        assert_eq!(int(6).shift_left(&int(2)).unwrap(), int(24));
        assert_eq!(int(6).shift_right(&int(1)).unwrap(), int(3));
        assert_eq!(int(-5).shift_right(&int(1)).unwrap(), int(-3));
        assert_eq!(int(1).shift_left(&int(-1)), Err(NumError::NegativeShift));
        assert_eq!(
            int(1).shift_left(&int(i64::from(MAX_SHIFT) + 1)),
            Err(NumError::ShiftTooLarge)
        );
        assert_eq!(
            rat(1, 2).shift_left(&int(1)),
            Err(NumError::IntegerRequired { op: "<<" })
        );
        assert_eq!(
            int(1).shift_left(&rat(1, 2)),
            Err(NumError::IntegerRequired { op: "<<" })
        );
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(int(5).bit_and(&int(3)).unwrap(), int(1));
        assert_eq!(int(5).bit_or(&int(3)).unwrap(), int(7));
        assert_eq!(int(5).bit_xor(&int(3)).unwrap(), int(6));
        assert_eq!(int(-1).bit_and(&int(255)).unwrap(), int(255));
        assert_eq!(
            rat(1, 2).bit_and(&int(1)),
            Err(NumError::IntegerRequired { op: "&" })
        );
        let wide = Number::Int(Integer::new(2).pow(130));
        assert_eq!(wide.bit_and(&int(1)), Err(NumError::BitwiseOverflow));
    }

    #[test]
    fn test_invert() {
        assert_eq!(int(5).invert().unwrap(), int(-6));
        assert_eq!(int(-3).invert().unwrap(), int(2));
        assert_eq!(
            rat(1, 2).invert(),
            Err(NumError::IntegerRequired { op: "~" })
        );
    }

    #[test]
    fn test_logical_not() {
        assert_eq!(int(0).logical_not(), int(1));
        assert_eq!(int(5).logical_not(), int(0));
        assert_eq!(rat(0, 1).logical_not(), int(1));
        assert_eq!(rat(1, 2).logical_not(), int(0));
    }

    #[test]
    fn test_numeric_equality_across_variants() {
        assert_eq!(int(24), rat(24, 1));
        assert_eq!(rat(48, 2), int(24));
        assert_ne!(int(24), rat(49, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(int(42).to_string(), "42");
        assert_eq!(rat(1, 4).to_string(), "1/4");
        assert_eq!(rat(8, 2).to_string(), "4");
        assert_eq!(int(-7).to_string(), "-7");
    }
}
