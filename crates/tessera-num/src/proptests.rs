//! Property-based tests for the numeric tower.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Number, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        // Floored division laws

        #[test]
        fn div_floor_mod_floor_compose(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            let r = a.mod_floor(&b);
            // a == b*q + r
            prop_assert_eq!(b.clone() * q + r.clone(), a);
            // r is zero or matches the divisor's sign, with |r| < |b|
            prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            let rem_a = a % g.clone();
            let rem_b = b % g;
            prop_assert!(rem_a.is_zero());
            prop_assert!(rem_b.is_zero());
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            use num_traits::One;
            let a = Rational::from_i64(num, den);
            let inv = a.recip();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_stays_reduced(num in small_int(), den in non_zero_int()) {
            use num_traits::One;
            let r = Rational::from_i64(num, den);
            if !r.is_zero() {
                let g = r.numerator().gcd(&r.denominator());
                prop_assert!(g.is_one());
            }
            prop_assert!(r.denominator().is_positive());
        }

        // Number semantics

        #[test]
        fn number_true_div_round_trips(a in small_int(), b in non_zero_int()) {
            let quotient = Number::from(a).true_div(&Number::from(b)).unwrap();
            let back = &quotient * &Number::from(b);
            prop_assert_eq!(back, Number::from(a));
        }

        #[test]
        fn number_floor_div_matches_integer(a in small_int(), b in non_zero_int()) {
            let n = Number::from(a).floor_div(&Number::from(b)).unwrap();
            let i = Integer::new(a).div_floor(&Integer::new(b));
            prop_assert_eq!(n, Number::from(i));
        }

        #[test]
        fn number_negative_pow_is_reciprocal(a in non_zero_int(), e in 1i64..8i64) {
            let powed = Number::from(a).pow(&Number::from(-e)).unwrap();
            let direct = Number::from(a).pow(&Number::from(e)).unwrap();
            let product = &powed * &direct;
            prop_assert_eq!(product, Number::from(1));
        }

        #[test]
        fn number_shift_left_is_power_of_two_multiple(a in small_int(), n in 0i64..32i64) {
            let shifted = Number::from(a).shift_left(&Number::from(n)).unwrap();
            let factor = Number::from(2).pow(&Number::from(n)).unwrap();
            prop_assert_eq!(shifted, &Number::from(a) * &factor);
        }

        #[test]
        fn number_invert_law(a in small_int()) {
            // ~a == -a - 1
            let inverted = Number::from(a).invert().unwrap();
            prop_assert_eq!(inverted, Number::from(-a - 1));
        }
    }
}
