//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use dashu::base::Abs;
    use dashu::integer::IBig;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int())
            .prop_map(|(n, d)| Rational::from_i64(n, d).expect("non-zero denominator"))
    }

    fn gcd(mut a: IBig, mut b: IBig) -> IBig {
        while b != IBig::ZERO {
            let r = &a % &b;
            a = std::mem::replace(&mut b, r);
        }
        a
    }

    proptest! {
        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn mul_by_recip_is_one(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let product = &a * &a.recip().unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn div_matches_mul_by_recip(a in rational(), num in non_zero_int(), den in non_zero_int()) {
            let b = Rational::from_i64(num, den).unwrap();
            prop_assert_eq!(a.checked_div(&b).unwrap(), &a * &b.recip().unwrap());
        }

        // Canonical form

        #[test]
        fn results_are_reduced(a in rational(), b in rational()) {
            let sum = &a + &b;
            prop_assert!(sum.denominator() > &IBig::ZERO);
            if sum.is_zero() {
                prop_assert_eq!(sum.denominator(), &IBig::ONE);
            } else {
                let g = gcd(sum.numerator().clone().abs(), sum.denominator().clone());
                prop_assert_eq!(g, IBig::ONE);
            }
        }

        #[test]
        fn normalization_idempotent(num in small_int(), den in non_zero_int()) {
            let once = Rational::from_i64(num, den).unwrap();
            let twice = Rational::new(once.numerator().clone(), once.denominator().clone()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
