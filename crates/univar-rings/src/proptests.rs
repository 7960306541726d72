//! Property-based tests for the coefficient types.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{FiniteField, Q};

    type F101 = FiniteField<101>;

    fn small_q() -> impl Strategy<Value = Q> {
        (-100i64..100i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn non_zero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("must be non-zero", |q| !q.is_zero())
    }

    fn small_fp() -> impl Strategy<Value = F101> {
        (0u64..101u64).prop_map(F101::new)
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn q_division_inverts_multiplication(a in small_q(), b in non_zero_q()) {
            prop_assert_eq!((a.clone() * b.clone()) / b, a);
        }

        #[test]
        fn q_additive_inverse(a in small_q()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn fp_inverse(a in small_fp()) {
            if let Some(inv) = a.inv() {
                prop_assert!((a * inv).is_one());
            } else {
                prop_assert!(a.is_zero());
            }
        }

        #[test]
        fn fp_sub_then_add(a in small_fp(), b in small_fp()) {
            prop_assert_eq!((a - b) + b, a);
        }

        #[test]
        fn fp_from_signed_matches_neg(v in 0i64..1000i64) {
            prop_assert_eq!(F101::from_signed(-v), -F101::from_signed(v));
        }
    }
}
