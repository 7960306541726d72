//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use univar_rings::{FiniteField, Q};

    type F101 = FiniteField<101>;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree up to 4, zero included)
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn small_fp_poly() -> impl Strategy<Value = Polynomial<F101>> {
        proptest::collection::vec((0u64..101u64).prop_map(F101::new), 0..=6)
            .prop_map(Polynomial::new)
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn poly_add_then_sub(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_assign_ops_match_binary(a in small_poly(), b in small_poly()) {
            let mut sum = a.clone();
            sum += &b;
            prop_assert_eq!(sum, &a + &b);

            let mut diff = a.clone();
            diff -= &b;
            prop_assert_eq!(diff, &a - &b);

            let mut prod = a.clone();
            prod *= &b;
            prop_assert_eq!(prod, &a * &b);
        }

        // Canonical form

        #[test]
        fn poly_trailing_zeros_ignored(coeffs in proptest::collection::vec(small_coeff(), 0..=5), pad in 0usize..4) {
            let mut padded = coeffs.clone();
            padded.extend(std::iter::repeat(Q::from_integer(0)).take(pad));
            let a = Polynomial::new(coeffs);
            let b = Polynomial::new(padded);
            prop_assert_eq!(a.to_string(), b.to_string());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn poly_leading_coeff_nonzero(a in small_poly(), b in small_poly()) {
            for p in [&a + &b, &a - &b, &a * &b] {
                if let Some(lead) = p.leading_coeff() {
                    prop_assert_ne!(lead, &Q::from_integer(0));
                }
            }
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        // Division

        #[test]
        fn poly_division_identity(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(&(&q * &b) + &r, a);
            prop_assert!(r.degree() < b.degree());
        }

        #[test]
        fn poly_division_identity_fp(a in small_fp_poly(), b in small_fp_poly()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(&(&(&a / &b) * &b) + &(&a % &b), a);
        }

        // GCD

        #[test]
        fn poly_gcd_divides_both(a in nonzero_poly(), b in nonzero_poly(), c in nonzero_poly()) {
            let x = &a * &c;
            let y = &b * &c;
            let g = x.gcd(&y);
            prop_assert!((&x % &g).is_zero());
            prop_assert!((&y % &g).is_zero());
            prop_assert!(g.degree() >= c.degree());
        }

        #[test]
        fn poly_extended_gcd_bezout(a in small_fp_poly(), b in small_fp_poly()) {
            let (g, s, t) = a.extended_gcd(&b);
            prop_assert_eq!(&(&s * &a) + &(&t * &b), g.clone());
            prop_assert_eq!(g, a.gcd(&b));
        }

        // Evaluation and composition

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!((&a + &b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!((&a * &b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_compose_eval(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            let x = Q::from_integer(x);
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }
    }
}
