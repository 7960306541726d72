//! # univar
//!
//! Univariate polynomial arithmetic over a generic coefficient type.
//!
//! ## Features
//!
//! - **Canonical form**: no trailing zero coefficients, zero is `deg = -1`
//! - **Ring operators**: `+`, `-`, `*`, `/`, `%` and their assigning forms
//! - **Euclidean GCD**: monic result, `1` for coprime inputs
//! - **Exact coefficients**: rationals `Q` and prime fields `Z_p`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use univar::prelude::*;
//!
//! let p: Polynomial<Q> = [-1, 0, 1].into_iter().map(Q::from_integer).collect(); // x^2 - 1
//! let q: Polynomial<Q> = [-1, 1].into_iter().map(Q::from_integer).collect(); // x - 1
//!
//! assert_eq!(p.gcd(&q), q);
//! assert_eq!(p.to_string(), "x^2-1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use univar_poly as poly;
pub use univar_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use univar_poly::{PolyError, Polynomial};
    pub use univar_rings::{Coefficient, FiniteField, Q};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn q(coeffs: &[i64]) -> Polynomial<Q> {
        coeffs.iter().copied().map(Q::from).collect()
    }

    #[test]
    fn test_prelude_round_trip() {
        let p = q(&[-1, 0, 1]);
        let r = q(&[-1, 1]);

        assert_eq!(p.gcd(&r), r);
        assert_eq!(p.to_string(), "x^2-1");
        assert_eq!(&p / &r, q(&[1, 1]));
        assert_eq!(p.checked_div(&Polynomial::zero()), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn test_evaluation_example() {
        // x^2 - x + 3 at x = 2
        assert_eq!(q(&[3, -1, 1]).eval(&Q::from(2i64)), Q::from(5i64));
    }
}
