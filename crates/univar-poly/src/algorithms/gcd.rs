//! Polynomial GCD algorithms.
//!
//! This module provides the Euclidean algorithm for the greatest common
//! divisor of two polynomials, and its extended form.
//!
//! Both assume exact field arithmetic. Over machine integers the
//! coefficient division truncates and the result is not a true GCD.

use log::{debug, trace};
use univar_rings::Coefficient;

use crate::algorithms::division::divide_by_lead;
use crate::dense::Polynomial;

/// Computes the GCD of two polynomials using the Euclidean algorithm.
///
/// The pair `(first, second)` is replaced by `(second, first mod second)`
/// until `second` is constant. A non-zero constant means the inputs are
/// coprime and the GCD is `1`; otherwise the last non-zero remainder is
/// returned monic. `gcd(0, 0)` is `0`.
pub fn poly_gcd<T: Coefficient>(a: &Polynomial<T>, b: &Polynomial<T>) -> Polynomial<T> {
    let (mut first, mut second) = if a.degree() < b.degree() {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };

    while let Some(lead) = second.leading_coeff().filter(|_| second.degree() > 0).cloned() {
        let (_, r) = divide_by_lead(&first, &second, &lead);
        trace!("euclidean step: degrees ({}, {})", second.degree(), r.degree());
        first = std::mem::replace(&mut second, r);
    }

    if !second.is_zero() {
        debug!("gcd: inputs are coprime");
        return Polynomial::one();
    }

    let g = make_monic(&first);
    debug!("gcd: degree {}", g.degree());
    g
}

/// Makes a polynomial monic (leading coefficient = 1).
pub fn make_monic<T: Coefficient>(p: &Polynomial<T>) -> Polynomial<T> {
    match p.leading_coeff() {
        None => p.clone(),
        Some(lead) => p.iter().map(|c| c.clone() / lead.clone()).collect(),
    }
}

/// Extended polynomial GCD.
///
/// Computes (gcd, s, t) such that gcd = s*a + t*b, with gcd monic.
///
/// # Example
///
/// ```ignore
/// use univar_poly::Polynomial;
/// use univar_poly::algorithms::gcd::poly_extended_gcd;
/// use univar_rings::Q;
///
/// let a = Polynomial::new(vec![Q::from(-1), Q::from(0), Q::from(1)]); // x² - 1
/// let b = Polynomial::new(vec![Q::from(-1), Q::from(1)]); // x - 1
///
/// let (gcd, s, t) = poly_extended_gcd(&a, &b);
/// // gcd = x - 1
/// // s*a + t*b = gcd
/// ```
pub fn poly_extended_gcd<T: Coefficient>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> (Polynomial<T>, Polynomial<T>, Polynomial<T>) {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = Polynomial::one();
    let mut s = Polynomial::zero();
    let mut old_t = Polynomial::zero();
    let mut t = Polynomial::one();

    while let Some(lead) = r.leading_coeff().cloned() {
        let (q, rem) = divide_by_lead(&old_r, &r, &lead);

        let new_s = &old_s - &(&q * &s);
        let new_t = &old_t - &(&q * &t);

        old_r = std::mem::replace(&mut r, rem);
        old_s = std::mem::replace(&mut s, new_s);
        old_t = std::mem::replace(&mut t, new_t);
    }

    let Some(lead) = old_r.leading_coeff() else {
        return (Polynomial::zero(), Polynomial::one(), Polynomial::zero());
    };
    let lead_inv = T::one() / lead.clone();

    (
        old_r.scale(&lead_inv),
        old_s.scale(&lead_inv),
        old_t.scale(&lead_inv),
    )
}
