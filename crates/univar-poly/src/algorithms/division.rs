//! Polynomial long division.
//!
//! The quotient comes from classical long division. The remainder returned
//! by [`poly_div_rem`] is derived as `a - q*b`, so it is consistent with the
//! quotient for any coefficient type.

use log::trace;
use univar_rings::Coefficient;

use crate::dense::Polynomial;
use crate::error::PolyError;

/// Runs long division of `a` by `b`, returning the quotient and the leftover.
///
/// Each step removes the current leading term of the running remainder, so
/// the loop finishes after at most `deg(a) - deg(b) + 1` steps even when the
/// coefficient division is inexact.
fn long_division<T: Coefficient>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>), PolyError> {
    let lead = b.leading_coeff().ok_or(PolyError::DivisionByZero)?;
    Ok(divide_by_lead(a, b, lead))
}

/// Long division of `a` by a non-zero `b` whose leading coefficient is `lead`.
pub(crate) fn divide_by_lead<T: Coefficient>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
    lead: &T,
) -> (Polynomial<T>, Polynomial<T>) {
    let divisor = b.coeffs();
    let divisor_degree = divisor.len() - 1;
    let mut remainder = a.coeffs().to_vec();
    let mut quotient = vec![T::zero(); remainder.len()];

    while remainder.len() > divisor_degree {
        let top = remainder.len() - 1;
        let shift = top - divisor_degree;
        let t = remainder[top].clone() / lead.clone();

        // The leading term cancels against t * lead
        remainder.pop();
        for (i, c) in divisor[..divisor_degree].iter().enumerate() {
            let r = std::mem::replace(&mut remainder[shift + i], T::zero());
            remainder[shift + i] = r - t.clone() * c.clone();
        }
        while remainder.last().is_some_and(T::is_zero) {
            remainder.pop();
        }

        trace!(
            "long division step: quotient term at degree {shift}, remainder length {}",
            remainder.len()
        );

        let q = std::mem::replace(&mut quotient[shift], T::zero());
        quotient[shift] = q + t;
    }

    (Polynomial::new(quotient), Polynomial::new(remainder))
}

/// Divides `a` by `b`, returning the quotient.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn poly_div<T: Coefficient>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<Polynomial<T>, PolyError> {
    long_division(a, b).map(|(q, _)| q)
}

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// The remainder is `a - quotient * b`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn poly_div_rem<T: Coefficient>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>), PolyError> {
    let q = poly_div(a, b)?;
    let r = a - &(&q * b);
    Ok((q, r))
}

/// Returns what is left of `a` after long division by `b`.
///
/// Over a field this equals the remainder of [`poly_div_rem`]; its degree
/// is always below `deg(b)`, which is what the Euclidean algorithm relies on.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn poly_reduce<T: Coefficient>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
) -> Result<Polynomial<T>, PolyError> {
    long_division(a, b).map(|(_, r)| r)
}
