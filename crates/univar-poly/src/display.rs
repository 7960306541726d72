//! Textual rendering of polynomials.
//!
//! Terms are printed highest degree first, e.g. `x^3+2*x^2-x+3`. A unit
//! coefficient is omitted in front of the variable, `-1` prints as a bare
//! `-`, and the zero polynomial prints as `0`.

use std::fmt;

use univar_rings::Coefficient;

use crate::dense::Polynomial;

/// Renders a polynomial with a custom variable name.
///
/// Created by [`Polynomial::display_var`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayVar<'a, T: Coefficient> {
    poly: &'a Polynomial<T>,
    var: &'a str,
}

impl<T: Coefficient> Polynomial<T> {
    /// Returns an adapter that prints this polynomial using `var` as the variable.
    #[must_use]
    pub fn display_var<'a>(&'a self, var: &'a str) -> DisplayVar<'a, T> {
        DisplayVar { poly: self, var }
    }
}

fn write_power(f: &mut fmt::Formatter<'_>, var: &str, degree: usize) -> fmt::Result {
    match degree {
        0 => Ok(()),
        1 => write!(f, "{var}"),
        _ => write!(f, "{var}^{degree}"),
    }
}

fn write_terms<T>(poly: &Polynomial<T>, var: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Coefficient + fmt::Display,
{
    let coeffs = poly.coeffs();
    if coeffs.is_empty() {
        return write!(f, "0");
    }

    let top = coeffs.len() - 1;
    for (i, c) in coeffs.iter().enumerate().rev() {
        if c.is_zero() {
            continue;
        }

        if i == 0 {
            if i != top && *c > T::zero() {
                write!(f, "+")?;
            }
            write!(f, "{c}")?;
        } else if c.is_one() {
            if i != top {
                write!(f, "+")?;
            }
            write_power(f, var, i)?;
        } else if c.is_neg_one() {
            write!(f, "-")?;
            write_power(f, var, i)?;
        } else {
            if i != top && *c > T::zero() {
                write!(f, "+")?;
            }
            write!(f, "{c}*")?;
            write_power(f, var, i)?;
        }
    }

    Ok(())
}

impl<T: Coefficient + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(self, "x", f)
    }
}

impl<T: Coefficient + fmt::Display> fmt::Display for DisplayVar<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(self.poly, self.var, f)
    }
}
