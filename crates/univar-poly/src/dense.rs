//! Dense univariate polynomials.
//!
//! Coefficients are stored low to high degree and kept in canonical form:
//! the last stored coefficient is never zero, so the zero polynomial is
//! the empty sequence.

use univar_rings::Coefficient;

use crate::algorithms::{division, gcd};
use crate::error::PolyError;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order. Every constructor and
/// every mutating operation strips trailing zeros.
#[derive(Clone, Debug)]
pub struct Polynomial<T: Coefficient> {
    /// Coefficients in ascending degree order, without trailing zeros.
    coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a new polynomial from coefficients, lowest degree first.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Creates a constant polynomial. A zero constant gives the zero polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Strips trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(T::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Returns the degree, or -1 for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if the degree is at most 0 (this includes zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i, zero when `i` exceeds the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Iterates over the coefficients, lowest degree first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| c.clone() + acc * x.clone())
    }

    /// Applies `op` coefficient-wise over the longer of the two lengths.
    pub(crate) fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| op(self.coeff(i), other.coeff(i))).collect())
    }

    /// In-place form of [`Self::zip_with`].
    pub(crate) fn zip_with_assign(&mut self, other: &Self, op: impl Fn(T, T) -> T) {
        let len = self.coeffs.len().max(other.coeffs.len());
        self.coeffs.resize(len, T::zero());
        for (i, c) in self.coeffs.iter_mut().enumerate() {
            let lhs = std::mem::replace(c, T::zero());
            *c = op(lhs, other.coeff(i));
        }
        self.normalize();
    }

    /// Schoolbook multiplication: O(n·m).
    pub(crate) fn mul_schoolbook(&self, other: &Self) -> Self {
        let mut result = vec![T::zero(); self.coeffs.len() + other.coeffs.len()];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                let acc = std::mem::replace(&mut result[i + j], T::zero());
                result[i + j] = acc + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the composition `self(other(x))`.
    ///
    /// Each power of `other` is built by repeated multiplication, and zero
    /// coefficients are skipped.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut composition = Self::zero();

        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let mut term = Self::constant(c.clone());
            for _ in 0..i {
                term *= other;
            }
            composition += &term;
        }

        composition
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_schoolbook(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_schoolbook(&base);
            }
        }

        result
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.mul_by_count(i))
                .collect(),
        )
    }

    /// Divides by `other`, returning `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is the zero polynomial.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        match division::poly_div_rem(self, other) {
            Ok(qr) => qr,
            Err(e) => panic!("{e}"),
        }
    }

    /// Divides by `other`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` is the zero polynomial.
    pub fn checked_div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError> {
        division::poly_div_rem(self, other)
    }

    /// Returns the quotient of long division by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` is the zero polynomial.
    pub fn checked_div(&self, other: &Self) -> Result<Self, PolyError> {
        division::poly_div(self, other)
    }

    /// Returns `self - (self / other) * other`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` is the zero polynomial.
    pub fn checked_rem(&self, other: &Self) -> Result<Self, PolyError> {
        division::poly_div_rem(self, other).map(|(_, r)| r)
    }

    /// Computes the greatest common divisor with the Euclidean algorithm.
    ///
    /// Coprime inputs give the constant 1; otherwise the result is monic.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        gcd::poly_gcd(self, other)
    }

    /// Extended GCD: returns `(g, s, t)` with `s*self + t*other = g`, `g` monic.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        gcd::poly_extended_gcd(self, other)
    }

    /// Divides every coefficient by the leading one. Zero stays zero.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        gcd::make_monic(self)
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Coefficient> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.degree() == other.degree()
            && self.coeffs.iter().rev().zip(other.coeffs.iter().rev()).all(|(a, b)| a == b)
    }
}

impl<T: Coefficient + Eq> Eq for Polynomial<T> {}

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Coefficient> From<&[T]> for Polynomial<T> {
    fn from(coeffs: &[T]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl<T: Coefficient> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Coefficient> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}
