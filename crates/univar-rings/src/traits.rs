//! Coefficient capability trait.
//!
//! This module defines the single bound every polynomial coefficient has
//! to satisfy. The polynomial code never inspects the concrete type beyond
//! what this trait exposes.

use std::ops::{Div, Neg, Sub};

use num_traits::{One, Zero};

/// The operations a polynomial coefficient must supply.
///
/// `Zero` brings the additive identity and `+`, `One` brings the
/// multiplicative identity and `*`. Ordering is only consulted when
/// choosing the sign of a printed term. `Neg` is required only to recognise
/// `-1` when printing, which rules out unsigned machine integers.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - For a field, `a / b` is exact whenever `b` is non-zero
///
/// Types that are not fields (machine integers) satisfy the bound too, but
/// their division truncates, so polynomial division and GCD over them are
/// not exact.
pub trait Coefficient:
    Clone
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns `-1`.
    #[must_use]
    fn neg_one() -> Self {
        -Self::one()
    }

    /// Returns true if this is `-1`.
    fn is_neg_one(&self) -> bool {
        *self == Self::neg_one()
    }

    /// Computes self + self + ... (n times).
    #[must_use]
    fn mul_by_count(&self, n: usize) -> Self {
        let mut result = Self::zero();
        for _ in 0..n {
            result = result + self.clone();
        }
        result
    }
}

impl<T> Coefficient for T where
    T: Clone
        + PartialEq
        + PartialOrd
        + Zero
        + One
        + Sub<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}
