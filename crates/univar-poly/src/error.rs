//! Errors reported by polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor of a division or remainder is the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,
}
