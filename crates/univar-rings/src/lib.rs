//! # univar-rings
//!
//! Coefficient structures for univariate polynomials.
//!
//! This crate provides:
//! - The `Coefficient` capability trait required by `Polynomial<T>`
//! - Exact rationals `Q` backed by `dashu`
//! - Prime fields `FiniteField<P>`
//!
//! Machine numbers (`f64`, `i64`, ...) are coefficients as well through a
//! blanket implementation; their arithmetic is used as given.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::FiniteField;
pub use rationals::Q;
pub use traits::Coefficient;
