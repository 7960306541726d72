//! # univar-poly
//!
//! Dense univariate polynomials over a generic coefficient type.
//!
//! This crate provides:
//! - `Polynomial<T>`, kept in canonical form (no trailing zero coefficients)
//! - Ring operators, Horner evaluation and composition
//! - Long division with remainder
//! - Euclidean GCD and extended GCD
//! - Textual rendering such as `x^3+2*x^2-x+3`
//!
//! Coefficients are any type implementing `univar_rings::Coefficient`.
//! Division and GCD assume the coefficients form a field; exact rationals
//! (`univar_rings::Q`) and prime fields (`univar_rings::FiniteField`) do.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod display;
pub mod error;
mod ops;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use display::DisplayVar;
pub use error::PolyError;
