//! Polynomial algorithms.
//!
//! This module contains:
//! - Long division with quotient and remainder
//! - Euclidean GCD and extended GCD

pub mod division;
pub mod gcd;
