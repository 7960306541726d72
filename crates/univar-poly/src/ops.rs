//! Operator overloads for [`Polynomial`].
//!
//! Binary operators are implemented on references; the owned forms
//! forward to them.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use univar_rings::Coefficient;

use crate::algorithms::division::{poly_div, poly_div_rem};
use crate::dense::Polynomial;

impl<T: Coefficient> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Coefficient> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Coefficient> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_schoolbook(rhs)
    }
}

/// Long division quotient.
///
/// # Panics
///
/// Panics if `rhs` is the zero polynomial; use
/// [`Polynomial::checked_div`] to get an error instead.
impl<T: Coefficient> Div for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn div(self, rhs: Self) -> Self::Output {
        match poly_div(self, rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Remainder `self - (self / rhs) * rhs`.
///
/// # Panics
///
/// Panics if `rhs` is the zero polynomial; use
/// [`Polynomial::checked_rem`] to get an error instead.
impl<T: Coefficient> Rem for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn rem(self, rhs: Self) -> Self::Output {
        match poly_div_rem(self, rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        self.iter().map(|c| -c.clone()).collect()
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! forward_binop {
    ($($imp:ident, $method:ident;)*) => {
        $(
            impl<T: Coefficient> $imp for Polynomial<T> {
                type Output = Polynomial<T>;

                fn $method(self, rhs: Self) -> Self::Output {
                    (&self).$method(&rhs)
                }
            }

            impl<T: Coefficient> $imp<&Polynomial<T>> for Polynomial<T> {
                type Output = Polynomial<T>;

                fn $method(self, rhs: &Polynomial<T>) -> Self::Output {
                    (&self).$method(rhs)
                }
            }
        )*
    };
}

forward_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
    Rem, rem;
}

impl<T: Coefficient> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        self.zip_with_assign(rhs, |a, b| a + b);
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<T: Coefficient> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        self.zip_with_assign(rhs, |a, b| a - b);
    }
}

impl<T: Coefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<T: Coefficient> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        *self = self.mul_schoolbook(rhs);
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}
