// src/polynomial/ops.rs

use std::ops::{Add, Mul, Neg, Sub};

use crate::core::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

impl<C: Coefficient> Add for Polynomial<C> {
    type Output = Polynomial<C>;

    fn add(self, other: Polynomial<C>) -> Polynomial<C> {
        self.add_poly(&other)
    }
}

impl<'a, C: Coefficient> Add<&'a Polynomial<C>> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn add(self, other: &'a Polynomial<C>) -> Polynomial<C> {
        self.add_poly(other)
    }
}

impl<C: Coefficient> Sub for Polynomial<C> {
    type Output = Polynomial<C>;

    fn sub(self, other: Polynomial<C>) -> Polynomial<C> {
        self.subtract_poly(&other)
    }
}

impl<'a, C: Coefficient> Sub<&'a Polynomial<C>> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn sub(self, other: &'a Polynomial<C>) -> Polynomial<C> {
        self.subtract_poly(other)
    }
}

impl<C: Coefficient> Mul for Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, other: Polynomial<C>) -> Polynomial<C> {
        self.multiply_poly(&other)
    }
}

impl<'a, C: Coefficient> Mul<&'a Polynomial<C>> for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, other: &'a Polynomial<C>) -> Polynomial<C> {
        self.multiply_poly(other)
    }
}

impl<C: Coefficient> Neg for Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Polynomial<C> {
        self.negate()
    }
}

impl<'a, C: Coefficient> Neg for &'a Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Polynomial<C> {
        self.negate()
    }
}
