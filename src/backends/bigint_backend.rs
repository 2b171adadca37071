// src/backends/bigint_backend.rs

use num::{BigInt, Integer, One, Zero};
use crate::core::coefficient::Coefficient;

/// BigInt coefficient backend (arbitrary precision)
///
/// Default backend. Coefficients never overflow, at the cost of heap
/// allocation per value. Division is truncating, so a step is exact only when
/// the remainder is zero; the only units are 1 and -1.
impl Coefficient for BigInt {
    fn zero() -> Self {
        <BigInt as Zero>::zero()
    }

    fn one() -> Self {
        <BigInt as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn from_u64(n: u64) -> Self {
        BigInt::from(n)
    }

    fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if Zero::is_zero(divisor) {
            return None;
        }
        Some(Integer::div_rem(self, divisor))
    }

    fn backend_name() -> &'static str {
        "bigint"
    }
}
