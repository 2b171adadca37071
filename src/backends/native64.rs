// src/backends/native64.rs

use crate::core::coefficient::Coefficient;

/// Native i64 coefficient backend
///
/// Fastest backend for small polynomials. Arithmetic is not overflow-checked
/// beyond division, so very high powers or large evaluation points belong on
/// the BigInt backend. The only units are 1 and -1.
impl Coefficient for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }

    fn from_u64(n: u64) -> Self {
        i64::try_from(n).unwrap_or(i64::MAX)
    }

    fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let quotient = self.checked_div(*divisor)?;
        let remainder = self.checked_rem(*divisor)?;
        Some((quotient, remainder))
    }

    fn backend_name() -> &'static str {
        "i64"
    }
}
