// src/backends/rational.rs

use num::{BigInt, BigRational, One, Zero};
use crate::core::coefficient::Coefficient;

/// BigRational coefficient backend
///
/// The rationals form a field, so every non-zero coefficient is a unit and
/// polynomial division never fails on a non-zero divisor.
impl Coefficient for BigRational {
    fn zero() -> Self {
        <BigRational as Zero>::zero()
    }

    fn one() -> Self {
        <BigRational as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn from_u64(n: u64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }

    /// Accepts integers, fractions such as `-3/4`, and decimals such as `2.5`.
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        match text.split_once('.') {
            Some((whole, fraction)) => parse_decimal(whole, fraction),
            None => text.parse().ok(),
        }
    }

    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if Zero::is_zero(divisor) {
            return None;
        }
        Some((self / divisor, <BigRational as Zero>::zero()))
    }

    fn backend_name() -> &'static str {
        "rational"
    }
}

fn parse_decimal(whole: &str, fraction: &str) -> Option<BigRational> {
    if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let numerator: BigInt = format!("{}{}", whole, fraction).parse().ok()?;
    let denominator = num::pow(BigInt::from(10), fraction.len());
    Some(BigRational::new(numerator, denominator))
}
