// src/backends/native128.rs

use crate::core::coefficient::Coefficient;

/// Native i128 coefficient backend
///
/// Same semantics as the i64 backend with twice the headroom before
/// coefficients overflow.
impl Coefficient for i128 {
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
        i128::from(n)
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
        "i128"
    }
}

#[cfg(test)]
mod tests {
    use crate::core::coefficient::Coefficient;

    #[test]
    fn test_basic_values() {
        assert!(<i128 as Coefficient>::zero().is_zero());
        assert!(<i128 as Coefficient>::one().is_one());
        assert_eq!(<i128 as Coefficient>::from_u64(u64::MAX), u64::MAX as i128);
    }

    #[test]
    fn test_large_literals_parse() {
        // beyond i64 range
        let parsed = <i128 as Coefficient>::parse("99999999999999999999").unwrap();
        assert_eq!(parsed, 99_999_999_999_999_999_999i128);
    }

    #[test]
    fn test_div_rem() {
        assert_eq!(Coefficient::div_rem(&10i128, &3), Some((3, 1)));
        assert_eq!(Coefficient::div_rem(&10i128, &0), None);
    }
}
