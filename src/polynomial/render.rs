// src/polynomial/render.rs

use std::fmt::{Display, Formatter, Result};

use crate::core::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

/// Symbol for `x^exponent`: empty, `x`, or `x^e`.
fn monomial(exponent: usize) -> String {
    match exponent {
        0 => String::new(),
        1 => "x".to_string(),
        _ => format!("x^{}", exponent),
    }
}

fn term<C: Coefficient>(exponent: usize, coefficient: &C) -> String {
    let symbol = monomial(exponent);
    if symbol.is_empty() {
        return coefficient.to_string();
    }

    if coefficient.is_one() {
        symbol
    } else if *coefficient == -C::one() {
        format!("-{}", symbol)
    } else {
        format!("{}{}", coefficient, symbol)
    }
}

impl<C: Coefficient> Polynomial<C> {
    /// Renders the polynomial as text, highest exponent first.
    ///
    /// Terms are always joined with `" + "`, so a negative term reads as
    /// `"x + -2"`. The zero polynomial renders as `"0"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<C: Coefficient> Display for Polynomial<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(exponent, c)| term(exponent, c))
            .collect();

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::{BigInt, BigRational};

    fn poly(coefficients: &[i64]) -> Polynomial<i64> {
        Polynomial::from_slice(coefficients)
    }

    #[test]
    fn test_render_constants() {
        assert_eq!(poly(&[1]).render(), "1");
        assert_eq!(poly(&[-1]).render(), "-1");
        assert_eq!(poly(&[42]).render(), "42");
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(Polynomial::<i64>::zero().render(), "0");
        assert_eq!(poly(&[0, 0, 0]).render(), "0");
    }

    #[test]
    fn test_render_unit_coefficients() {
        assert_eq!(poly(&[0, 1]).render(), "x");
        assert_eq!(poly(&[0, -1]).render(), "-x");
        assert_eq!(poly(&[0, 0, 0, -1]).render(), "-x^3");
    }

    #[test]
    fn test_render_descending_order() {
        assert_eq!(poly(&[3, 2, 1]).render(), "x^2 + 2x + 3");
        assert_eq!(poly(&[7, 0, 0, 4]).render(), "4x^3 + 7");
    }

    #[test]
    fn test_render_keeps_plus_before_negative_terms() {
        assert_eq!(poly(&[-2, 1]).render(), "x + -2");
        assert_eq!(poly(&[1, -2, 1]).render(), "x^2 + -2x + 1");
        assert_eq!(poly(&[2, -3, 2]).to_string(), "2x^2 + -3x + 2");
    }

    #[test]
    fn test_render_ignores_trailing_zeros() {
        assert_eq!(poly(&[1, 1, 0]).render(), "x + 1");
    }

    #[test]
    fn test_render_extreme_native_coefficient() {
        assert_eq!(poly(&[0, i64::MIN]).render(), "-9223372036854775808x");
        assert_eq!(poly(&[i64::MIN, 0, i64::MAX]).render(), "9223372036854775807x^2 + -9223372036854775808");
    }

    #[test]
    fn test_render_bigint() {
        let p = Polynomial::new(vec![
            BigInt::parse_bytes(b"100000000000000000000", 10).unwrap(),
            BigInt::from(1),
        ]);
        assert_eq!(p.render(), "x + 100000000000000000000");
    }

    #[test]
    fn test_render_rational() {
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        let p = Polynomial::new(vec![-half.clone(), half]);
        assert_eq!(p.render(), "1/2x + -1/2");
    }
}
