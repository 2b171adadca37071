// src/polynomial/division.rs

use log::{debug, error, trace};

use crate::core::coefficient::Coefficient;
use crate::errors::{PolynomialError, Result};
use crate::polynomial::polynomial::Polynomial;

impl<C: Coefficient> Polynomial<C> {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Long division over the coefficient domain. Each step divides the
    /// current remainder coefficient by the divisor's leading coefficient and
    /// requires that division to be exact, so the result satisfies
    /// `quotient * divisor + remainder == self` with the remainder shorter
    /// than the divisor.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisorIsZero` if the divisor is the zero polynomial.
    /// Returns `PolynomialError::NonUnitLeadingCoefficient` if a step is not exact
    /// in the coefficient domain.
    /// Returns `PolynomialError::InvalidCoefficient` if a step overflows a fixed-width domain.
    pub fn divide_with_remainder(&self, divisor: &Polynomial<C>) -> Result<(Self, Self)> {
        let divisor = divisor.clone().trim();
        if divisor.degree() == 0 {
            error!("Division by zero polynomial");
            return Err(PolynomialError::DivisorIsZero);
        }

        let leading_exponent = divisor.degree() - 1;
        let leading = divisor.coefficient(leading_exponent);

        let mut quotient = Polynomial::zero();
        let mut remainder = self.clone().trim();

        let steps = match remainder.degree().checked_sub(divisor.degree()) {
            Some(difference) => difference + 1,
            None => 0,
        };

        for shift in (0..steps).rev() {
            let current = remainder.coefficient(leading_exponent + shift);
            // leading is non-zero after trimming, so None means the domain overflowed
            let (digit, rest) = current.div_rem(&leading).ok_or_else(|| {
                PolynomialError::InvalidCoefficient {
                    value: format!("{} / {}", current, leading),
                }
            })?;

            if !rest.is_zero() {
                error!(
                    "Division step at x^{} not exact: {} / {} leaves {}",
                    shift, current, leading, rest
                );
                return Err(PolynomialError::NonUnitLeadingCoefficient {
                    coefficient: current.to_string(),
                    leading: leading.to_string(),
                });
            }

            if digit.is_zero() {
                continue;
            }

            trace!("divide: x^{} digit {}", shift, digit);
            remainder = remainder.subtract_poly(&divisor.shift(shift).scalar_mul(&digit));
            quotient.set_coefficient(shift, digit);
        }

        debug_assert!(remainder.degree() < divisor.degree());
        debug!(
            "divide ({}): dividend degree {} by divisor degree {} -> quotient {}, remainder {}",
            C::backend_name(),
            self.degree(),
            divisor.degree(),
            quotient.degree(),
            remainder.degree()
        );

        Ok((quotient.trim(), remainder))
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
    fn test_exact_division() {
        // (x^2 + 5x + 6) / (x + 2) = x + 3
        let (quotient, remainder) = poly(&[6, 5, 1]).divide_with_remainder(&poly(&[2, 1])).unwrap();
        assert_eq!(quotient.coefficients(), &[3, 1]);
        assert!(remainder.is_zero());
        assert_eq!(remainder.degree(), 0);
    }

    #[test]
    fn test_division_with_remainder() {
        // (x^3 + 2x + 5) / (x - 1) = x^2 + x + 3, remainder 8
        let dividend = poly(&[5, 2, 0, 1]);
        let divisor = poly(&[-1, 1]);
        let (quotient, remainder) = dividend.divide_with_remainder(&divisor).unwrap();
        assert_eq!(quotient.coefficients(), &[3, 1, 1]);
        assert_eq!(remainder.coefficients(), &[8]);
        assert_eq!(quotient.multiply(&divisor).add(&remainder), dividend);
    }

    #[test]
    fn test_dividend_shorter_than_divisor() {
        let (quotient, remainder) = poly(&[4, 1]).divide_with_remainder(&poly(&[1, 0, 1])).unwrap();
        assert_eq!(quotient.degree(), 0);
        assert_eq!(remainder.coefficients(), &[4, 1]);
    }

    #[test]
    fn test_zero_dividend() {
        let (quotient, remainder) = Polynomial::<i64>::zero()
            .divide_with_remainder(&poly(&[1, 1]))
            .unwrap();
        assert!(quotient.is_zero());
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_division_by_zero() {
        let p = poly(&[1, 2]);
        assert!(matches!(
            p.divide_with_remainder(&Polynomial::zero()),
            Err(PolynomialError::DivisorIsZero)
        ));
        // untrimmed zeros are still the zero polynomial
        assert!(matches!(
            p.divide_with_remainder(&poly(&[0, 0])),
            Err(PolynomialError::DivisorIsZero)
        ));
    }

    #[test]
    fn test_untrimmed_divisor_uses_real_leading_coefficient() {
        let (quotient, remainder) = poly(&[0, 0, 1]).divide_with_remainder(&poly(&[0, 1, 0])).unwrap();
        assert_eq!(quotient.coefficients(), &[0, 1]);
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_non_unit_leading_coefficient() {
        // x^2 / 2x is not exact over the integers
        match poly(&[0, 0, 1]).divide_with_remainder(&poly(&[0, 2])) {
            Err(PolynomialError::NonUnitLeadingCoefficient { coefficient, leading }) => {
                assert_eq!(coefficient, "1");
                assert_eq!(leading, "2");
            }
            other => panic!("expected non-unit failure, got {:?}", other),
        }
    }

    #[test]
    fn test_non_unit_leading_coefficient_exact_steps_succeed() {
        // every step happens to divide exactly: (2x^2 + 4x) / 2x = x + 2
        let (quotient, remainder) = poly(&[0, 4, 2]).divide_with_remainder(&poly(&[0, 2])).unwrap();
        assert_eq!(quotient.coefficients(), &[2, 1]);
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_bigint_division() {
        let big = |values: &[i64]| {
            Polynomial::new(values.iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>())
        };
        let dividend = big(&[-1, 0, 0, 0, 1]);
        let divisor = big(&[-1, 1]);
        let (quotient, remainder) = dividend.divide_with_remainder(&divisor).unwrap();
        assert_eq!(quotient, big(&[1, 1, 1, 1]));
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_rational_division_never_fails_on_nonzero_divisor() {
        let ratio = |n: i64| BigRational::from_integer(BigInt::from(n));
        let dividend = Polynomial::new(vec![ratio(1), ratio(0), ratio(1)]);
        let divisor = Polynomial::new(vec![ratio(0), ratio(2)]);
        let (quotient, remainder) = dividend.divide_with_remainder(&divisor).unwrap();
        // (x^2 + 1) / 2x = x/2, remainder 1
        assert_eq!(quotient.coefficient(1), BigRational::new(BigInt::from(1), BigInt::from(2)));
        assert_eq!(remainder, Polynomial::new(vec![ratio(1)]));
        assert_eq!(quotient.multiply(&divisor).add(&remainder), dividend);
    }
}
