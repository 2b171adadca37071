// src/polynomial/operand.rs

use serde_json::{Number, Value};

use crate::core::coefficient::Coefficient;
use crate::errors::{PolynomialError, Result};
use crate::polynomial::polynomial::Polynomial;

/// Right-hand side of an arithmetic operation: either a polynomial or a bare
/// scalar from the coefficient domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<C: Coefficient> {
    Polynomial(Polynomial<C>),
    Scalar(C),
}

impl<C: Coefficient> Operand<C> {
    /// Coerces the operand into a polynomial.
    ///
    /// A polynomial is returned unchanged; a scalar becomes a constant
    /// polynomial (empty when the scalar is zero).
    pub fn into_polynomial(self) -> Polynomial<C> {
        match self {
            Operand::Polynomial(poly) => poly,
            Operand::Scalar(value) => Polynomial::constant(value),
        }
    }
}

impl<C: Coefficient> From<Polynomial<C>> for Operand<C> {
    fn from(poly: Polynomial<C>) -> Self {
        Operand::Polynomial(poly)
    }
}

impl<'a, C: Coefficient> From<&'a Polynomial<C>> for Operand<C> {
    fn from(poly: &'a Polynomial<C>) -> Self {
        Operand::Polynomial(poly.clone())
    }
}

impl<C: Coefficient> From<C> for Operand<C> {
    fn from(value: C) -> Self {
        Operand::Scalar(value)
    }
}

/// Coerces any polynomial or scalar into a polynomial.
pub fn coerce<C: Coefficient>(value: impl Into<Operand<C>>) -> Polynomial<C> {
    value.into().into_polynomial()
}

/// Coerces an untyped JSON value into an operand.
///
/// Arrays become polynomials (coefficients in ascending order of exponent),
/// numbers become scalars. Anything else is a type mismatch.
pub fn coerce_json<C: Coefficient>(value: &Value) -> Result<Operand<C>> {
    match value {
        Value::Number(number) => Ok(Operand::Scalar(parse_number(number)?)),
        Value::Array(items) => {
            let coefficients = items
                .iter()
                .map(|item| match item {
                    Value::Number(number) => parse_number(number),
                    other => Err(type_mismatch(other)),
                })
                .collect::<Result<Vec<C>>>()?;
            Ok(Operand::Polynomial(Polynomial::new(coefficients)))
        }
        other => Err(type_mismatch(other)),
    }
}

/// Parses `text` as JSON and coerces the result.
pub fn coerce_json_str<C: Coefficient>(text: &str) -> Result<Operand<C>> {
    let value: Value = serde_json::from_str(text)?;
    coerce_json(&value)
}

fn parse_number<C: Coefficient>(number: &Number) -> Result<C> {
    let text = number.to_string();
    C::parse(&text).ok_or(PolynomialError::InvalidCoefficient { value: text })
}

fn type_mismatch(value: &Value) -> PolynomialError {
    PolynomialError::TypeMismatch {
        found: json_type_name(value).to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::{BigInt, BigRational};
    use serde_json::json;

    #[test]
    fn test_polynomial_operand_is_unchanged() {
        let p = Polynomial::new(vec![1i64, 2, 0]);
        let coerced = coerce::<i64>(&p);
        // no trimming on coercion
        assert_eq!(coerced.coefficients(), &[1, 2, 0]);
    }

    #[test]
    fn test_scalar_operand() {
        assert_eq!(coerce::<i64>(5i64).coefficients(), &[5]);
        assert_eq!(coerce::<i64>(0i64).degree(), 0);
    }

    #[test]
    fn test_coerce_json_array() {
        let operand = coerce_json::<i64>(&json!([3, 2, 1])).unwrap();
        assert_eq!(operand, Operand::Polynomial(Polynomial::new(vec![3, 2, 1])));
    }

    #[test]
    fn test_coerce_json_scalar() {
        let operand = coerce_json::<BigInt>(&json!(-7)).unwrap();
        assert_eq!(operand, Operand::Scalar(BigInt::from(-7)));
    }

    #[test]
    fn test_coerce_json_decimal_into_rational() {
        let operand = coerce_json::<BigRational>(&json!([0.5, 2])).unwrap();
        let poly = operand.into_polynomial();
        assert_eq!(poly.coefficient(0).to_string(), "1/2");
        assert_eq!(poly.coefficient(1).to_string(), "2");
    }

    #[test]
    fn test_coerce_json_type_mismatch() {
        for (value, expected) in [
            (json!("x + 1"), "string"),
            (json!(true), "boolean"),
            (json!(null), "null"),
            (json!({"coefficients": [1]}), "object"),
        ] {
            match coerce_json::<i64>(&value) {
                Err(PolynomialError::TypeMismatch { found }) => assert_eq!(found, expected),
                other => panic!("expected type mismatch for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_coerce_json_nested_array_is_mismatch() {
        match coerce_json::<i64>(&json!([1, [2]])) {
            Err(PolynomialError::TypeMismatch { found }) => assert_eq!(found, "array"),
            other => panic!("expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_coerce_json_wide_integer_into_bigint() {
        let operand = coerce_json_str::<BigInt>("[123456789012345678901234567890, 1]").unwrap();
        let poly = operand.into_polynomial();
        assert_eq!(poly.coefficient(0).to_string(), "123456789012345678901234567890");
        assert_eq!(poly.coefficient(1), BigInt::from(1));
    }

    #[test]
    fn test_coerce_json_wide_integer_into_rational() {
        let operand = coerce_json_str::<BigRational>("-340282366920938463463374607431768211457").unwrap();
        assert_eq!(
            operand.into_polynomial().coefficient(0).to_string(),
            "-340282366920938463463374607431768211457"
        );
    }

    #[test]
    fn test_coerce_json_wide_integer_rejected_by_native() {
        match coerce_json_str::<i64>("[123456789012345678901234567890]") {
            Err(PolynomialError::InvalidCoefficient { value }) => {
                assert_eq!(value, "123456789012345678901234567890")
            }
            other => panic!("expected invalid coefficient, got {:?}", other),
        }
    }

    #[test]
    fn test_coerce_json_unrepresentable_coefficient() {
        assert!(matches!(
            coerce_json::<i64>(&json!([1.5])),
            Err(PolynomialError::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn test_coerce_json_str_reports_bad_json() {
        assert!(matches!(
            coerce_json_str::<i64>("[1, 2"),
            Err(PolynomialError::Json(_))
        ));
    }
}
