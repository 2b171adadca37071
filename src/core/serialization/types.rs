// src/core/serialization/types.rs

use serde::{Deserialize, Serialize};

use crate::core::coefficient::Coefficient;
use crate::errors::PolynomialError;
use crate::polynomial::polynomial::Polynomial;

/// Wire form of a polynomial: coefficients as decimal strings in ascending
/// order of exponent, so every backend round-trips without precision loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializablePolynomial {
    pub coefficients: Vec<String>,
}

impl<C: Coefficient> From<&Polynomial<C>> for SerializablePolynomial {
    fn from(poly: &Polynomial<C>) -> Self {
        SerializablePolynomial {
            coefficients: poly.coefficients().iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl<C: Coefficient> TryFrom<SerializablePolynomial> for Polynomial<C> {
    type Error = PolynomialError;

    fn try_from(poly: SerializablePolynomial) -> Result<Self, Self::Error> {
        let coefficients = poly
            .coefficients
            .into_iter()
            .map(|text| C::parse(&text).ok_or(PolynomialError::InvalidCoefficient { value: text }))
            .collect::<Result<Vec<C>, PolynomialError>>()?;
        Ok(Polynomial::new(coefficients).trim())
    }
}
