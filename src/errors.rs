// src/errors.rs

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Every variant is a deterministic function of the inputs; none of them is
/// transient and retrying the same call yields the same error.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// An operand could not be coerced into a polynomial
    #[error("Type mismatch: cannot coerce {found} into a polynomial")]
    TypeMismatch { found: String },

    /// Negative exponent passed to `power`
    #[error("Invalid exponent {exponent}: exponent must be non-negative")]
    InvalidExponent { exponent: i64 },

    /// Negative coefficient index
    #[error("Negative coefficient index {index}")]
    NegativeIndex { index: isize },

    /// Division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisorIsZero,

    /// A division step was not exact in the coefficient domain
    #[error("Leading coefficient {leading} does not divide {coefficient} exactly; it is not a unit in this coefficient domain")]
    NonUnitLeadingCoefficient { coefficient: String, leading: String },

    /// A literal could not be represented in the coefficient domain
    #[error("Invalid coefficient: {value}")]
    InvalidCoefficient { value: String },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolynomialError>;
