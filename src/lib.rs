// src/lib.rs

//! Single-variable polynomial arithmetic over a pluggable coefficient domain.
//!
//! Polynomials are stored as coefficient vectors in ascending order of
//! exponent and kept in canonical form (no trailing zeros) by every
//! arithmetic operation. Division is exact long division and fails when the
//! divisor's leading coefficient does not divide a step exactly.

pub mod backends;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod polynomial;

pub use crate::core::coefficient::{BackendType, Coefficient};
pub use crate::errors::{PolynomialError, Result};
pub use crate::polynomial::{coerce, coerce_json, Operand, Polynomial};
