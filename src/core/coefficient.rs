// src/core/coefficient.rs

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Core trait for coefficient arithmetic
///
/// This trait abstracts over the numeric domain a polynomial draws its
/// coefficients from. The polynomial engine only ever needs ring operations
/// plus an exact-division test, so any type that can answer "does `b` divide
/// `a`, and with what quotient" can back a polynomial.
///
/// Implementations:
/// - i64: native signed 64-bit integers
/// - i128: native signed 128-bit integers
/// - num::BigInt: arbitrary precision integers
/// - num::BigRational: arbitrary precision rationals (every non-zero value is a unit)
pub trait Coefficient:
    Clone +
    Debug +
    Display +
    PartialEq +
    Add<Output = Self> +
    Sub<Output = Self> +
    Mul<Output = Self> +
    Neg<Output = Self> +
    Sized +
    Send +
    Sync
{
    /// Create zero value
    fn zero() -> Self;

    /// Create one value
    fn one() -> Self;

    /// Check if value is zero
    fn is_zero(&self) -> bool;

    /// Check if value is one
    fn is_one(&self) -> bool;

    /// Embed a non-negative integer (used for derivative scaling)
    fn from_u64(n: u64) -> Self;

    /// Parse a decimal literal, returning None if the domain cannot represent it
    fn parse(text: &str) -> Option<Self>;

    /// Quotient and remainder of `self / divisor`
    ///
    /// Returns None if the divisor is zero or the division overflows. The
    /// remainder is zero exactly when the division is exact.
    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)>;

    /// Backend type name for debugging/logging
    fn backend_name() -> &'static str;
}

/// Backend type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Native64,
    Native128,
    BigInt,
    Rational,
}

impl BackendType {
    pub fn name(&self) -> &'static str {
        match self {
            BackendType::Native64 => "i64",
            BackendType::Native128 => "i128",
            BackendType::BigInt => "bigint",
            BackendType::Rational => "rational",
        }
    }

    /// Look up a backend by its configuration name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "i64" | "native64" => Some(BackendType::Native64),
            "i128" | "native128" => Some(BackendType::Native128),
            "bigint" | "integer" => Some(BackendType::BigInt),
            "rational" | "bigrational" => Some(BackendType::Rational),
            _ => None,
        }
    }
}
