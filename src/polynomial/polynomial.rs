// src/polynomial/polynomial.rs

use std::cmp::max;
use log::{debug, trace};

use crate::core::coefficient::Coefficient;
use crate::errors::{PolynomialError, Result};
use crate::polynomial::operand::Operand;

/// A univariate polynomial over the coefficient domain `C`.
///
/// Coefficients are stored in ascending order of exponent: `coefficients[i]`
/// is the coefficient of `x^i`. Every value produced by an arithmetic
/// operation is canonical, meaning the sequence is either empty (the zero
/// polynomial) or ends in a non-zero coefficient. `Polynomial::new` stores
/// what it is given, so a hand-built value may carry trailing zeros until it
/// goes through an operation or `trim`.
#[derive(Clone, Debug)]
pub struct Polynomial<C> {
    pub(crate) coefficients: Vec<C>,
}

impl<C: Coefficient> Polynomial<C> {
    /// Creates a polynomial from coefficients in ascending order of exponent.
    ///
    /// The sequence is taken as-is and is not trimmed.
    pub fn new(coefficients: Vec<C>) -> Self {
        Polynomial { coefficients }
    }

    /// Copies the given coefficients into a new polynomial.
    pub fn from_slice(coefficients: &[C]) -> Self {
        Polynomial::new(coefficients.to_vec())
    }

    /// The additive identity, stored as an empty sequence.
    pub fn zero() -> Self {
        Polynomial::new(Vec::new())
    }

    /// The multiplicative identity `[1]`.
    pub fn one() -> Self {
        Polynomial::new(vec![C::one()])
    }

    /// Wraps a scalar: empty for zero, a single coefficient otherwise.
    pub fn constant(value: C) -> Self {
        if value.is_zero() {
            Polynomial::zero()
        } else {
            Polynomial::new(vec![value])
        }
    }

    /// The single term `coefficient * x^exponent`.
    pub fn monomial(coefficient: C, exponent: usize) -> Self {
        Polynomial::constant(coefficient).shift(exponent)
    }

    /// Builds the monic polynomial `(x - r_1)(x - r_2)...(x - r_n)`.
    pub fn from_roots(roots: &[C]) -> Self {
        let factors: Vec<Polynomial<C>> = roots
            .iter()
            .map(|root| Polynomial::new(vec![-root.clone(), C::one()]).trim())
            .collect();
        Polynomial::product(&factors)
    }

    pub fn product(polys: &[Polynomial<C>]) -> Self {
        polys
            .iter()
            .fold(Polynomial::one(), |acc, poly| acc.multiply_poly(poly))
    }

    pub fn coefficients(&self) -> &[C] {
        &self.coefficients
    }

    /// Length of the stored coefficient sequence.
    ///
    /// This is one more than the mathematical degree for a non-zero canonical
    /// value, and 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Highest exponent with a non-zero coefficient, or None for zero.
    pub fn highest_exponent(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// True if the stored sequence has no trailing zero.
    pub fn is_canonical(&self) -> bool {
        self.coefficients.last().map_or(true, |c| !c.is_zero())
    }

    pub fn leading_coefficient(&self) -> Option<&C> {
        self.coefficients.iter().rev().find(|c| !c.is_zero())
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().map_or(false, |c| c.is_one())
    }

    /// Drops trailing zero coefficients.
    pub fn trim(mut self) -> Self {
        while self.coefficients.last().map_or(false, |c| c.is_zero()) {
            self.coefficients.pop();
        }
        self
    }

    /// Coefficient of `x^exponent`; zero past the end of the stored sequence.
    pub fn coefficient(&self, exponent: usize) -> C {
        self.coefficients
            .get(exponent)
            .cloned()
            .unwrap_or_else(C::zero)
    }

    /// Checked form of [`Polynomial::coefficient`] for signed indices.
    pub fn coefficient_at(&self, index: isize) -> Result<C> {
        let exponent = to_exponent(index)?;
        Ok(self.coefficient(exponent))
    }

    /// Raw index assignment, zero-filling when writing past the end.
    ///
    /// Does not trim: writing a zero at the top leaves the value non-canonical.
    pub(crate) fn set_coefficient(&mut self, exponent: usize, value: C) {
        if exponent >= self.coefficients.len() {
            self.coefficients.resize_with(exponent + 1, C::zero);
        }
        self.coefficients[exponent] = value;
    }

    /// Returns a canonical copy with the coefficient at `index` replaced.
    pub fn with_coefficient(&self, index: isize, value: C) -> Result<Self> {
        let exponent = to_exponent(index)?;
        if value.is_zero() && exponent >= self.degree() {
            return Ok(self.clone().trim());
        }
        let mut result = self.clone();
        result.set_coefficient(exponent, value);
        Ok(result.trim())
    }

    /// Value equality under the implicit zero tail: `[1, 1]` equals `[1, 1, 0]`.
    pub fn equals(&self, other: &Polynomial<C>) -> bool {
        let zero = C::zero();
        let length = max(self.degree(), other.degree());
        (0..length).all(|i| {
            self.coefficients.get(i).unwrap_or(&zero) == other.coefficients.get(i).unwrap_or(&zero)
        })
    }

    /// Adds a polynomial or scalar to `self`.
    pub fn add(&self, other: impl Into<Operand<C>>) -> Self {
        self.add_poly(&other.into().into_polynomial())
    }

    /// Subtracts a polynomial or scalar from `self`.
    pub fn subtract(&self, other: impl Into<Operand<C>>) -> Self {
        self.add_poly(&other.into().into_polynomial().negate())
    }

    /// Multiplies `self` by a polynomial or scalar.
    pub fn multiply(&self, other: impl Into<Operand<C>>) -> Self {
        self.multiply_poly(&other.into().into_polynomial())
    }

    /// Negates every stored coefficient; the length is preserved.
    pub fn negate(&self) -> Self {
        Polynomial::new(self.coefficients.iter().map(|c| -c.clone()).collect())
    }

    pub(crate) fn add_poly(&self, other: &Polynomial<C>) -> Self {
        let length = max(self.degree(), other.degree());
        let sum = (0..length)
            .map(|i| self.coefficient(i) + other.coefficient(i))
            .collect();
        Polynomial::new(sum).trim()
    }

    pub(crate) fn subtract_poly(&self, other: &Polynomial<C>) -> Self {
        self.add_poly(&other.negate())
    }

    /// Schoolbook convolution, O(n*m) in the operand lengths.
    pub(crate) fn multiply_poly(&self, other: &Polynomial<C>) -> Self {
        if self.degree() == 0 || other.degree() == 0 {
            return Polynomial::zero();
        }

        let mut product = vec![C::zero(); self.degree() + other.degree() - 1];
        for (i, left) in self.coefficients.iter().enumerate() {
            if left.is_zero() {
                continue;
            }
            for (j, right) in other.coefficients.iter().enumerate() {
                product[i + j] = product[i + j].clone() + left.clone() * right.clone();
            }
        }

        Polynomial::new(product).trim()
    }

    pub fn square(&self) -> Self {
        self.multiply_poly(self)
    }

    pub fn scalar_mul(&self, scalar: &C) -> Self {
        Polynomial::new(self.coefficients.iter().map(|c| c.clone() * scalar.clone()).collect()).trim()
    }

    /// Raises `self` to a non-negative integer power by repeated squaring.
    ///
    /// `squares[i]` holds `self^(2^i)` for every bit position of the exponent,
    /// and the accumulator picks up `squares[i]` for each set bit. `power(0)`
    /// is `[1]` for every base, including zero.
    pub fn power(&self, exponent: i64) -> Result<Self> {
        if exponent < 0 {
            return Err(PolynomialError::InvalidExponent { exponent });
        }
        let exponent = exponent as u64;

        // minimal k with 2^k > exponent
        let bit_length = (u64::BITS - exponent.leading_zeros()) as usize;
        trace!("power: exponent={}, squaring table size={}", exponent, bit_length);

        let mut squares: Vec<Polynomial<C>> = Vec::with_capacity(bit_length);
        if bit_length > 0 {
            squares.push(self.clone().trim());
        }
        for i in 1..bit_length {
            let next = squares[i - 1].square();
            squares.push(next);
        }

        let mut result = Polynomial::one();
        for (bit, square) in squares.iter().enumerate() {
            if (exponent >> bit) & 1 == 1 {
                result = result.multiply_poly(square);
            }
        }

        debug!("power: base degree {} ^ {} -> degree {}", self.degree(), exponent, result.degree());
        Ok(result)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn value_at(&self, x: &C) -> C {
        self.coefficients
            .iter()
            .rev()
            .fold(C::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Formal derivative: drops the constant term and scales the rest by their exponent.
    pub fn derivative(&self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(exponent, c)| C::from_u64(exponent as u64) * c.clone())
            .collect();
        Polynomial::new(coefficients).trim()
    }

    /// Multiplies by `x^places`, i.e. prepends `places` zero coefficients.
    pub fn shift(&self, places: usize) -> Self {
        if self.is_zero() {
            return Polynomial::zero();
        }
        let mut coefficients = vec![C::zero(); places];
        coefficients.extend(self.coefficients.iter().cloned());
        Polynomial::new(coefficients).trim()
    }
}

fn to_exponent(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| PolynomialError::NegativeIndex { index })
}

impl<C: Coefficient> PartialEq for Polynomial<C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<C: Coefficient> Default for Polynomial<C> {
    fn default() -> Self {
        Polynomial::zero()
    }
}
