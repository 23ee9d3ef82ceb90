//! Arbitrary precision rational numbers.
//!
//! This module provides the exact fraction type every tableau cell is
//! made of.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::Abs;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use thiserror::Error;

/// Errors raised by rational arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A denominator was zero, or zero was inverted.
    #[error("division by zero")]
    DivideByZero,
}

/// Errors raised when parsing a rational from text.
#[derive(Debug, Error)]
pub enum ParseRationalError {
    /// The numerator or denominator was not a valid integer literal.
    #[error("invalid integer literal: {0}")]
    InvalidInteger(#[from] dashu::base::error::ParseError),

    /// The denominator parsed to zero.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive
/// denominator; zero is stored as exactly 0/1. Every operation returns
/// a fresh value in that canonical form, so two rationals are equal
/// exactly when their parts are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: IBig,
    denominator: IBig,
}

impl Rational {
    /// Creates a rational from numerator and denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the denominator is zero.
    pub fn new(numerator: IBig, denominator: IBig) -> Result<Self, RationalError> {
        if denominator == IBig::ZERO {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(IBig::from(numerator), IBig::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_int(n: i64) -> Self {
        Self {
            numerator: IBig::from(n),
            denominator: IBig::ONE,
        }
    }

    /// Reduces to lowest terms and moves any sign into the numerator.
    /// Callers guarantee a non-zero denominator.
    fn reduced(numerator: IBig, denominator: IBig) -> Self {
        debug_assert!(denominator != IBig::ZERO);
        if numerator == IBig::ZERO {
            return Self {
                numerator: IBig::ZERO,
                denominator: IBig::ONE,
            };
        }
        let g = gcd(numerator.clone().abs(), denominator.clone().abs());
        let mut numerator = &numerator / &g;
        let mut denominator = &denominator / &g;
        if denominator < IBig::ZERO {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &IBig {
        &self.denominator
    }

    /// Returns true if this rational is a whole number.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator == IBig::ONE
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator < IBig::ZERO
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] when inverting zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] when the divisor is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        Ok(self * &rhs.recip()?)
    }
}

/// Iterative Euclidean algorithm on non-negative magnitudes.
/// gcd(x, 0) is x, so canonical whole numbers keep their parts.
fn gcd(mut a: IBig, mut b: IBig) -> IBig {
    while b != IBig::ZERO {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: IBig::ZERO,
            denominator: IBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator == IBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: IBig::ONE,
            denominator: IBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        self.numerator == IBig::ONE && self.denominator == IBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &(self.numerator() * rhs.denominator()) + &(rhs.numerator() * self.denominator()),
            self.denominator() * rhs.denominator(),
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &(self.numerator() * rhs.denominator()) - &(rhs.numerator() * self.denominator()),
            self.denominator() * rhs.denominator(),
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            self.numerator() * rhs.numerator(),
            self.denominator() * rhs.denominator(),
        )
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_int(i64::from(n))
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `"n"` or `"n/d"`, with an optional leading minus.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (numerator, denominator) = match s.split_once('/') {
            Some((n, d)) => (n.parse::<IBig>()?, d.parse::<IBig>()?),
            None => (s.parse::<IBig>()?, IBig::ONE),
        };
        Self::new(numerator, denominator).map_err(|_| ParseRationalError::ZeroDenominator)
    }
}
