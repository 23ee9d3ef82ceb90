//! # tableaux-rational
//!
//! Exact rational arithmetic for the tableaux pivot engine.
//!
//! Numbers are stored as numerator/denominator pairs over arbitrary
//! precision integers, always reduced to lowest terms with a positive
//! denominator. Repeated eliminations therefore never round and never
//! overflow, at the cost of growing digit counts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{ParseRationalError, Rational, RationalError};
