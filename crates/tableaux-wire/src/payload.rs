//! Request and response payload shapes.

use serde::{Deserialize, Serialize};

use tableaux_rational::{Rational, RationalError};

/// A fraction as it appears on the wire.
///
/// Wire fractions are plain machine integers; they widen into
/// arbitrary precision [`Rational`]s on the way into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFraction {
    /// Signed numerator.
    pub numerator: i64,
    /// Signed denominator; zero is rejected during conversion.
    pub denominator: i64,
}

impl WireFraction {
    /// Converts into a canonical rational.
    ///
    /// # Errors
    ///
    /// [`RationalError::DivideByZero`] when the denominator is zero.
    pub fn to_rational(self) -> Result<Rational, RationalError> {
        Rational::from_i64(self.numerator, self.denominator)
    }
}

/// The two accepted pivot specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PivotSpec {
    /// Pivot directly on a named cell.
    #[serde(rename_all = "camelCase")]
    Direct {
        /// Row of the cell to become the unit entry.
        row_index: usize,
        /// Column of the cell to become the unit entry.
        column_index: usize,
    },
    /// Exchange pivot: the row is located by scanning `from_index`.
    #[serde(rename_all = "camelCase")]
    Exchange {
        /// Column leaving the basis.
        from_index: usize,
        /// Column entering the basis.
        to_index: usize,
    },
}

/// A pivot request as received from the shell.
///
/// `data` and `pivot` are optional so their absence maps to the
/// caller-facing "required" messages rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotRequest {
    /// The matrix of fractions to pivot.
    #[serde(default)]
    pub data: Option<Vec<Vec<WireFraction>>>,
    /// Which pivot to perform.
    #[serde(default)]
    pub pivot: Option<PivotSpec>,
    /// Parameter column indices, required for exchange pivots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_indices: Option<Vec<usize>>,
    /// Basic column indices, required for exchange pivots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_indices: Option<Vec<usize>>,
}

/// A pivot response: every cell in its display form, a bare integer
/// for whole numbers and `n/d` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotResponse {
    /// The pivoted matrix, rendered cell by cell.
    pub data: Vec<Vec<String>>,
    /// Post-swap basic columns. Present only for exchange pivots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_indices: Option<Vec<usize>>,
    /// Post-swap parameter columns. Present only for exchange pivots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_indices: Option<Vec<usize>>,
}
