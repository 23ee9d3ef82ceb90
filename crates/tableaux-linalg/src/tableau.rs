//! Dense tableau storage.
//!
//! A tableau is small (tens of rows) and manipulated whole, so a dense
//! row-major layout beats anything sparse here.

use std::ops::{Index, IndexMut};

use thiserror::Error;

use tableaux_rational::{Rational, RationalError};

/// Errors raised when building or pivoting a tableau.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableauError {
    /// The matrix had no rows or no columns.
    #[error("tableau needs at least one row and one column")]
    Empty,

    /// A row's length disagreed with the first row's.
    #[error("row {row} has {len} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Its actual length.
        len: usize,
        /// The length of the first row.
        expected: usize,
    },

    /// A pivot cell lay outside the matrix.
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} tableau")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the tableau.
        rows: usize,
        /// Number of columns in the tableau.
        cols: usize,
    },

    /// A pivot column index lay outside the matrix.
    #[error("column {col} is out of bounds for width {cols}")]
    ColumnOutOfBounds {
        /// Requested column.
        col: usize,
        /// Number of columns in the tableau.
        cols: usize,
    },

    /// The pivot cell held exact zero, which cannot be scaled to one.
    #[error("cannot pivot on zero cell ({row}, {col})")]
    ZeroPivot {
        /// Pivot row.
        row: usize,
        /// Pivot column.
        col: usize,
    },

    /// No row held exactly 1 in the departing column of an exchange
    /// pivot.
    #[error("no row holds 1 in column {col}")]
    NoUnitRow {
        /// The column that was scanned.
        col: usize,
    },

    /// The departing column of an exchange pivot is not tracked as
    /// basic.
    #[error("column {col} is not a basic column")]
    NotBasic {
        /// The offending column.
        col: usize,
    },

    /// The entering column of an exchange pivot is not tracked as a
    /// parameter.
    #[error("column {col} is not a parameter column")]
    NotParameter {
        /// The offending column.
        col: usize,
    },

    /// An arithmetic failure propagated from the rational layer.
    #[error(transparent)]
    Arithmetic(#[from] RationalError),
}

/// Dense matrix of exact rationals, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Tableau {
    /// Creates a tableau from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`TableauError::Empty`] for a matrix with no rows or no
    /// columns, and [`TableauError::RaggedRow`] when any row's length
    /// disagrees with the first row's. Structural checks happen here so
    /// the pivot engine never starts arithmetic on a malformed matrix.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, TableauError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(TableauError::Empty);
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_cols {
                return Err(TableauError::RaggedRow {
                    row,
                    len: entries.len(),
                    expected: num_cols,
                });
            }
        }
        let data: Vec<Rational> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Rational]> {
        self.data.chunks(self.num_cols)
    }

    /// Scales a row by a factor.
    pub fn scale_row(&mut self, row: usize, factor: &Rational) {
        for col in 0..self.num_cols {
            self[(row, col)] = &self[(row, col)] * factor;
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    ///
    /// Each cell's corrected value is computed exactly once.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &Rational) {
        for col in 0..self.num_cols {
            let delta = &self[(source, col)] * scale;
            self[(target, col)] = &self[(target, col)] + &delta;
        }
    }

    pub(crate) fn check_cell(&self, row: usize, col: usize) -> Result<(), TableauError> {
        if row < self.num_rows && col < self.num_cols {
            Ok(())
        } else {
            Err(TableauError::OutOfBounds {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<(), TableauError> {
        if col < self.num_cols {
            Ok(())
        } else {
            Err(TableauError::ColumnOutOfBounds {
                col,
                cols: self.num_cols,
            })
        }
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Tableau {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
