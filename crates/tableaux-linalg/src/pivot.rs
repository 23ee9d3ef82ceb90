//! Gauss-Jordan pivot operations.
//!
//! Both entry points return a fresh tableau and leave their input (and
//! the basis, for exchange pivots) untouched on any failure.

use num_traits::{One, Zero};

use crate::display;
use crate::tableau::{Tableau, TableauError};

/// Caller-maintained bookkeeping of which tableau columns are basic
/// and which are free parameters.
///
/// An exchange pivot moves one column from each set to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basis {
    basic: Vec<usize>,
    parameter: Vec<usize>,
}

impl Basis {
    /// Creates a basis from the two column index sets.
    #[must_use]
    pub fn new(basic: Vec<usize>, parameter: Vec<usize>) -> Self {
        Self { basic, parameter }
    }

    /// The columns currently tracked as basic.
    #[must_use]
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// The columns currently tracked as free parameters.
    #[must_use]
    pub fn parameter(&self) -> &[usize] {
        &self.parameter
    }

    /// Moves `from` out of the basic set and `to` out of the parameter
    /// set, each taking the other's place.
    ///
    /// Membership is checked before anything is written, so a failed
    /// swap leaves the basis unchanged.
    ///
    /// # Errors
    ///
    /// [`TableauError::NotBasic`] or [`TableauError::NotParameter`]
    /// when a column is missing from the corresponding set.
    pub fn swap(&mut self, from: usize, to: usize) -> Result<(), TableauError> {
        let basic_pos = self
            .basic
            .iter()
            .position(|&col| col == from)
            .ok_or(TableauError::NotBasic { col: from })?;
        let parameter_pos = self
            .parameter
            .iter()
            .position(|&col| col == to)
            .ok_or(TableauError::NotParameter { col: to })?;
        self.basic[basic_pos] = to;
        self.parameter[parameter_pos] = from;
        Ok(())
    }
}

impl Tableau {
    /// Pivots on the cell at `(pivot_row, pivot_col)`.
    ///
    /// The pivot row is scaled so the cell becomes exactly 1, then the
    /// scaled row is used to eliminate the pivot column from every
    /// other row. Every cell of the result is in canonical form.
    ///
    /// # Errors
    ///
    /// [`TableauError::OutOfBounds`] when the cell lies outside the
    /// matrix, [`TableauError::ZeroPivot`] when it holds exact zero.
    /// The input tableau is never modified.
    pub fn pivot(&self, pivot_row: usize, pivot_col: usize) -> Result<Self, TableauError> {
        self.check_cell(pivot_row, pivot_col)?;
        if self[(pivot_row, pivot_col)].is_zero() {
            return Err(TableauError::ZeroPivot {
                row: pivot_row,
                col: pivot_col,
            });
        }

        tracing::debug!(
            target: "tableaux::pivot",
            "before pivot at ({pivot_row}, {pivot_col}):\n{}",
            display::render_aligned(self, display::DEFAULT_COLUMN_SPACING)
        );

        let mut next = self.clone();

        // Scale the pivot row first; elimination reads the scaled row.
        let factor = next[(pivot_row, pivot_col)].recip()?;
        next.scale_row(pivot_row, &factor);

        for row in 0..next.num_rows() {
            if row == pivot_row || next[(row, pivot_col)].is_zero() {
                continue;
            }
            let row_factor = -&next[(row, pivot_col)];
            next.add_scaled_row(row, pivot_row, &row_factor);
        }

        tracing::debug!(
            target: "tableaux::pivot",
            "after pivot at ({pivot_row}, {pivot_col}):\n{}",
            display::render_aligned(&next, display::DEFAULT_COLUMN_SPACING)
        );

        Ok(next)
    }

    /// Exchange pivot: `from_col` leaves the basis, `to_col` enters it.
    ///
    /// The pivot row is not supplied by the caller; it is the first row
    /// (lowest index) holding exactly 1 in `from_col`. The elimination
    /// itself is [`Tableau::pivot`] on that row and `to_col`, and on
    /// success the two columns are swapped between the basis' index
    /// sets.
    ///
    /// # Errors
    ///
    /// [`TableauError::ColumnOutOfBounds`] for a bad column index,
    /// [`TableauError::NoUnitRow`] when no row holds 1 in `from_col`,
    /// [`TableauError::ZeroPivot`] when the located cell in `to_col`
    /// is zero, and the basis membership errors from [`Basis::swap`].
    /// Neither the tableau nor the basis is modified on failure.
    pub fn pivot_exchange(
        &self,
        from_col: usize,
        to_col: usize,
        basis: &mut Basis,
    ) -> Result<Self, TableauError> {
        self.check_col(from_col)?;
        self.check_col(to_col)?;

        let pivot_row = self
            .find_unit_row(from_col)
            .ok_or(TableauError::NoUnitRow { col: from_col })?;

        tracing::debug!(
            target: "tableaux::pivot",
            "column {from_col} leaves the basis via row {pivot_row}, column {to_col} enters"
        );

        let next = self.pivot(pivot_row, to_col)?;
        basis.swap(from_col, to_col)?;
        Ok(next)
    }

    /// First row (lowest index) whose entry in `col` is exactly 1.
    fn find_unit_row(&self, col: usize) -> Option<usize> {
        (0..self.num_rows()).find(|&row| self[(row, col)].is_one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableaux_rational::{Rational, RationalError};

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    fn t(rows: Vec<Vec<Rational>>) -> Tableau {
        Tableau::from_rows(rows).unwrap()
    }

    #[test]
    fn test_pivot_scales_and_eliminates() {
        let before = t(vec![
            vec![q(2, 1), q(0, 1), q(0, 1)],
            vec![q(0, 1), q(4, 1), q(0, 1)],
        ]);
        let after = before.pivot(0, 0).unwrap();
        assert_eq!(
            after,
            t(vec![
                vec![q(1, 1), q(0, 1), q(0, 1)],
                vec![q(0, 1), q(4, 1), q(0, 1)],
            ])
        );
        // The input is untouched.
        assert_eq!(before[(0, 0)], q(2, 1));
    }

    #[test]
    fn test_pivot_cell_becomes_one_and_column_clears() {
        let before = t(vec![
            vec![q(3, 1), q(1, 2), q(5, 1)],
            vec![q(6, 1), q(7, 1), q(-1, 3)],
            vec![q(-3, 2), q(0, 1), q(4, 1)],
        ]);
        let after = before.pivot(1, 1).unwrap();
        for row in 0..3 {
            let expected = if row == 1 { q(1, 1) } else { q(0, 1) };
            assert_eq!(after[(row, 1)], expected);
        }
    }

    #[test]
    fn test_fractional_elimination() {
        // Pivot at (0, 0): row 0 becomes [1, 3/2], row 1 loses its
        // leading 3: [0, 4 - 3 * 3/2] = [0, -1/2].
        let before = t(vec![vec![q(2, 1), q(3, 1)], vec![q(3, 1), q(4, 1)]]);
        let after = before.pivot(0, 0).unwrap();
        assert_eq!(after, t(vec![vec![q(1, 1), q(3, 2)], vec![q(0, 1), q(-1, 2)]]));
    }

    #[test]
    fn test_pivot_twice_is_identity() {
        let before = t(vec![
            vec![q(2, 1), q(3, 1), q(1, 1)],
            vec![q(3, 1), q(4, 1), q(-2, 1)],
        ]);
        let once = before.pivot(0, 1).unwrap();
        let twice = once.pivot(0, 1).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_pivot_rejected() {
        let before = t(vec![vec![q(0, 1), q(1, 1)], vec![q(2, 1), q(3, 1)]]);
        assert_eq!(
            before.pivot(0, 0).unwrap_err(),
            TableauError::ZeroPivot { row: 0, col: 0 }
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let before = t(vec![vec![q(1, 1)]]);
        assert_eq!(
            before.pivot(1, 0).unwrap_err(),
            TableauError::OutOfBounds {
                row: 1,
                col: 0,
                rows: 1,
                cols: 1
            }
        );
    }

    #[test]
    fn test_exchange_pivot() {
        // Column 0 is basic through row 0; bring column 2 into the
        // basis in its place.
        let before = t(vec![
            vec![q(1, 1), q(2, 1), q(3, 1)],
            vec![q(0, 1), q(1, 1), q(2, 1)],
        ]);
        let mut basis = Basis::new(vec![0, 1], vec![2]);
        let after = before.pivot_exchange(0, 2, &mut basis).unwrap();

        assert_eq!(after[(0, 2)], q(1, 1));
        assert_eq!(after[(1, 2)], q(0, 1));
        assert_eq!(after.row(0), &[q(1, 3), q(2, 3), q(1, 1)]);
        assert_eq!(after.row(1), &[q(-2, 3), q(-1, 3), q(0, 1)]);

        assert_eq!(basis.basic(), &[2, 1]);
        assert_eq!(basis.parameter(), &[0]);
    }

    #[test]
    fn test_exchange_scans_lowest_row_first() {
        // Both rows hold 1 in column 0; the scan must pick row 0.
        let before = t(vec![vec![q(1, 1), q(2, 1)], vec![q(1, 1), q(4, 1)]]);
        let mut basis = Basis::new(vec![0], vec![1]);
        let after = before.pivot_exchange(0, 1, &mut basis).unwrap();
        assert_eq!(after[(0, 1)], q(1, 1));
        assert_eq!(after[(1, 1)], q(0, 1));
    }

    #[test]
    fn test_exchange_without_unit_row_rejected() {
        let before = t(vec![vec![q(2, 1), q(1, 2)], vec![q(3, 1), q(5, 1)]]);
        let mut basis = Basis::new(vec![0], vec![1]);
        assert_eq!(
            before.pivot_exchange(0, 1, &mut basis).unwrap_err(),
            TableauError::NoUnitRow { col: 0 }
        );
        // The basis is untouched by the failed call.
        assert_eq!(basis, Basis::new(vec![0], vec![1]));
    }

    #[test]
    fn test_exchange_zero_target_rejected() {
        let before = t(vec![vec![q(1, 1), q(0, 1)], vec![q(2, 1), q(3, 1)]]);
        let mut basis = Basis::new(vec![0], vec![1]);
        assert_eq!(
            before.pivot_exchange(0, 1, &mut basis).unwrap_err(),
            TableauError::ZeroPivot { row: 0, col: 1 }
        );
        assert_eq!(basis, Basis::new(vec![0], vec![1]));
    }

    #[test]
    fn test_exchange_with_untracked_columns_rejected() {
        let before = t(vec![vec![q(1, 1), q(2, 1)], vec![q(0, 1), q(3, 1)]]);

        let mut basis = Basis::new(vec![1], vec![0]);
        assert_eq!(
            before.pivot_exchange(0, 1, &mut basis).unwrap_err(),
            TableauError::NotBasic { col: 0 }
        );

        let mut basis = Basis::new(vec![0, 1], vec![]);
        assert_eq!(
            before.pivot_exchange(0, 1, &mut basis).unwrap_err(),
            TableauError::NotParameter { col: 1 }
        );
    }

    #[test]
    fn test_arithmetic_error_converts() {
        let err: TableauError = RationalError::DivideByZero.into();
        assert_eq!(err, TableauError::Arithmetic(RationalError::DivideByZero));
    }
}
