//! Column-aligned tableau rendering for debug traces.

use crate::tableau::Tableau;

/// Spacing between columns in the rendered dump.
pub const DEFAULT_COLUMN_SPACING: usize = 5;

/// Renders the tableau with every cell in its parenthesized form,
/// columns padded to a common width plus `column_spacing`.
///
/// Whole numbers render as `(n)`, fractions as `(n/d)` and zero as
/// `(0)`.
#[must_use]
pub fn render_aligned(tableau: &Tableau, column_spacing: usize) -> String {
    let cells: Vec<Vec<String>> = tableau
        .rows()
        .map(|row| row.iter().map(|cell| format!("({cell})")).collect())
        .collect();

    let mut widths = vec![0usize; tableau.num_cols()];
    for row in &cells {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.len());
        }
    }

    let mut out = String::new();
    for row in &cells {
        for (col, cell) in row.iter().enumerate() {
            out.push_str(cell);
            for _ in cell.len()..widths[col] + column_spacing {
                out.push(' ');
            }
        }
        // Trailing spaces on each line are dropped.
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}
