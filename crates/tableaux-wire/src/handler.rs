//! Request validation and dispatch into the pivot engine.

use thiserror::Error;

use tableaux_linalg::{Basis, Tableau, TableauError};
use tableaux_rational::Rational;

use crate::payload::{PivotRequest, PivotResponse, PivotSpec, WireFraction};

/// Caller-facing request failures.
///
/// The display text of the missing-field variants is the message the
/// shell forwards verbatim in its bad-request response.
#[derive(Debug, Error)]
pub enum WireError {
    /// The request carried no matrix.
    #[error("Data is required")]
    MissingData,

    /// The request carried no pivot specification.
    #[error("Pivot is required")]
    MissingPivot,

    /// An exchange pivot arrived without both index sets.
    #[error("Basic and parameter indices are required")]
    MissingIndices,

    /// The body was not valid JSON for the request shape.
    #[error("invalid request body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The engine rejected the pivot.
    #[error(transparent)]
    Engine(#[from] TableauError),
}

/// Validates a request and performs the pivot it describes.
///
/// # Errors
///
/// [`WireError`] for missing fields, a zero wire denominator, or any
/// engine rejection. Nothing is partially applied on failure.
pub fn apply(request: PivotRequest) -> Result<PivotResponse, WireError> {
    let data = request.data.ok_or(WireError::MissingData)?;
    let pivot = request.pivot.ok_or(WireError::MissingPivot)?;

    let rows = data
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(WireFraction::to_rational)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(TableauError::from)?;
    let tableau = Tableau::from_rows(rows)?;

    match pivot {
        PivotSpec::Direct {
            row_index,
            column_index,
        } => {
            let next = tableau.pivot(row_index, column_index)?;
            Ok(PivotResponse {
                data: render(&next),
                basic_indices: None,
                parameter_indices: None,
            })
        }
        PivotSpec::Exchange {
            from_index,
            to_index,
        } => {
            let (basic, parameter) = match (request.basic_indices, request.parameter_indices) {
                (Some(basic), Some(parameter)) => (basic, parameter),
                _ => return Err(WireError::MissingIndices),
            };
            let mut basis = Basis::new(basic, parameter);
            let next = tableau.pivot_exchange(from_index, to_index, &mut basis)?;
            Ok(PivotResponse {
                data: render(&next),
                basic_indices: Some(basis.basic().to_vec()),
                parameter_indices: Some(basis.parameter().to_vec()),
            })
        }
    }
}

/// Handles a raw JSON body and answers with a JSON body.
///
/// # Errors
///
/// [`WireError::Malformed`] for an unparseable body, otherwise the
/// failures of [`apply`].
pub fn handle_json(body: &str) -> Result<String, WireError> {
    let request: PivotRequest = serde_json::from_str(body)?;
    let response = apply(request)?;
    Ok(serde_json::to_string(&response)?)
}

fn render(tableau: &Tableau) -> Vec<Vec<String>> {
    tableau
        .rows()
        .map(|row| row.iter().map(Rational::to_string).collect())
        .collect()
}
