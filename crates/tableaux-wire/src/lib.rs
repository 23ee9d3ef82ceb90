//! # tableaux-wire
//!
//! The JSON boundary between the pivot engine and whatever shell
//! transports requests to it. Payload shapes mirror what such a shell
//! sends: a matrix of `{numerator, denominator}` fractions plus a
//! pivot specification, answered with a matrix of display strings.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod handler;
pub mod payload;

pub use handler::{apply, handle_json, WireError};
pub use payload::{PivotRequest, PivotResponse, PivotSpec, WireFraction};
