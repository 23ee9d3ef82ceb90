//! # Tableaux
//!
//! An exact-rational Gauss-Jordan pivot engine for simplex-style
//! tableau manipulation.
//!
//! Tableaux keeps every matrix entry as a reduced fraction over
//! arbitrary precision integers, so pivot after pivot stays exact
//! where floating point would drift.
//!
//! ## Crates
//!
//! - [`rational`]: the canonical fraction type and its arithmetic
//! - [`linalg`]: the tableau matrix and the two pivot operations
//! - [`wire`]: JSON payloads for a transport shell
//!
//! ## Quick Start
//!
//! ```rust
//! use tableaux::prelude::*;
//!
//! let tableau = Tableau::from_rows(vec![
//!     vec![Rational::from_int(2), Rational::from_int(3)],
//!     vec![Rational::from_int(3), Rational::from_int(4)],
//! ])?;
//! let reduced = tableau.pivot(0, 0)?;
//! assert_eq!(reduced[(0, 0)], Rational::from_int(1));
//! # Ok::<(), tableaux::linalg::TableauError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tableaux_linalg as linalg;
pub use tableaux_rational as rational;
pub use tableaux_wire as wire;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tableaux_linalg::{Basis, Tableau, TableauError};
    pub use tableaux_rational::{Rational, RationalError};
    pub use tableaux_wire::{PivotRequest, PivotResponse, PivotSpec};
}
