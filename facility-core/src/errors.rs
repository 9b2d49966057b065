//! Error types for the facility finder.
//!
//! A single unified error type [`FinderError`] covers the failure modes the
//! finder can hit: numerical problems in the geodesic solver and catalog
//! records that fail validation.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`MathError`](FinderError::MathError) | Non-finite input, non-convergence, division by zero | No |
//! | [`InvalidRecord`](FinderError::InvalidRecord) | Catalog entry missing or malformed fields | Yes (fix the data) |
//!
//! Most fallible functions return [`FinderResult<T>`], which is
//! `Result<T, FinderError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use facility_core::{FinderError, MathErrorKind};
//!
//! fn checked_latitude(lat: f64) -> Result<f64, FinderError> {
//!     if !lat.is_finite() {
//!         return Err(FinderError::math_error(
//!             "checked_latitude",
//!             MathErrorKind::NotFinite,
//!             "latitude is not a finite number",
//!         ));
//!     }
//!     Ok(lat)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`FinderError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Accumulated floating-point error exceeds acceptable threshold,
    /// or an iterative solver failed to converge.
    PrecisionLoss,
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result or input is NaN or infinity.
    NotFinite,
}

/// Unified error type for the facility finder.
///
/// Use the constructor methods ([`math_error`](Self::math_error),
/// [`invalid_record`](Self::invalid_record)) for consistent error creation.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A catalog record is missing a required field or carries a
    /// malformed value.
    ///
    /// This is the only recoverable variant — correcting the catalog
    /// source and reloading will succeed.
    #[error("Invalid record '{name}': {message}")]
    InvalidRecord { name: String, message: String },
}

/// Convenience alias for `Result<T, FinderError>`.
pub type FinderResult<T> = Result<T, FinderError>;

impl FinderError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidRecord`](Self::InvalidRecord) error. `name` is
    /// the record's name, or a positional label when the name itself is
    /// missing.
    pub fn invalid_record(name: &str, reason: &str) -> Self {
        Self::InvalidRecord {
            name: name.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if fixing the input data might make a retry succeed.
    ///
    /// Only [`InvalidRecord`](Self::InvalidRecord) is recoverable; math
    /// errors indicate arguments the solver can never handle.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. })
    }
}
