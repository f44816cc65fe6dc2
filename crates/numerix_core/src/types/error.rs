//! Error types for structured error handling.
//!
//! This module provides:
//! - `SamplingError`: Errors from random sampling operations
//! - `LinalgError`: Errors from dense linear-system solving
//! - `NumerixError`: Umbrella error for callers mixing both components

use thiserror::Error;

/// Random sampling errors.
///
/// Provides structured error handling for sampler operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: Distribution parameter outside its valid domain
/// - `AlreadyInitialised`: Shared sampler seed requested after first use
///
/// # Examples
/// ```
/// use numerix_core::types::SamplingError;
///
/// let err = SamplingError::InvalidParameter {
///     name: "sigma".to_string(),
///     value: -1.0,
///     reason: "must be non-negative".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter sigma = -1: must be non-negative"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingError {
    /// Distribution parameter outside its valid domain.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (e.g. `mean`, `sigma`)
        name: String,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// The shared sampler has already been seeded.
    #[error("Shared sampler already initialised with seed {seed}")]
    AlreadyInitialised {
        /// Seed the shared sampler is running with
        seed: u64,
    },
}

impl SamplingError {
    /// Shorthand for a [`SamplingError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        SamplingError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

/// Dense linear algebra errors.
///
/// # Variants
/// - `DimensionMismatch`: Matrix/vector shapes disagree
/// - `SingularMatrix`: No usable pivot was found during LU decomposition
/// - `NonFiniteEntry`: Matrix holds a NaN or infinite value
///
/// # Examples
/// ```
/// use numerix_core::types::LinalgError;
///
/// let err = LinalgError::SingularMatrix { column: 2 };
/// assert!(format!("{}", err).contains("column 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinalgError {
    /// Matrix or vector shapes disagree.
    #[error("Dimension mismatch: {context} (expected {expected}, got {got})")]
    DimensionMismatch {
        /// Which shape check failed
        context: String,
        /// Expected extent
        expected: usize,
        /// Actual extent
        got: usize,
    },

    /// Matrix is singular: the selected pivot is zero.
    #[error("Singular matrix: zero pivot in column {column}")]
    SingularMatrix {
        /// Pivot column where elimination stopped
        column: usize,
    },

    /// Matrix entry is NaN or infinite.
    #[error("Non-finite matrix entry at ({row}, {column})")]
    NonFiniteEntry {
        /// Row of the first offending entry
        row: usize,
        /// Column of the first offending entry
        column: usize,
    },
}

impl LinalgError {
    /// Shorthand for a [`LinalgError::DimensionMismatch`].
    pub fn dimension_mismatch(context: &str, expected: usize, got: usize) -> Self {
        LinalgError::DimensionMismatch {
            context: context.to_string(),
            expected,
            got,
        }
    }
}

/// Any error produced by this crate.
///
/// # Examples
/// ```
/// use numerix_core::types::{LinalgError, NumerixError};
///
/// let err: NumerixError = LinalgError::SingularMatrix { column: 0 }.into();
/// assert!(matches!(err, NumerixError::Linalg(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumerixError {
    /// Sampling failure.
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// Linear algebra failure.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SamplingError::invalid_parameter("mean", -2.5, "must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid parameter mean = -2.5: must be non-negative"
        );
    }

    #[test]
    fn test_already_initialised_display() {
        let err = SamplingError::AlreadyInitialised { seed: 2343 };
        assert!(err.to_string().contains("2343"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = LinalgError::dimension_mismatch("rhs length", 4, 3);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: rhs length (expected 4, got 3)"
        );
    }

    #[test]
    fn test_singular_display() {
        let err = LinalgError::SingularMatrix { column: 1 };
        assert_eq!(err.to_string(), "Singular matrix: zero pivot in column 1");
    }

    #[test]
    fn test_non_finite_entry_display() {
        let err = LinalgError::NonFiniteEntry { row: 1, column: 0 };
        assert_eq!(err.to_string(), "Non-finite matrix entry at (1, 0)");
    }

    #[test]
    fn test_umbrella_is_transparent() {
        let inner = LinalgError::SingularMatrix { column: 3 };
        let outer = NumerixError::from(inner.clone());
        assert_eq!(outer.to_string(), inner.to_string());

        let inner = SamplingError::AlreadyInitialised { seed: 7 };
        let outer: NumerixError = inner.clone().into();
        assert_eq!(outer, NumerixError::Sampling(inner));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SamplingError>();
        assert_error::<LinalgError>();
        assert_error::<NumerixError>();
    }
}
