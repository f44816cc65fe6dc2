//! LU decomposition configuration.

use num_traits::Float;

/// Configuration for [`LuDecomposition`](super::LuDecomposition).
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numerix_core::math::linalg::LuConfig;
///
/// // Default: only an exactly zero pivot is singular
/// let config: LuConfig<f64> = LuConfig::default();
/// assert_eq!(config.singular_tolerance, 0.0);
///
/// // Treat pivots at or below machine epsilon as singular
/// let strict: LuConfig<f64> = LuConfig::strict();
/// assert_eq!(strict.singular_tolerance, f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuConfig<T: Float> {
    /// Largest absolute pivot value still treated as zero.
    ///
    /// Factorisation fails with `LinalgError::SingularMatrix` when the
    /// selected pivot satisfies `|pivot| <= singular_tolerance`.
    pub singular_tolerance: T,
}

impl<T: Float> Default for LuConfig<T> {
    /// Exact-zero singularity check (`singular_tolerance = 0`).
    fn default() -> Self {
        Self {
            singular_tolerance: T::zero(),
        }
    }
}

impl<T: Float> LuConfig<T> {
    /// Create a configuration with the given tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `singular_tolerance` is negative or NaN.
    pub fn new(singular_tolerance: T) -> Self {
        assert!(
            singular_tolerance >= T::zero(),
            "singular_tolerance must be non-negative"
        );
        Self { singular_tolerance }
    }

    /// Same as [`LuConfig::default`].
    pub fn exact() -> Self {
        Self::default()
    }

    /// Rejects pivots no larger than machine epsilon.
    pub fn strict() -> Self {
        Self {
            singular_tolerance: T::epsilon(),
        }
    }
}
