//! Pivoting configuration shared by the LU and Gauss-Jordan engines

use crate::traits::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for partial-pivoting elimination
///
/// The default tolerance is exactly zero: a pivot is rejected only when its
/// magnitude is `0.0`. Raising the tolerance makes near-zero pivots fail with
/// [`DenseError::SingularMatrix`](crate::DenseError::SingularMatrix) as well.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PivotConfig<R> {
    /// Largest pivot magnitude still treated as zero
    pub pivot_tolerance: R,
    /// Log the chosen pivot of every elimination step
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbose: bool,
}

impl<R: RealField> Default for PivotConfig<R> {
    fn default() -> Self {
        Self {
            pivot_tolerance: R::zero(),
            verbose: false,
        }
    }
}

impl<R: RealField> PivotConfig<R> {
    /// Configuration rejecting pivots with `|pivot| <= tolerance`.
    ///
    /// Negative or NaN tolerances are clamped to zero.
    pub fn with_tolerance(tolerance: f64) -> Self {
        let tol = if tolerance > 0.0 { tolerance } else { 0.0 };
        Self {
            pivot_tolerance: R::from_f64_lossy(tol),
            ..Self::default()
        }
    }

    /// Enable or disable per-step logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Whether `magnitude` is too small to pivot on
    ///
    /// A negative or NaN `pivot_tolerance` counts as zero, so an exactly
    /// zero pivot is always rejected.
    #[inline]
    pub(crate) fn is_zero_pivot(&self, magnitude: R) -> bool {
        let tol = if self.pivot_tolerance > R::zero() {
            self.pivot_tolerance
        } else {
            R::zero()
        };
        magnitude <= tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact_zero() {
        let config = PivotConfig::<f64>::default();
        assert_eq!(config.pivot_tolerance, 0.0);
        assert!(!config.verbose);
        assert!(config.is_zero_pivot(0.0));
        assert!(!config.is_zero_pivot(1e-300));
    }

    #[test]
    fn test_with_tolerance() {
        let config = PivotConfig::<f64>::with_tolerance(1e-12).verbose(true);
        assert!(config.verbose);
        assert!(config.is_zero_pivot(5e-13));
        assert!(!config.is_zero_pivot(1e-11));
    }

    #[test]
    fn test_negative_tolerance_clamped() {
        let config = PivotConfig::<f32>::with_tolerance(-1.0);
        assert_eq!(config.pivot_tolerance, 0.0);

        let config = PivotConfig::<f32>::with_tolerance(f64::NAN);
        assert_eq!(config.pivot_tolerance, 0.0);
    }

    #[test]
    fn test_zero_pivot_rejected_for_any_tolerance() {
        for tol in [-1.0_f64, f64::NAN, f64::NEG_INFINITY] {
            let config = PivotConfig {
                pivot_tolerance: tol,
                verbose: false,
            };
            assert!(config.is_zero_pivot(0.0), "tolerance {}", tol);
            assert!(!config.is_zero_pivot(1e-300), "tolerance {}", tol);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_without_verbose() {
        let config: PivotConfig<f64> =
            serde_json::from_str(r#"{"pivot_tolerance": 1e-12}"#).unwrap();
        assert_eq!(config.pivot_tolerance, 1e-12);
        assert!(!config.verbose);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_negative_tolerance_rejects_zero() {
        let config: PivotConfig<f64> =
            serde_json::from_str(r#"{"pivot_tolerance": -1.0}"#).unwrap();
        assert!(config.is_zero_pivot(0.0));
    }
}
