//! Scalar trait for the dense kernel
//!
//! [`RealField`] abstracts over the real floating-point types the kernel is
//! generic over, so the same elimination code serves `f64` and `f32`.

use ndarray::LinalgScalar;
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types usable in factorization and inversion.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most problems)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + LinalgScalar
    + Send
    + Sync
    + Debug
    + Display
    + 'static
{
    /// Convert from `f64`, saturating to infinity when out of range
    fn from_f64_lossy(v: f64) -> Self;
}

impl RealField for f64 {
    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }
}

impl RealField for f32 {
    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }
}
