//! Dense LU factorization and matrix inversion
//!
//! This crate provides a small kernel for dense, real, square linear systems.
//!
//! # Features
//!
//! - **LU factorization** with partial pivoting (`P·A = L·U`)
//! - **Triangular solves** reusing the factors for any number of right-hand sides
//! - **Inversion** by factor reuse or by Gauss-Jordan elimination
//! - **Operation counting**: every LU-family result reports its multiplications
//! - **Generic scalar types**: works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_audio_dense::{gauss_jordan_inverse, lu_inverse, lu_solve};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 7.0], [2.0, 6.0]];
//! let b = array![1.0_f64, 0.0];
//!
//! let solution = lu_solve(&a, &b)?;
//! let second = solution.factorization.solve(&array![0.0, 1.0])?;
//! assert!((second.x[0] + 0.7).abs() < 1e-12);
//!
//! let via_lu = lu_inverse(&a)?;
//! let via_gj = gauss_jordan_inverse(&a)?;
//! assert!((via_lu.inverse[[0, 0]] - via_gj[[0, 0]]).abs() < 1e-12);
//! # Ok::<(), math_audio_dense::DenseError>(())
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod ops;
pub mod traits;

// Re-export main types
pub use config::PivotConfig;
pub use error::{DenseError, Result};
pub use traits::RealField;

// Re-export solvers
pub use direct::{
    BlockSubstitution, LuFactorization, LuInverse, LuSolution, Substitution,
    gauss_jordan_inverse, gauss_jordan_inverse_with_config, lu_factorize,
    lu_factorize_with_config, lu_inverse, lu_inverse_with_config, lu_solve,
    lu_solve_with_config,
};
