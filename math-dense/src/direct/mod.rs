//! Direct solvers for dense linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`lu_factorize`] / [`LuFactorization::solve`]: LU decomposition with
//!   partial pivoting and reusable triangular solves
//! - [`lu_solve`]: factor and solve in one call
//! - [`lu_inverse`]: inverse by factor reuse
//! - [`gauss_jordan_inverse`]: inverse by augmented-matrix elimination

mod gauss_jordan;
mod inverse;
mod lu;

pub use gauss_jordan::{gauss_jordan_inverse, gauss_jordan_inverse_with_config};
pub use inverse::{LuInverse, lu_inverse, lu_inverse_with_config};
pub use lu::{
    BlockSubstitution, LuFactorization, LuSolution, Substitution, lu_factorize,
    lu_factorize_with_config, lu_solve, lu_solve_with_config,
};
