//! Matrix inversion by LU factor reuse
//!
//! Factors once while solving for the first basis vector, then reuses the
//! factors for the remaining columns of the inverse.

use super::lu::lu_solve_with_config;
use crate::config::PivotConfig;
use crate::error::Result;
use crate::ops::{check_square, unit_vector};
use crate::traits::RealField;
use ndarray::Array2;

/// Inverse computed through LU factor reuse
#[derive(Debug, Clone)]
pub struct LuInverse<T: RealField> {
    /// The inverse matrix (column `k` solves `A x = e_k`)
    pub inverse: Array2<T>,
    /// One factorization plus all `n` substitutions
    pub multiplications: usize,
}

/// Invert `a` by factoring once and solving against each basis vector
pub fn lu_inverse<T: RealField>(a: &Array2<T>) -> Result<LuInverse<T>> {
    lu_inverse_with_config(a, &PivotConfig::default())
}

/// [`lu_inverse`] with an explicit pivot policy
pub fn lu_inverse_with_config<T: RealField>(
    a: &Array2<T>,
    config: &PivotConfig<T>,
) -> Result<LuInverse<T>> {
    let n = check_square(a)?;

    let mut inverse: Array2<T> = Array2::zeros((n, n));

    // First column factors the matrix
    let first = lu_solve_with_config(a, &unit_vector(n, 0), config)?;
    inverse.column_mut(0).assign(&first.x);
    let mut multiplications = first.multiplications;

    // Remaining columns reuse the factors
    for k in 1..n {
        let column = first.factorization.solve(&unit_vector(n, k))?;
        inverse.column_mut(k).assign(&column.x);
        multiplications += column.multiplications;
    }

    log::debug!(
        "LU inverse of {}x{} matrix: {} multiplications",
        n,
        n,
        multiplications
    );

    Ok(LuInverse {
        inverse,
        multiplications,
    })
}
