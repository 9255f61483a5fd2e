//! Dense matrix and vector helpers
//!
//! Boundary validation for caller-supplied matrices, standard basis vectors
//! and the residual measures used to verify solutions.

use crate::error::{DenseError, Result};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Build a square matrix from row-wise input.
///
/// Every row must have exactly as many entries as there are rows.
pub fn from_rows<T: RealField>(rows: &[Vec<T>]) -> Result<Array2<T>> {
    let n = rows.len();
    if n == 0 {
        return Err(DenseError::EmptyMatrix);
    }

    let mut a = Array2::zeros((n, n));
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(DenseError::RaggedRow {
                row: i,
                expected: n,
                got: row.len(),
            });
        }
        for (j, &v) in row.iter().enumerate() {
            a[[i, j]] = v;
        }
    }
    Ok(a)
}

/// Check that `a` is a non-empty square matrix and return its dimension
pub fn check_square<T>(a: &Array2<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows == 0 {
        return Err(DenseError::EmptyMatrix);
    }
    if rows != cols {
        return Err(DenseError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Partial pivot search in column `k` over rows `k..`
///
/// Returns the row holding the largest magnitude (the first one on ties) and
/// that magnitude. Rows are positions in the current row order of `m`.
pub(crate) fn select_pivot<T: RealField>(m: &Array2<T>, k: usize) -> (usize, T) {
    let mut max_val = m[[k, k]].abs();
    let mut max_row = k;
    for i in (k + 1)..m.nrows() {
        let val = m[[i, k]].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }
    (max_row, max_val)
}

/// Standard basis vector `e_k` of length `n`
pub fn unit_vector<T: RealField>(n: usize, k: usize) -> Array1<T> {
    let mut e = Array1::zeros(n);
    e[k] = T::one();
    e
}

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: RealField>(x: &Array1<T>) -> T {
    x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).sqrt()
}

/// Residual norm ||A x - b||_2
pub fn residual_norm<T: RealField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Result<T> {
    let n = check_square(a)?;
    for len in [x.len(), b.len()] {
        if len != n {
            return Err(DenseError::DimensionMismatch {
                expected: n,
                got: len,
            });
        }
    }
    let r = a.dot(x) - b;
    Ok(vector_norm(&r))
}

/// Largest absolute entry of `A * A_inv - I`
pub fn identity_defect<T: RealField>(a: &Array2<T>, a_inv: &Array2<T>) -> Result<T> {
    let n = check_square(a)?;
    let m = check_square(a_inv)?;
    if m != n {
        return Err(DenseError::DimensionMismatch {
            expected: n,
            got: m,
        });
    }
    let product = a.dot(a_inv);
    let mut worst = T::zero();
    for ((i, j), &v) in product.indexed_iter() {
        let target = if i == j { T::one() } else { T::zero() };
        worst = worst.max((v - target).abs());
    }
    Ok(worst)
}
