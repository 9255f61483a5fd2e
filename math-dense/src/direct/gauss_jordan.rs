//! Gauss-Jordan inversion
//!
//! Reduces the augmented matrix `[A | I]` to `[I | A^-1]` with partial
//! pivoting. One-shot: no factors are kept and no operations are counted.

use crate::config::PivotConfig;
use crate::error::{DenseError, Result};
use crate::ops::{check_square, select_pivot};
use crate::traits::RealField;
use ndarray::{Array2, s};

/// Matrix inverse via Gauss-Jordan elimination
pub fn gauss_jordan_inverse<T: RealField>(a: &Array2<T>) -> Result<Array2<T>> {
    gauss_jordan_inverse_with_config(a, &PivotConfig::default())
}

/// [`gauss_jordan_inverse`] with an explicit pivot policy
pub fn gauss_jordan_inverse_with_config<T: RealField>(
    a: &Array2<T>,
    config: &PivotConfig<T>,
) -> Result<Array2<T>> {
    let n = check_square(a)?;
    let width = 2 * n;

    // Augmented matrix [A | I]
    let mut aug: Array2<T> = Array2::zeros((n, width));
    aug.slice_mut(s![.., ..n]).assign(a);
    for i in 0..n {
        aug[[i, n + i]] = T::one();
    }

    for k in 0..n {
        let (max_row, max_val) = select_pivot(&aug, k);

        if config.is_zero_pivot(max_val) {
            return Err(DenseError::SingularMatrix { step: k });
        }

        if max_row != k {
            for j in 0..width {
                let tmp = aug[[k, j]];
                aug[[k, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }

        if config.verbose {
            log::info!(
                "Gauss-Jordan step {}: pivot row {} (|pivot| = {:.6e})",
                k,
                max_row,
                max_val.to_f64().unwrap_or(0.0)
            );
        }

        // Scale the pivot row so the pivot is 1
        let pivot = aug[[k, k]];
        for j in 0..width {
            aug[[k, j]] /= pivot;
        }

        // Clear column k above and below the pivot
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = aug[[i, k]];
            for j in 0..width {
                let update = factor * aug[[k, j]];
                aug[[i, j]] -= update;
            }
        }
    }

    Ok(aug.slice(s![.., n..]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::identity_defect;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_gauss_jordan_2x2() {
        let a = array![[4.0_f64, 7.0], [2.0, 6.0]];
        let inv = gauss_jordan_inverse(&a).expect("inverse should exist");

        let expected = array![[0.6_f64, -0.7], [-0.2, 0.4]];
        for ((i, j), &v) in expected.indexed_iter() {
            assert_relative_eq!(inv[[i, j]], v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gauss_jordan_3x3() {
        let a = array![[1.0_f64, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]];
        let inv = gauss_jordan_inverse(&a).unwrap();

        assert_eq!(inv.dim(), (3, 3));
        assert!(identity_defect(&a, &inv).unwrap() < 1e-10);
        assert_relative_eq!(inv[[0, 0]], -24.0, epsilon = 1e-10);
        assert_relative_eq!(inv[[2, 2]], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_gauss_jordan_needs_pivoting() {
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        let inv = gauss_jordan_inverse(&a).unwrap();
        assert_eq!(inv, array![[0.0, 1.0], [1.0, 0.0]]);
    }

    #[test]
    fn test_gauss_jordan_singular() {
        let a = array![[1.0_f64, 2.0], [0.0, 0.0]];
        assert_eq!(
            gauss_jordan_inverse(&a).unwrap_err(),
            DenseError::SingularMatrix { step: 1 }
        );

        let b = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert!(gauss_jordan_inverse(&b).unwrap_err().is_singular());
    }

    #[test]
    fn test_gauss_jordan_pivot_tolerance() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0 + 1e-14]];
        assert!(gauss_jordan_inverse(&a).is_ok());

        let config = PivotConfig::with_tolerance(1e-10);
        assert_eq!(
            gauss_jordan_inverse_with_config(&a, &config).unwrap_err(),
            DenseError::SingularMatrix { step: 1 }
        );
    }

    #[test]
    fn test_gauss_jordan_negative_tolerance_still_rejects_zero_pivot() {
        let a = array![[1.0_f64, 2.0], [0.0, 0.0]];
        for tol in [-1.0_f64, f64::NAN] {
            let config = PivotConfig {
                pivot_tolerance: tol,
                verbose: false,
            };
            assert_eq!(
                gauss_jordan_inverse_with_config(&a, &config).unwrap_err(),
                DenseError::SingularMatrix { step: 1 }
            );
        }
    }

    #[test]
    fn test_gauss_jordan_pivot_tie() {
        // |1| == |-1| in column 0; the first row is kept as pivot
        let a = array![[1.0_f64, 2.0], [-1.0, 5.0]];
        let inv = gauss_jordan_inverse(&a).unwrap();

        let expected = array![[5.0 / 7.0, -2.0 / 7.0], [1.0 / 7.0, 1.0 / 7.0]];
        for ((i, j), &v) in expected.indexed_iter() {
            assert_relative_eq!(inv[[i, j]], v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gauss_jordan_not_square() {
        let a = Array2::<f64>::zeros((3, 2));
        assert_eq!(
            gauss_jordan_inverse(&a).unwrap_err(),
            DenseError::NotSquare { rows: 3, cols: 2 }
        );
    }

    #[test]
    fn test_gauss_jordan_input_not_modified() {
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let copy = a.clone();
        let _ = gauss_jordan_inverse(&a).unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn test_gauss_jordan_f32() {
        let a = array![[2.0_f32, 0.0], [0.0, 8.0]];
        let inv = gauss_jordan_inverse(&a).unwrap();
        assert_relative_eq!(inv[[0, 0]], 0.5_f32);
        assert_relative_eq!(inv[[1, 1]], 0.125_f32);
    }
}
