//! LU decomposition solver
//!
//! Provides LU factorization with partial pivoting for dense square systems,
//! and the forward/backward substitution that reuses the factors for any
//! number of right-hand sides. Every product formed during elimination and
//! substitution is counted and returned with the result.

use crate::config::PivotConfig;
use crate::error::{DenseError, Result};
use crate::ops::{check_square, select_pivot};
use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1};

/// LU factorization result
///
/// Stores `L` (unit lower triangular), `U` (upper triangular) and the row
/// permutation such that `P·A = L·U`. Values are only produced by
/// [`lu_factorize`], so every diagonal entry of `U` is an accepted pivot.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    l: Array2<T>,
    u: Array2<T>,
    /// `perm[i]` is the original row now in position `i`
    perm: Vec<usize>,
    n: usize,
    row_swaps: usize,
    multiplications: usize,
}

/// Result of one forward/backward substitution
#[derive(Debug, Clone)]
pub struct Substitution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Multiplications performed by this solve only
    pub multiplications: usize,
}

/// Solutions for a block of right-hand sides, one per column
#[derive(Debug, Clone)]
pub struct BlockSubstitution<T: RealField> {
    /// Solution matrix (column `k` solves column `k` of the input)
    pub x: Array2<T>,
    /// Multiplications summed over all columns
    pub multiplications: usize,
}

/// Result of [`lu_solve`]
#[derive(Debug, Clone)]
pub struct LuSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Factors, reusable for further right-hand sides
    pub factorization: LuFactorization<T>,
    /// Elimination plus substitution multiplications
    pub multiplications: usize,
}

impl<T: RealField> LuFactorization<T> {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Unit lower triangular factor
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// Upper triangular factor
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// Row permutation applied by pivoting
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Multiplications spent during elimination
    pub fn multiplications(&self) -> usize {
        self.multiplications
    }

    /// Solve Ax = b using the pre-computed factors
    pub fn solve(&self, b: &Array1<T>) -> Result<Substitution<T>> {
        if b.len() != self.n {
            return Err(DenseError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }
        Ok(self.substitute(b.view()))
    }

    /// Solve AX = B for every column of `rhs`
    pub fn solve_many(&self, rhs: &Array2<T>) -> Result<BlockSubstitution<T>> {
        if rhs.nrows() != self.n {
            return Err(DenseError::DimensionMismatch {
                expected: self.n,
                got: rhs.nrows(),
            });
        }

        let mut x: Array2<T> = Array2::zeros((self.n, rhs.ncols()));
        let mut multiplications = 0;
        for (k, b) in rhs.columns().into_iter().enumerate() {
            let column = self.substitute(b);
            x.column_mut(k).assign(&column.x);
            multiplications += column.multiplications;
        }

        Ok(BlockSubstitution { x, multiplications })
    }

    /// Determinant of the factored matrix
    pub fn determinant(&self) -> T {
        let mut det = if self.row_swaps % 2 == 0 {
            T::one()
        } else {
            -T::one()
        };
        for i in 0..self.n {
            det *= self.u[[i, i]];
        }
        det
    }

    /// The product `L·U`
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.u)
    }

    /// Apply the pivoting permutation to the rows of `a`, giving `P·A`
    pub fn permute_rows(&self, a: &Array2<T>) -> Result<Array2<T>> {
        let n = check_square(a)?;
        if n != self.n {
            return Err(DenseError::DimensionMismatch {
                expected: self.n,
                got: n,
            });
        }

        let mut pa: Array2<T> = Array2::zeros((n, n));
        for (i, &p) in self.perm.iter().enumerate() {
            pa.row_mut(i).assign(&a.row(p));
        }
        Ok(pa)
    }

    fn substitute(&self, b: ArrayView1<'_, T>) -> Substitution<T> {
        let n = self.n;
        let mut multiplications = 0;

        // Pb
        let pb: Array1<T> = self.perm.iter().map(|&p| b[p]).collect();

        // Forward substitution: Ly = Pb (unit diagonal)
        let mut y: Array1<T> = Array1::zeros(n);
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..i {
                sum += self.l[[i, j]] * y[j];
                multiplications += 1;
            }
            y[i] = pb[i] - sum;
        }

        // Backward substitution: Ux = y
        let mut x: Array1<T> = Array1::zeros(n);
        for i in (0..n).rev() {
            let mut sum = T::zero();
            for j in (i + 1)..n {
                sum += self.u[[i, j]] * x[j];
                multiplications += 1;
            }
            x[i] = (y[i] - sum) / self.u[[i, i]];
        }

        Substitution { x, multiplications }
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize<T: RealField>(a: &Array2<T>) -> Result<LuFactorization<T>> {
    lu_factorize_with_config(a, &PivotConfig::default())
}

/// Compute LU factorization with partial pivoting and an explicit pivot policy
///
/// The input is never modified; elimination runs on a private copy.
pub fn lu_factorize_with_config<T: RealField>(
    a: &Array2<T>,
    config: &PivotConfig<T>,
) -> Result<LuFactorization<T>> {
    let n = check_square(a)?;

    let mut u = a.clone();
    let mut l: Array2<T> = Array2::eye(n);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut row_swaps = 0;
    let mut multiplications = 0;

    for k in 0..n {
        let (max_row, max_val) = select_pivot(&u, k);

        if config.is_zero_pivot(max_val) {
            return Err(DenseError::SingularMatrix { step: k });
        }

        if max_row != k {
            for j in 0..n {
                let tmp = u[[k, j]];
                u[[k, j]] = u[[max_row, j]];
                u[[max_row, j]] = tmp;
            }
            // Only the multipliers already stored move with the row
            for j in 0..k {
                let tmp = l[[k, j]];
                l[[k, j]] = l[[max_row, j]];
                l[[max_row, j]] = tmp;
            }
            perm.swap(k, max_row);
            row_swaps += 1;
        }

        if config.verbose {
            log::info!(
                "LU step {}: pivot row {} (|pivot| = {:.6e})",
                k,
                max_row,
                max_val.to_f64().unwrap_or(0.0)
            );
        }

        // Compute multipliers and eliminate
        let pivot = u[[k, k]];
        for i in (k + 1)..n {
            let mult = u[[i, k]] / pivot;
            l[[i, k]] = mult;

            for j in k..n {
                let update = mult * u[[k, j]];
                u[[i, j]] -= update;
                multiplications += 1;
            }
            u[[i, k]] = T::zero();
        }
    }

    log::debug!(
        "LU factorization of {}x{} matrix: {} row swaps, {} multiplications",
        n,
        n,
        row_swaps,
        multiplications
    );

    Ok(LuFactorization {
        l,
        u,
        perm,
        n,
        row_swaps,
        multiplications,
    })
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve, and
/// hands back the factors for later right-hand sides.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<LuSolution<T>> {
    lu_solve_with_config(a, b, &PivotConfig::default())
}

/// [`lu_solve`] with an explicit pivot policy
pub fn lu_solve_with_config<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &PivotConfig<T>,
) -> Result<LuSolution<T>> {
    let n = check_square(a)?;
    if b.len() != n {
        return Err(DenseError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let factorization = lu_factorize_with_config(a, config)?;
    let solution = factorization.solve(b)?;
    let multiplications = factorization.multiplications + solution.multiplications;

    Ok(LuSolution {
        x: solution.x,
        factorization,
        multiplications,
    })
}
