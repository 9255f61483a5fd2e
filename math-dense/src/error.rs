//! Error types for dense factorization and inversion.
//!
//! Singularity is the only numerical failure. Everything else is a shape
//! problem with the caller's input, grouped under
//! [`DenseError::is_dimension_error`].

use thiserror::Error;

/// Errors that can occur while factoring, solving or inverting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DenseError {
    /// The selected pivot is zero (or within the configured tolerance).
    #[error("matrix is singular: zero pivot at elimination step {step}")]
    SingularMatrix {
        /// Pivot column at which elimination stopped
        step: usize,
    },

    /// The matrix has no rows.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// The matrix is not square.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A row of row-wise input has the wrong number of entries.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Expected entries per row
        expected: usize,
        /// Entries actually found
        got: usize,
    },

    /// A right-hand side does not match the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Matrix dimension
        expected: usize,
        /// Length provided
        got: usize,
    },
}

/// A specialized `Result` type for dense kernel operations.
pub type Result<T> = std::result::Result<T, DenseError>;

impl DenseError {
    /// Returns `true` if elimination hit a zero pivot.
    pub fn is_singular(&self) -> bool {
        matches!(self, DenseError::SingularMatrix { .. })
    }

    /// Returns `true` if the input had invalid dimensions.
    ///
    /// This includes `EmptyMatrix`, `NotSquare`, `RaggedRow` and
    /// `DimensionMismatch`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            DenseError::EmptyMatrix
                | DenseError::NotSquare { .. }
                | DenseError::RaggedRow { .. }
                | DenseError::DimensionMismatch { .. }
        )
    }
}
