use thiserror::Error;

/// Errors returned by clustering algorithms in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Dissimilarity matrix is not square.
    #[error("dissimilarity matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Weight matrix shape does not match the dissimilarity matrix.
    #[error("dimension mismatch: dissimilarity matrix is {expected:?}, weight matrix is {found:?}")]
    DimensionMismatch {
        /// Shape of the dissimilarity matrix.
        expected: (usize, usize),
        /// Shape of the weight matrix.
        found: (usize, usize),
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
