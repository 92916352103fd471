//! Error types for the macroprep library.

use thiserror::Error;

/// Result type alias for preparation operations.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Errors that can occur while renaming or transforming macro series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrepError {
    /// Series identifier is not present in the name mapper.
    #[error("unknown series identifier: {0}")]
    UnknownIdentifier(String),

    /// Series name is not present in the transform table or frame.
    #[error("unknown series: {0}")]
    UnknownSeries(String),

    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Two columns of a frame share a label.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// A log-based transform received a value outside its domain.
    #[error("non-positive input at index {index}: {value}")]
    NonPositiveInput { index: usize, value: f64 },

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}
