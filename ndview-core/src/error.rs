use thiserror::Error;

/// Custom error type for the NdView core.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NdViewError {
    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Rank mismatch: expected {expected} indices, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Empty input: {operation} requires at least one element")]
    EmptyInput { operation: String },

    #[error("Invalid quantile: q = {q}, must lie within [0, 1]")]
    InvalidQuantile { q: f64 },

    #[error("Unknown quantile method: {name:?}")]
    UnknownQuantileMethod { name: String },

    #[error("Invalid tolerance: {message}")]
    InvalidTolerance { message: String },

    #[error("Invalid ddof: ddof {ddof} leaves no degrees of freedom for {len} element(s)")]
    InvalidDdof { ddof: usize, len: usize },

    #[error("Internal error: {0}")]
    InternalError(String),
    // Add more specific errors as needed
}
