use std::io;

use thiserror::Error;

/// Reasons a digit record could not be read from a corpus.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to read sample: {0}")]
    Io(#[from] io::Error),

    #[error("expected a single digit label line, found {line:?}")]
    MalformedLabel { line: String },

    #[error("first pixel row of a record is empty")]
    EmptyRow,

    #[error("pixel row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("record ended after {found} of {expected} pixel rows")]
    Truncated { expected: usize, found: usize },

    #[error("pixel ({row}, {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },

    #[error("{0} is not a valid shade")]
    InvalidShade(usize),
}

/// Failures of model training, queries and persistence.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model is not trained or has been invalidated")]
    Unset,

    #[error("query out of range: {0}")]
    OutOfRange(String),

    #[error("sample side length {found} does not match model side length {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("smoothing pseudo-count must be finite and positive, got {0}")]
    InvalidSmoothing(f64),

    #[error("malformed model file: {0}")]
    Format(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
