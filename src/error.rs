//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Problems found while reading a distance matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The input contained no non-blank rows.
    #[error("distance matrix is empty")]
    Empty,

    /// A token could not be parsed as a real number.
    #[error("row {row}, column {column}: `{token}` is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        token: String,
    },

    /// A row has a different number of entries than the first row.
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row count and column count differ.
    #[error("distance matrix has {rows} rows but {columns} columns")]
    NotSquare { rows: usize, columns: usize },

    /// Serialized data does not hold `size * size` entries.
    #[error("{len} entries cannot fill a {size}x{size} distance matrix")]
    Length { size: usize, len: usize },

    /// A cost was negative, NaN or infinite.
    #[error("row {row}, column {column}: cost {value} must be finite and non-negative")]
    InvalidCost { row: usize, column: usize, value: f64 },
}

/// Rejected annealing schedules.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive and finite, got {0}")]
    InitialTemperature(f64),

    #[error("stopping_temperature must be positive and finite, got {0}")]
    StoppingTemperature(f64),

    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    /// The loop would not execute a single pass.
    #[error("stopping_temperature ({stopping}) must be less than initial_temperature ({initial})")]
    StoppingNotBelowInitial { stopping: f64, initial: f64 },
}

/// Crate-level error.
///
/// Each variant's message names the failed step; the underlying cause is
/// available through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid distance matrix")]
    DataFormat(#[from] MatrixError),

    #[error("invalid annealing configuration")]
    Configuration(#[from] ConfigError),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `run` was called before a matrix was loaded.
    #[error("no distance matrix loaded")]
    NotLoaded,
}

pub type Result<T> = std::result::Result<T, Error>;
