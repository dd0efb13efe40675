//! Text format reader.
//!
//! One row per location, each row a whitespace-separated list of real
//! costs. Blank lines are skipped, so a trailing newline does not add a
//! location. Row and column numbers in errors are zero-based.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use super::DistanceMatrix;
use crate::error::{Error, MatrixError, Result};

impl FromStr for DistanceMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len();
            let values = line
                .split_whitespace()
                .enumerate()
                .map(|(column, token)| parse_cost(row, column, token))
                .collect::<std::result::Result<Vec<f64>, _>>()?;

            if let Some(first) = rows.first() {
                if values.len() != first.len() {
                    return Err(MatrixError::Ragged {
                        row,
                        expected: first.len(),
                        found: values.len(),
                    });
                }
            }
            rows.push(values);
        }

        let columns = match rows.first() {
            Some(first) => first.len(),
            None => return Err(MatrixError::Empty),
        };
        if columns != rows.len() {
            return Err(MatrixError::NotSquare {
                rows: rows.len(),
                columns,
            });
        }

        DistanceMatrix::from_rows(&rows)
    }
}

fn parse_cost(row: usize, column: usize, token: &str) -> std::result::Result<f64, MatrixError> {
    let value: f64 = token.parse().map_err(|_| MatrixError::InvalidNumber {
        row,
        column,
        token: token.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(MatrixError::InvalidCost { row, column, value });
    }
    Ok(value)
}

impl DistanceMatrix {
    /// Reads a matrix from a text file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let matrix: DistanceMatrix = text.parse()?;

        debug!(
            "Loaded {}x{} distance matrix from {}",
            matrix.size(),
            matrix.size(),
            path.display()
        );
        if !matrix.is_symmetric(1e-9) {
            warn!("Distance matrix in {} is not symmetric", path.display());
        }
        Ok(matrix)
    }
}
