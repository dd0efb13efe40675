//! Dense distance matrix.

use crate::error::MatrixError;

/// A dense n×n matrix of travel costs stored in row-major order.
///
/// Entry `(i, j)` is the cost of travelling from location `i` to
/// location `j`. The matrix is not required to be symmetric. Once built
/// it cannot be modified.
///
/// # Examples
///
/// ```
/// use tsp_anneal::distance::DistanceMatrix;
///
/// let dm: DistanceMatrix = "0 5\n5 0\n".parse().expect("valid matrix");
/// assert_eq!(dm.size(), 2);
/// assert!((dm.cost(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Serialized shape of [`DistanceMatrix`], checked before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let len = raw.data.len();
        DistanceMatrix::from_data(raw.size, raw.data).ok_or(MatrixError::Length {
            size: raw.size,
            len,
        })
    }
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::Ragged {
                    row: i,
                    expected: size,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.cost(i, j) - self.cost(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
