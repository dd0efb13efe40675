//! Traveling salesman tours by simulated annealing.
//!
//! - **Distance** ([`distance`]): dense, immutable cost matrix and its
//!   whitespace-separated text format.
//! - **Tour** ([`tour`]): cyclic tour cost, the two-position swap move
//!   and location labels.
//! - **Simulated Annealing** ([`sa`]): the optimizer with a geometric
//!   cooling schedule and Metropolis acceptance.
//! - **Report** ([`report`]): plain-text summary of a run.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::distance::DistanceMatrix;
//! use tsp_anneal::sa::{AnnealingConfig, AnnealingOptimizer};
//!
//! # fn main() -> tsp_anneal::Result<()> {
//! let matrix: DistanceMatrix = "0 1 2 3\n1 0 4 5\n2 4 0 6\n3 5 6 0".parse()?;
//! let config = AnnealingConfig::default()
//!     .with_initial_temperature(1000.0)
//!     .with_cooling_rate(0.95)
//!     .with_stopping_temperature(0.01)
//!     .with_seed(7);
//!
//! let mut optimizer = AnnealingOptimizer::new(config)?;
//! optimizer.load(matrix);
//! let result = optimizer.run()?;
//! assert_eq!(result.tour[0], 0);
//! # Ok(())
//! # }
//! ```

pub mod distance;
pub mod error;
pub mod report;
pub mod sa;
pub mod tour;

pub use error::{ConfigError, Error, MatrixError, Result};
