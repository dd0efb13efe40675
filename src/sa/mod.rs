//! Simulated Annealing (SA) for the traveling salesman problem.
//!
//! A single-solution trajectory search. Each pass swaps two non-anchor
//! positions of the current tour, accepts the result if it is cheaper
//! or, with probability `exp(-delta / T)`, if it is not, and then cools
//! the temperature geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::{AnnealingConfig, ResultPolicy};
pub use runner::AnnealingOptimizer;
pub use types::{AcceptedMove, AnnealingResult};
