//! Distance matrices.
//!
//! A dense, immutable matrix of pairwise travel costs plus a reader for
//! the whitespace-separated text format.

mod matrix;
mod parse;

pub use matrix::DistanceMatrix;
