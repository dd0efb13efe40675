//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use super::config::AnnealingConfig;
use super::types::{AcceptedMove, AnnealingResult, AnnealingState};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::tour::{swap_neighbor, tour_cost};

/// Simulated annealing over tours of a distance matrix.
///
/// The random source is injected at construction so that runs can be
/// reproduced. [`AnnealingOptimizer::new`] builds a [`StdRng`] from
/// [`AnnealingConfig::seed`], or from entropy when no seed is set.
///
/// # Examples
///
/// ```
/// use tsp_anneal::distance::DistanceMatrix;
/// use tsp_anneal::sa::{AnnealingConfig, AnnealingOptimizer};
///
/// let matrix: DistanceMatrix = "0 1 2\n1 0 4\n2 4 0".parse().unwrap();
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.95)
///     .with_stopping_temperature(0.01)
///     .with_seed(42);
///
/// let mut optimizer = AnnealingOptimizer::new(config).unwrap();
/// optimizer.load(matrix);
/// let result = optimizer.run().unwrap();
/// assert_eq!(result.tour[0], 0);
/// assert!((result.cost - 7.0).abs() < 1e-9);
/// ```
pub struct AnnealingOptimizer<R: Rng = StdRng> {
    config: AnnealingConfig,
    rng: R,
    matrix: Option<DistanceMatrix>,
    tour: Vec<usize>,
}

impl AnnealingOptimizer<StdRng> {
    /// Creates an optimizer seeded from the configuration.
    pub fn new(config: AnnealingConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> AnnealingOptimizer<R> {
    /// Creates an optimizer drawing from the given random source.
    ///
    /// The configuration is validated here, so a bad schedule never
    /// reaches [`run`](Self::run).
    pub fn with_rng(config: AnnealingConfig, rng: R) -> Result<Self> {
        config.validate()?;
        debug!(?config, "Annealing configuration accepted");
        Ok(Self {
            config,
            rng,
            matrix: None,
            tour: Vec::new(),
        })
    }

    /// Binds a matrix and resets the tour to `[0, 1, ..., n-1]`.
    pub fn load(&mut self, matrix: DistanceMatrix) {
        self.tour = (0..matrix.size()).collect();
        self.matrix = Some(matrix);
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Current tour. After a run this is the tour the search ended on.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Runs the annealing loop from the current tour.
    pub fn run(&mut self) -> Result<AnnealingResult> {
        self.run_inner(None)
    }

    /// Runs the annealing loop, calling `on_accept` after every accepted move.
    pub fn run_with_trace<F>(&mut self, mut on_accept: F) -> Result<AnnealingResult>
    where
        F: FnMut(&AcceptedMove),
    {
        self.run_inner(Some(&mut on_accept))
    }

    fn run_inner(
        &mut self,
        mut on_accept: Option<&mut dyn FnMut(&AcceptedMove)>,
    ) -> Result<AnnealingResult> {
        let matrix = self.matrix.as_ref().ok_or(Error::NotLoaded)?;
        let config = &self.config;

        let initial_cost = tour_cost(matrix, &self.tour);
        let mut state = AnnealingState::new(
            self.tour.clone(),
            initial_cost,
            config.initial_temperature,
            config.result_policy,
        );

        if matrix.size() < 2 {
            warn!(
                locations = matrix.size(),
                "Fewer than two locations, nothing to anneal"
            );
            return Ok(state.into_result());
        }

        info!(
            locations = matrix.size(),
            initial_cost,
            passes = config.pass_bound(),
            "Starting annealing"
        );

        while state.temperature > config.stopping_temperature {
            let candidate = swap_neighbor(&state.tour, &mut self.rng);
            let delta = tour_cost(matrix, &candidate) - state.cost;

            // Metropolis criterion; a zero-cost tour only moves downhill.
            let (accept, draw) = if delta < 0.0 {
                (true, None)
            } else if state.cost > 0.0 {
                let r: f64 = self.rng.random();
                ((-delta / state.temperature).exp() > r, Some(r))
            } else {
                (false, None)
            };

            if accept {
                state.accept(candidate, delta);
                trace!(
                    iteration = state.iterations,
                    cost = state.cost,
                    delta,
                    tour = ?state.tour,
                    "Accepted move"
                );
                if let Some(callback) = on_accept.as_deref_mut() {
                    callback(&AcceptedMove {
                        iteration: state.iterations,
                        accepted: state.accepted_moves,
                        tour: state.tour.clone(),
                        cost: state.cost,
                        delta,
                        temperature: state.temperature,
                        draw,
                    });
                }
            }

            state.temperature *= config.cooling_rate;
            state.iterations += 1;
        }

        self.tour.clone_from(&state.tour);
        let result = state.into_result();

        info!(
            cost = result.cost,
            iterations = result.iterations,
            accepted = result.accepted_moves,
            improving = result.improving_moves,
            "Annealing finished"
        );
        Ok(result)
    }
}
