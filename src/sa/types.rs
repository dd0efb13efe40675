//! Run state, results and trace records.

use super::config::ResultPolicy;

/// Mutable state of one annealing run.
#[derive(Debug, Clone)]
pub(crate) struct AnnealingState {
    pub temperature: f64,
    pub tour: Vec<usize>,
    pub cost: f64,
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    /// Cheapest accepted tour so far, kept only under [`ResultPolicy::BestSeen`].
    pub best: Option<(Vec<usize>, f64)>,
}

impl AnnealingState {
    pub fn new(tour: Vec<usize>, cost: f64, temperature: f64, policy: ResultPolicy) -> Self {
        let best = match policy {
            ResultPolicy::BestSeen => Some((tour.clone(), cost)),
            ResultPolicy::LastAccepted => None,
        };
        Self {
            temperature,
            tour,
            cost,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            best,
        }
    }

    /// Replaces the current tour with an accepted candidate.
    pub fn accept(&mut self, candidate: Vec<usize>, delta: f64) {
        self.tour = candidate;
        self.cost += delta;
        self.accepted_moves += 1;
        if delta < 0.0 {
            self.improving_moves += 1;
        }
        if let Some((best_tour, best_cost)) = &mut self.best {
            if self.cost < *best_cost {
                best_tour.clone_from(&self.tour);
                *best_cost = self.cost;
            }
        }
    }

    pub fn into_result(self) -> AnnealingResult {
        let (tour, cost) = match self.best {
            Some(best) => best,
            None => (self.tour, self.cost),
        };
        AnnealingResult {
            tour,
            cost,
            iterations: self.iterations,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            final_temperature: self.temperature,
        }
    }
}

/// Result of an annealing run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingResult {
    /// The reported tour, starting at the anchor location.
    pub tour: Vec<usize>,

    /// Cost of the reported tour, including the edge back to the start.
    pub cost: f64,

    /// Number of loop passes (neighbor evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,
}

/// One accepted move, as handed to a trace callback.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedMove {
    /// Zero-based loop pass in which the move was accepted.
    pub iteration: usize,

    /// One-based count of accepted moves so far.
    pub accepted: usize,

    /// Tour after the move.
    pub tour: Vec<usize>,

    /// Cost after the move.
    pub cost: f64,

    /// Cost change of the move.
    pub delta: f64,

    /// Temperature the move was judged at.
    pub temperature: f64,

    /// Uniform draw compared against `exp(-delta / temperature)`, or
    /// `None` for strict improvements.
    pub draw: Option<f64>,
}
