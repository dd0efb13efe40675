//! Annealing schedule configuration.

use crate::error::ConfigError;

/// Which tour a run reports when the loop exits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultPolicy {
    /// The tour the search ends on. Annealing can accept worse moves late
    /// in the run, so this is not necessarily the cheapest tour visited.
    #[default]
    LastAccepted,

    /// The cheapest tour accepted at any point during the run.
    BestSeen,
}

/// Configuration for the annealing optimizer.
///
/// The schedule is geometric: after every pass of the loop
/// `T_{k+1} = cooling_rate * T_k`, and the loop runs while
/// `T > stopping_temperature`.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.95)
///     .with_stopping_temperature(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Multiplicative decay applied once per pass, in (0, 1).
    pub cooling_rate: f64,

    /// The loop stops once the temperature is at or below this value.
    pub stopping_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    pub result_policy: ResultPolicy,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.9999,
            stopping_temperature: 0.00001,
            seed: None,
            result_policy: ResultPolicy::default(),
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_result_policy(mut self, policy: ResultPolicy) -> Self {
        self.result_policy = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.stopping_temperature.is_finite() && self.stopping_temperature > 0.0) {
            return Err(ConfigError::StoppingTemperature(self.stopping_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        if self.stopping_temperature >= self.initial_temperature {
            return Err(ConfigError::StoppingNotBelowInitial {
                stopping: self.stopping_temperature,
                initial: self.initial_temperature,
            });
        }
        Ok(())
    }

    /// Number of loop passes this schedule performs.
    ///
    /// This is the smallest `k` with `T_0 * rate^k <= T_stop`, i.e.
    /// `ceil(ln(T_stop / T_0) / ln(rate))`. Floating-point cooling can
    /// land one pass either side of the closed form when `T_0 * rate^k`
    /// is within rounding of `T_stop`.
    pub fn pass_bound(&self) -> usize {
        let ratio = (self.stopping_temperature / self.initial_temperature).ln();
        (ratio / self.cooling_rate.ln()).ceil().max(0.0) as usize
    }
}
