//! Plain-text summary of a finished run.

use std::fmt;

use crate::sa::{AnnealingConfig, AnnealingResult};
use crate::tour::LabelStyle;

/// Formats an [`AnnealingResult`] for people.
///
/// ```
/// use tsp_anneal::report::Report;
/// use tsp_anneal::sa::{AnnealingConfig, AnnealingResult};
/// use tsp_anneal::tour::LabelStyle;
///
/// let result = AnnealingResult {
///     tour: vec![0, 2, 1],
///     cost: 1.0,
///     iterations: 10,
///     accepted_moves: 4,
///     improving_moves: 1,
///     final_temperature: 0.5,
/// };
/// let config = AnnealingConfig::default();
/// let text = Report::new(&result, &config).with_labels(LabelStyle::Letters).to_string();
/// assert!(text.starts_with("Route: A -> C -> B -> A\nCost: 1 mile\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Report<'a> {
    result: &'a AnnealingResult,
    config: &'a AnnealingConfig,
    labels: LabelStyle,
    unit: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnnealingResult, config: &'a AnnealingConfig) -> Self {
        Self {
            result,
            config,
            labels: LabelStyle::default(),
            unit: "mile",
        }
    }

    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }

    /// Singular unit name; an `s` is appended unless the printed cost is 1.
    pub fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    /// The route as labels, closed back on the start location.
    pub fn route(&self) -> String {
        let tour = &self.result.tour;
        let mut names: Vec<String> = tour.iter().map(|&i| self.labels.label(i)).collect();
        if let Some(&start) = tour.first() {
            if tour.len() > 1 {
                names.push(self.labels.label(start));
            }
        }
        names.join(" -> ")
    }
}

/// Six decimals. Run costs are accumulated from deltas.
fn rounded(cost: f64) -> f64 {
    (cost * 1e6).round() / 1e6
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cost = rounded(self.result.cost);
        let plural = if cost == 1.0 { "" } else { "s" };

        writeln!(f, "Route: {}", self.route())?;
        writeln!(f, "Cost: {} {}{}", cost, self.unit, plural)?;
        writeln!(
            f,
            "Iterations: {} (accepted {})",
            self.result.iterations, self.result.accepted_moves
        )?;
        write!(
            f,
            "Schedule: initial temperature {}, cooling rate {}, stopping temperature {}",
            self.config.initial_temperature,
            self.config.cooling_rate,
            self.config.stopping_temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(tour: Vec<usize>, cost: f64) -> AnnealingResult {
        AnnealingResult {
            tour,
            cost,
            iterations: 180,
            accepted_moves: 97,
            improving_moves: 12,
            final_temperature: 0.009,
        }
    }

    fn config() -> AnnealingConfig {
        AnnealingConfig::default()
            .with_initial_temperature(1000.0)
            .with_cooling_rate(0.95)
            .with_stopping_temperature(0.01)
    }

    #[test]
    fn test_full_report() {
        let result = result(vec![0, 2, 1, 3], 12.0);
        let config = config();
        let text = Report::new(&result, &config).to_string();
        assert_eq!(
            text,
            "Route: A -> C -> B -> D -> A\n\
             Cost: 12 miles\n\
             Iterations: 180 (accepted 97)\n\
             Schedule: initial temperature 1000, cooling rate 0.95, stopping temperature 0.01"
        );
    }

    #[test]
    fn test_index_labels_and_unit() {
        let result = result(vec![0, 1], 2.5);
        let config = config();
        let report = Report::new(&result, &config)
            .with_labels(LabelStyle::Indices)
            .with_unit("km");
        assert_eq!(report.route(), "0 -> 1 -> 0");
        assert!(report.to_string().contains("Cost: 2.5 kms"));
    }

    #[test]
    fn test_singular_unit() {
        let result = result(vec![0, 1], 1.0);
        let config = config();
        assert!(Report::new(&result, &config)
            .to_string()
            .contains("Cost: 1 mile\n"));
    }

    #[test]
    fn test_cost_drift_is_rounded() {
        let config = config();
        let drifted = result(vec![0, 1, 2], 14.000000000000002);
        assert!(Report::new(&drifted, &config)
            .to_string()
            .contains("Cost: 14 miles\n"));

        let fractional = result(vec![0, 1, 2], 0.1 + 0.2);
        assert!(Report::new(&fractional, &config)
            .to_string()
            .contains("Cost: 0.3 miles\n"));

        let near_one = result(vec![0, 1], 1.0 + 1e-12);
        assert!(Report::new(&near_one, &config)
            .to_string()
            .contains("Cost: 1 mile\n"));
    }

    #[test]
    fn test_degenerate_routes() {
        let config = config();
        let single = result(vec![0], 0.0);
        assert_eq!(Report::new(&single, &config).route(), "A");
        let empty = result(vec![], 0.0);
        assert_eq!(Report::new(&empty, &config).route(), "");
    }

    #[test]
    fn test_labels_past_z() {
        let tour: Vec<usize> = (0..28).collect();
        let result = result(tour, 3.0);
        let config = config();
        let route = Report::new(&result, &config).route();
        assert!(route.ends_with("Z -> AA -> AB -> A"), "{route}");
    }
}
