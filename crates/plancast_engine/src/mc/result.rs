//! Simulation result containers.

use plancast_core::stats::{self, Histogram};
use serde::Serialize;

/// Headline descriptive statistics of a simulation sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
}

/// Ordered per-iteration outcomes of a simulation run.
///
/// One entry per iteration (length = iteration count). Consumed for
/// descriptive statistics and histogram construction, then discarded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    values: Vec<f64>,
}

impl SimulationResult {
    /// Wraps per-iteration outcome values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The per-iteration values in iteration order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of iterations recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no iterations were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample mean.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.values)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        stats::population_std_dev(&self.values)
    }

    /// Smallest observation.
    pub fn min(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Largest observation.
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Headline statistics in one record.
    pub fn summary(&self) -> SummaryStats {
        SummaryStats {
            mean: self.mean(),
            std_dev: self.std_dev(),
            min: self.min(),
            max: self.max(),
        }
    }

    /// Bins the sample into an equal-width histogram.
    pub fn histogram(&self, bins: usize) -> Option<Histogram> {
        Histogram::from_values(&self.values, bins)
    }
}

/// Expected income-statement metrics for one projected period, averaged
/// across iterations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PeriodMeans {
    /// Period identifier.
    pub year: i32,
    /// Mean units sold, when per-unit economics are tracked.
    pub unit_sales: Option<f64>,
    /// Mean average unit price, paired with `unit_sales`.
    pub avg_unit_price: Option<f64>,
    /// Mean revenue.
    pub sales: f64,
    /// Mean cost of goods sold.
    pub cogs: f64,
    /// Mean gross profit.
    pub gross_profit: f64,
    /// Mean sales commissions.
    pub sales_commissions: f64,
    /// Mean G&A expense.
    pub general_and_admin: f64,
    /// Mean EBITDA.
    pub ebitda: f64,
}

/// Per-period expected metrics from a by-period simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ByPeriodResult {
    /// Number of iterations the means were taken over.
    pub iterations: usize,
    /// One record per projected period, in period order.
    pub periods: Vec<PeriodMeans>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary() {
        let result = SimulationResult::new(vec![1.0, 2.0, 3.0, 4.0]);
        let summary = result.summary();
        assert_relative_eq!(summary.mean, 2.5);
        assert_relative_eq!(summary.min, 1.0);
        assert_relative_eq!(summary.max, 4.0);
        assert!(summary.std_dev > 0.0);
    }

    #[test]
    fn test_constant_sample() {
        let result = SimulationResult::new(vec![7.0; 50]);
        assert_eq!(result.std_dev(), 0.0);
        assert_relative_eq!(result.mean(), 7.0);
    }

    #[test]
    fn test_histogram_total() {
        let result = SimulationResult::new((0..100).map(f64::from).collect());
        let hist = result.histogram(10).unwrap();
        assert_eq!(hist.bins().map(|(_, _, c)| c).sum::<usize>(), 100);
    }
}
