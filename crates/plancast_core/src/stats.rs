//! Descriptive statistics for simulation output.
//!
//! Mean and *population* standard deviation (divide by `n`, not `n - 1`),
//! matching the estimator used in the reported summaries, plus equal-width
//! histogram binning for text rendering.

use serde::Serialize;

/// Arithmetic mean of `values`, or NaN when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of `values`, or NaN when empty.
///
/// Divides by `n`; a constant sample therefore reports exactly 0.0, which
/// the zero-noise degeneracy property relies on.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let variance = values.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Equal-width histogram over the observed range of a sample.
///
/// Bins are half-open `[lo, hi)` except the last, which is closed so the
/// sample maximum is counted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    min: f64,
    bin_width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width buckets.
    ///
    /// Returns `None` when `values` is empty, `bins` is zero, or any value
    /// is non-finite.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 || values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = if bin_width == 0.0 {
                0
            } else {
                (((v - min) / bin_width) as usize).min(bins - 1)
            };
            counts[idx] += 1;
        }
        Some(Self {
            min,
            bin_width,
            counts,
        })
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true when the histogram has no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Largest single-bin count, for scaling bar output.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterates `(lower_edge, upper_edge, count)` per bin in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let lo = self.min + self.bin_width * i as f64;
            (lo, lo + self.bin_width, count)
        })
    }
}
