//! Grid-search price optimisation.
//!
//! The optimiser sweeps a dense linear price grid in ascending order,
//! evaluates the configured objective against a [`DemandCurve`] at every
//! candidate, and returns the first maximiser; ties resolve to the lowest
//! price.

use serde::{Deserialize, Serialize};

use crate::demand::DemandCurve;
use crate::error::PricingError;

/// Inclusive linear price grid (linspace semantics).
///
/// With `points >= 2` the grid spaces `stop - start` evenly over
/// `points - 1` steps so both endpoints are candidates; `points == 1` yields
/// just `[start]`.
///
/// # Examples
///
/// ```rust
/// use plancast_models::PriceGrid;
///
/// let grid = PriceGrid::new(55.0, 80.0, 100).unwrap();
/// let values = grid.values();
/// assert_eq!(values.len(), 100);
/// assert!((values[0] - 55.0).abs() < 1e-12);
/// assert!((values[99] - 80.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    start: f64,
    stop: f64,
    points: usize,
}

impl PriceGrid {
    /// Creates a grid over `[start, stop]` with `points` candidates.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::EmptyGrid`] when `points` is zero, and
    /// [`PricingError::InvalidGridBounds`] when the bounds are not positive
    /// and ascending.
    pub fn new(start: f64, stop: f64, points: usize) -> Result<Self, PricingError> {
        if points == 0 {
            return Err(PricingError::EmptyGrid);
        }
        if !(start > 0.0) || !(stop >= start) || !stop.is_finite() {
            return Err(PricingError::InvalidGridBounds { start, stop });
        }
        Ok(Self {
            start,
            stop,
            points,
        })
    }

    /// Lower grid bound.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper grid bound.
    #[inline]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Number of candidate prices.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Materialises the candidate prices in ascending order.
    pub fn values(&self) -> Vec<f64> {
        if self.points == 1 {
            return vec![self.start];
        }
        let step = (self.stop - self.start) / (self.points - 1) as f64;
        (0..self.points)
            .map(|i| self.start + step * i as f64)
            .collect()
    }
}

/// Objective maximised over the price grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Objective {
    /// Revenue: `price * demand(price)`.
    Revenue,
    /// Profit: `(price * (1 - commission_rate) - unit_cost) * demand(price)`.
    ///
    /// Whether commission is netted off the price before the per-unit margin
    /// is an explicit knob: a `commission_rate` of 0.0 disables it.
    Profit {
        /// Fixed cost per unit.
        unit_cost: f64,
        /// Commission taken off the price (fraction of price).
        commission_rate: f64,
    },
}

impl Objective {
    /// Profit objective with no commission on price.
    pub fn profit(unit_cost: f64) -> Self {
        Self::Profit {
            unit_cost,
            commission_rate: 0.0,
        }
    }

    /// Profit objective with commission netted off the price.
    pub fn profit_with_commission(unit_cost: f64, commission_rate: f64) -> Self {
        Self::Profit {
            unit_cost,
            commission_rate,
        }
    }

    /// Objective value at a candidate price for the predicted demand.
    pub fn evaluate(&self, price: f64, quantity: f64) -> f64 {
        match *self {
            Self::Revenue => price * quantity,
            Self::Profit {
                unit_cost,
                commission_rate,
            } => (price * (1.0 - commission_rate) - unit_cost) * quantity,
        }
    }
}

/// The maximiser found by a grid sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OptimalPrice {
    /// Price achieving the maximum objective value.
    pub price: f64,
    /// Predicted demand at that price.
    pub quantity: f64,
    /// Objective value at that price.
    pub objective_value: f64,
}

/// Grid-search optimiser over a [`DemandCurve`].
///
/// # Examples
///
/// ```rust
/// use plancast_models::{DemandCurve, Objective, PriceGrid, PriceOptimizer};
///
/// let curve = DemandCurve::new(72_000.0, 65.0, 2.0).unwrap();
/// let grid = PriceGrid::new(55.0, 80.0, 100).unwrap();
/// let optimizer = PriceOptimizer::new(grid, Objective::profit(32.5));
///
/// let optimum = optimizer.optimise(&curve).unwrap();
/// assert!(optimum.objective_value > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceOptimizer {
    grid: PriceGrid,
    objective: Objective,
}

impl PriceOptimizer {
    /// Creates an optimiser from a grid and an objective.
    pub fn new(grid: PriceGrid, objective: Objective) -> Self {
        Self { grid, objective }
    }

    /// The price grid being swept.
    #[inline]
    pub fn grid(&self) -> &PriceGrid {
        &self.grid
    }

    /// The objective being maximised.
    #[inline]
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Sweeps the grid and returns the first maximiser.
    ///
    /// Candidates are evaluated in ascending order with a strict comparison,
    /// so ties break to the lowest price.
    ///
    /// # Errors
    ///
    /// Propagates [`PricingError::Demand`] when a candidate price is rejected
    /// by the curve (cannot happen for a validated grid, which is positive by
    /// construction).
    pub fn optimise(&self, curve: &DemandCurve) -> Result<OptimalPrice, PricingError> {
        let mut best: Option<OptimalPrice> = None;
        for price in self.grid.values() {
            let quantity = curve.quantity_at(price)?;
            let objective_value = self.objective.evaluate(price, quantity);
            let improves = best.map_or(true, |b| objective_value > b.objective_value);
            if improves {
                best = Some(OptimalPrice {
                    price,
                    quantity,
                    objective_value,
                });
            }
        }
        best.ok_or(PricingError::EmptyGrid)
    }
}
