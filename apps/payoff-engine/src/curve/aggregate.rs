//! Per-grid-point payoff aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Strategy;
use crate::grid::PriceGrid;

// ============================================================================
// Series Types
// ============================================================================

/// Payoffs at one terminal price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Terminal underlying price (grid x-axis).
    pub price: Decimal,
    /// Signed net payoff per leg, keyed by resolved leg label.
    pub leg_payoffs: BTreeMap<String, Decimal>,
    /// Sum of the per-leg payoffs.
    pub total: Decimal,
}

/// Payoff series over a price grid, ascending in price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSeries {
    points: Vec<PricePoint>,
    step: Decimal,
}

impl PayoffSeries {
    /// Points in ascending price order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Grid step that produced the series; breakeven deduplication derives
    /// its tolerance from it.
    #[must_use]
    pub const fn step(&self) -> Decimal {
        self.step
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest total payoff across the series.
    #[must_use]
    pub fn max_profit(&self) -> Decimal {
        self.points
            .iter()
            .map(|point| point.total)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Lowest total payoff across the series.
    #[must_use]
    pub fn max_loss(&self) -> Decimal {
        self.points
            .iter()
            .map(|point| point.total)
            .min()
            .unwrap_or(Decimal::ZERO)
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Evaluate every leg at every grid price and sum per-point totals.
///
/// Output length equals grid length and inherits its ascending order.
/// Totals are exact sums of the retained per-leg payoffs: same decimal
/// arithmetic, no re-rounding, so breakdown and total never disagree.
#[must_use]
pub fn aggregate(strategy: &Strategy, grid: &PriceGrid) -> PayoffSeries {
    let labels = strategy.resolved_labels();
    let reference_spot = strategy.spot();

    let points = grid
        .prices()
        .iter()
        .map(|&price| {
            let mut leg_payoffs = BTreeMap::new();
            let mut total = Decimal::ZERO;
            for (leg, label) in strategy.legs().iter().zip(&labels) {
                let payoff = leg.payoff_at(price, reference_spot);
                total += payoff;
                leg_payoffs.insert(label.clone(), payoff);
            }
            PricePoint {
                price,
                leg_payoffs,
                total,
            }
        })
        .collect();

    PayoffSeries {
        points,
        step: grid.step(),
    }
}
