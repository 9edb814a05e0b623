//! End-to-end curve computation.
//!
//! One synchronous pass per stage: validate, build the grid, aggregate,
//! extract breakevens, split. Everything is computed fresh per call and
//! nothing is mutated in place, so repeated runs on the same strategy are
//! byte-identical.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Strategy;
use crate::error::PayoffError;
use crate::grid::PriceGrid;

use super::aggregate::{PayoffSeries, aggregate};
use super::breakeven::breakevens;
use super::split::{SplitPoint, split};

// ============================================================================
// Chart Handoff
// ============================================================================

/// One chart-ready sample of a computed curve.
///
/// Wire names are camelCase for the dashboard layer; `negative_payoff`
/// serializes as an explicit `null` when the total is non-negative so
/// area charts keep their gap semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Terminal underlying price.
    pub price: Decimal,
    /// Total payoff at this price.
    pub payoff: Decimal,
    /// Total payoff when negative, `None` otherwise.
    pub negative_payoff: Option<Decimal>,
    /// Per-leg payoffs keyed by resolved leg label.
    pub leg_payoffs: BTreeMap<String, Decimal>,
}

// ============================================================================
// Payoff Curve
// ============================================================================

/// Full output of the payoff pipeline for one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffCurve {
    /// Aggregated payoff series, ascending in price.
    pub series: PayoffSeries,
    /// Non-negative view of the series (gaps where the total is negative).
    pub profit: Vec<SplitPoint>,
    /// Negative view of the series (gaps where the total is non-negative).
    pub loss: Vec<SplitPoint>,
    /// Breakeven prices, ascending, full precision.
    pub breakevens: Vec<Decimal>,
    /// Highest total payoff across the sampled range.
    pub max_profit: Decimal,
    /// Lowest total payoff across the sampled range.
    pub max_loss: Decimal,
    /// Net option premium (positive = credit).
    pub net_premium: Decimal,
}

impl PayoffCurve {
    /// Run the full pipeline for a strategy.
    ///
    /// Validation runs first so strategies that arrived through
    /// deserialization get the same fail-fast guarantees as ones built
    /// with [`Strategy::new`]; every later stage is total.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError`] when strategy validation fails; nothing is
    /// retried (the computation is deterministic).
    pub fn compute(strategy: &Strategy) -> Result<Self, PayoffError> {
        strategy.validate()?;

        let grid = PriceGrid::build(strategy);
        let series = aggregate(strategy, &grid);
        let breakevens = breakevens(&series);
        let (profit, loss) = split(&series);
        let max_profit = series.max_profit();
        let max_loss = series.max_loss();
        let net_premium = strategy.net_premium();

        debug!(
            kind = ?strategy.kind(),
            points = series.len(),
            breakevens = breakevens.len(),
            step = %series.step(),
            "Computed payoff curve"
        );

        Ok(Self {
            series,
            profit,
            loss,
            breakevens,
            max_profit,
            max_loss,
            net_premium,
        })
    }

    /// Flatten the curve into chart handoff points.
    ///
    /// Hosts map leg labels to legend names; that mapping is presentation,
    /// not engine, concern.
    #[must_use]
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.series
            .points()
            .iter()
            .map(|point| ChartPoint {
                price: point.price,
                payoff: point.total,
                negative_payoff: (point.total < Decimal::ZERO).then_some(point.total),
                leg_payoffs: point.leg_payoffs.clone(),
            })
            .collect()
    }
}
