//! Profit/loss series splitting.
//!
//! Partitions the aggregate payoff into a non-negative series and a
//! negative series sharing the full price axis. `None` marks "no value at
//! this x": a gap the downstream area chart must not interpolate across.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::PayoffSeries;

/// One sample of a split series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPoint {
    /// Terminal underlying price (same axis as the source series).
    pub price: Decimal,
    /// Total payoff when it falls on this side of zero, `None` otherwise.
    pub value: Option<Decimal>,
}

/// Split a payoff series into profit and loss views.
///
/// Profit carries totals `>= 0`, loss carries totals `< 0`; both retain
/// every price so twin area fills stay anchored to one x-axis. At any
/// index at most one side is populated, and exactly one is whenever the
/// total is nonzero.
#[must_use]
pub fn split(series: &PayoffSeries) -> (Vec<SplitPoint>, Vec<SplitPoint>) {
    let mut profit = Vec::with_capacity(series.len());
    let mut loss = Vec::with_capacity(series.len());
    for point in series.points() {
        let gain = point.total >= Decimal::ZERO;
        profit.push(SplitPoint {
            price: point.price,
            value: gain.then_some(point.total),
        });
        loss.push(SplitPoint {
            price: point.price,
            value: (!gain).then_some(point.total),
        });
    }
    (profit, loss)
}
