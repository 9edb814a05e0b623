//! Breakeven extraction.
//!
//! Walks the payoff series for sign changes and linearly interpolates the
//! zero crossings. Exact-zero samples are recorded directly and excluded
//! from pair interpolation so a root never appears twice.

use rust_decimal::Decimal;

use super::aggregate::PayoffSeries;

/// Divisor applied to the grid step to get the dedup tolerance.
const DEDUP_STEP_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

/// Prices where the interpolated total payoff crosses zero.
///
/// Results are ascending and deduplicated within `step / 100`; values are
/// returned at full precision (display rounding is a host concern). Empty
/// when the strategy never breaks even in range or the series is a
/// degenerate single point; multiple for non-monotonic payoffs such as
/// collars.
#[must_use]
pub fn breakevens(series: &PayoffSeries) -> Vec<Decimal> {
    let points = series.points();
    let mut roots: Vec<Decimal> = Vec::new();

    for pair in points.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        if left.total == Decimal::ZERO {
            roots.push(left.price);
        } else if right.total != Decimal::ZERO
            && (left.total > Decimal::ZERO) != (right.total > Decimal::ZERO)
        {
            let ratio = (Decimal::ZERO - left.total) / (right.total - left.total);
            roots.push(left.price + (right.price - left.price) * ratio);
        }
        // right.total == 0 is handled when that point leads a pair, or by
        // the tail check below for the final point.
    }
    let n = points.len();
    if n > 1 && points[n - 1].total == Decimal::ZERO {
        roots.push(points[n - 1].price);
    }

    let tolerance = series.step() / DEDUP_STEP_DIVISOR;
    let mut deduped: Vec<Decimal> = Vec::with_capacity(roots.len());
    for root in roots {
        match deduped.last() {
            Some(&prev) if (root - prev).abs() <= tolerance => {}
            _ => deduped.push(root),
        }
    }
    deduped
}
