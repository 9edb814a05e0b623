//! Property tests for the payoff pipeline.
//!
//! Invariants that hold for every valid strategy, not just the curated
//! scenarios: grids bracket all strikes and the spot with even spacing,
//! totals are exact sums of leg payoffs, the profit/loss split covers
//! each sampled price exactly once, breakevens sit on the zero line of
//! the sampled curve, and computation is deterministic.

#![allow(clippy::unwrap_used)]

use payoff_engine::{
    InstrumentProfile, Leg, PayoffCurve, PriceGrid, PricePoint, StrategyBuilder, StrategyKind,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn pct_of(spot: Decimal, pct: u32) -> Decimal {
    (spot * Decimal::from(pct) / Decimal::ONE_HUNDRED).round_dp(2)
}

/// Collar with strikes placed as percentages of spot, so the legs always
/// pass strike-order validation.
fn collar_from(
    spot_cents: i64,
    put_pct: u32,
    call_pct: u32,
    put_premium_cents: i64,
    call_premium_cents: i64,
    quantity_tenths: i64,
) -> payoff_engine::Strategy {
    let spot = Decimal::new(spot_cents, 2);
    StrategyBuilder::new()
        .collar(
            spot,
            pct_of(spot, call_pct),
            Decimal::new(call_premium_cents, 2),
            pct_of(spot, put_pct),
            Decimal::new(put_premium_cents, 2),
            Decimal::new(quantity_tenths, 1),
        )
        .unwrap()
}

/// Two long option legs, no underlying.
fn strangle_from(
    spot_cents: i64,
    put_pct: u32,
    call_pct: u32,
    premium_cents: i64,
    quantity_tenths: i64,
) -> payoff_engine::Strategy {
    let spot = Decimal::new(spot_cents, 2);
    let premium = Decimal::new(premium_cents, 2);
    let quantity = Decimal::new(quantity_tenths, 1);
    StrategyBuilder::new()
        .custom(
            StrategyKind::Custom,
            vec![
                Leg::long_put(pct_of(spot, put_pct), premium, quantity),
                Leg::long_call(pct_of(spot, call_pct), premium, quantity),
            ],
            spot,
            InstrumentProfile::equity(),
        )
        .unwrap()
}

/// Linear interpolation of the sampled total at an arbitrary price
/// inside the grid.
fn interpolated_total(points: &[PricePoint], price: Decimal) -> Decimal {
    for pair in points.windows(2) {
        if pair[0].price <= price && price <= pair[1].price {
            let t = (price - pair[0].price) / (pair[1].price - pair[0].price);
            return pair[0].total + (pair[1].total - pair[0].total) * t;
        }
    }
    points[0].total
}

proptest! {
    #[test]
    fn test_grid_brackets_strikes_with_even_spacing(
        spot_cents in 1_000i64..5_000_000,
        put_pct in 50u32..100,
        call_pct in 101u32..200,
        put_premium_cents in 1i64..100_000,
        call_premium_cents in 1i64..100_000,
        quantity_tenths in 1i64..100,
    ) {
        let strategy = collar_from(
            spot_cents,
            put_pct,
            call_pct,
            put_premium_cents,
            call_premium_cents,
            quantity_tenths,
        );
        let grid = PriceGrid::build(&strategy);
        let prices = grid.prices();
        let (min_strike, max_strike) = strategy.strike_range().unwrap();

        prop_assert!(prices[0] <= min_strike.min(strategy.spot()));
        prop_assert!(*prices.last().unwrap() >= max_strike.max(strategy.spot()));
        for pair in prices.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], grid.step());
        }
    }

    #[test]
    fn test_totals_are_exact_leg_payoff_sums(
        spot_cents in 1_000i64..5_000_000,
        put_pct in 50u32..100,
        call_pct in 101u32..200,
        premium_cents in 1i64..100_000,
        quantity_tenths in 1i64..100,
    ) {
        let strategy = strangle_from(spot_cents, put_pct, call_pct, premium_cents, quantity_tenths);
        let curve = PayoffCurve::compute(&strategy).unwrap();

        for point in curve.series.points() {
            let labeled: Decimal = point.leg_payoffs.values().copied().sum();
            prop_assert_eq!(point.total, labeled);

            let direct: Decimal = strategy
                .legs()
                .iter()
                .map(|leg| leg.payoff_at(point.price, strategy.spot()))
                .sum();
            prop_assert_eq!(point.total, direct);
        }
    }

    #[test]
    fn test_split_covers_each_price_exactly_once(
        spot_cents in 1_000i64..5_000_000,
        put_pct in 50u32..100,
        call_pct in 101u32..200,
        put_premium_cents in 1i64..100_000,
        call_premium_cents in 1i64..100_000,
        quantity_tenths in 1i64..100,
    ) {
        let strategy = collar_from(
            spot_cents,
            put_pct,
            call_pct,
            put_premium_cents,
            call_premium_cents,
            quantity_tenths,
        );
        let curve = PayoffCurve::compute(&strategy).unwrap();
        prop_assert_eq!(curve.profit.len(), curve.series.len());
        prop_assert_eq!(curve.loss.len(), curve.series.len());

        for ((point, profit), loss) in curve
            .series
            .points()
            .iter()
            .zip(&curve.profit)
            .zip(&curve.loss)
        {
            prop_assert_eq!(profit.price, point.price);
            prop_assert_eq!(loss.price, point.price);
            prop_assert!(profit.value.is_some() != loss.value.is_some());
            if point.total >= Decimal::ZERO {
                prop_assert_eq!(profit.value, Some(point.total));
            } else {
                prop_assert_eq!(loss.value, Some(point.total));
            }
        }
    }

    #[test]
    fn test_breakevens_sit_on_the_sampled_zero_line(
        spot_cents in 1_000i64..5_000_000,
        put_pct in 50u32..100,
        call_pct in 101u32..200,
        put_premium_cents in 1i64..100_000,
        call_premium_cents in 1i64..100_000,
        quantity_tenths in 1i64..100,
    ) {
        let strategy = collar_from(
            spot_cents,
            put_pct,
            call_pct,
            put_premium_cents,
            call_premium_cents,
            quantity_tenths,
        );
        let curve = PayoffCurve::compute(&strategy).unwrap();
        let points = curve.series.points();
        let tolerance = Decimal::new(1, 9);

        let mut previous: Option<Decimal> = None;
        for &breakeven in &curve.breakevens {
            prop_assert!(breakeven >= points[0].price);
            prop_assert!(breakeven <= points[points.len() - 1].price);
            if let Some(prior) = previous {
                prop_assert!(breakeven > prior);
            }
            previous = Some(breakeven);

            let residual = interpolated_total(points, breakeven);
            prop_assert!(
                residual.abs() <= tolerance,
                "residual {} at breakeven {}",
                residual,
                breakeven
            );
        }
    }

    #[test]
    fn test_pipeline_is_deterministic(
        spot_cents in 1_000i64..5_000_000,
        put_pct in 50u32..100,
        call_pct in 101u32..200,
        put_premium_cents in 1i64..100_000,
        call_premium_cents in 1i64..100_000,
        quantity_tenths in 1i64..100,
    ) {
        let strategy = collar_from(
            spot_cents,
            put_pct,
            call_pct,
            put_premium_cents,
            call_premium_cents,
            quantity_tenths,
        );
        let first = PayoffCurve::compute(&strategy).unwrap();
        let second = PayoffCurve::compute(&strategy).unwrap();
        prop_assert_eq!(first, second);
    }
}
