//! Integration tests for the payoff pipeline.
//!
//! Full-strategy scenarios: collar, covered call, and tail hedge curves
//! checked against hand-computed payoffs, plus the serde boundary the
//! dashboard layer consumes.

#![allow(clippy::unwrap_used, clippy::unreadable_literal)]

use payoff_engine::{
    BatchConfig, InstrumentProfile, Leg, PayoffCurve, PayoffError, Strategy, StrategyBuilder,
    StrategyKind, compute_batch,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference_collar() -> Strategy {
    StrategyBuilder::new()
        .collar(dec!(100), dec!(110), dec!(2), dec!(90), dec!(2), dec!(1))
        .unwrap()
}

#[test]
fn test_collar_leg_payoffs_at_reference_prices() {
    // spot 100: long put 90 @ 2, short call 110 @ 2, one unit of
    // underlying held from 100.
    let put = Leg::long_put(dec!(90), dec!(2), dec!(1));
    let call = Leg::short_call(dec!(110), dec!(2), dec!(1));
    let underlying = Leg::long_underlying(dec!(1));
    let spot = dec!(100);

    let total_at = |price: Decimal| {
        put.payoff_at(price, spot) + call.payoff_at(price, spot) + underlying.payoff_at(price, spot)
    };

    // Settle at 80: 8 + 2 - 20 = -10.
    assert_eq!(put.payoff_at(dec!(80), spot), dec!(8));
    assert_eq!(call.payoff_at(dec!(80), spot), dec!(2));
    assert_eq!(underlying.payoff_at(dec!(80), spot), dec!(-20));
    assert_eq!(total_at(dec!(80)), dec!(-10));

    // Settle at 120: -2 - 8 + 20 = 10.
    assert_eq!(put.payoff_at(dec!(120), spot), dec!(-2));
    assert_eq!(call.payoff_at(dec!(120), spot), dec!(-8));
    assert_eq!(underlying.payoff_at(dec!(120), spot), dec!(20));
    assert_eq!(total_at(dec!(120)), dec!(10));
}

#[test]
fn test_collar_curve_end_to_end() {
    let curve = PayoffCurve::compute(&reference_collar()).unwrap();

    // Equity margins around strikes 90/110: grid spans 81 to 121 in 5s.
    let prices: Vec<Decimal> = curve.series.points().iter().map(|p| p.price).collect();
    assert_eq!(prices.first().copied(), Some(dec!(81.00)));
    assert_eq!(prices.last().copied(), Some(dec!(121.00)));

    // Symmetric collar: floor -10, cap +10, breakeven at the spot.
    assert_eq!(curve.max_loss, dec!(-10));
    assert_eq!(curve.max_profit, dec!(10));
    assert_eq!(curve.breakevens, vec![dec!(100)]);
    assert_eq!(curve.net_premium, dec!(0));

    // Loss fill below the breakeven, profit fill above.
    for (point, split) in curve.series.points().iter().zip(&curve.loss) {
        assert_eq!(split.value.is_some(), point.total < dec!(0));
    }
}

#[test]
fn test_covered_call_breakeven_is_spot_minus_premium() {
    let strategy = StrategyBuilder::new()
        .covered_call(dec!(100), dec!(105), dec!(3), dec!(1))
        .unwrap();
    let curve = PayoffCurve::compute(&strategy).unwrap();

    // Below the strike the curve is (price - 100) + 3, so zero at 97.
    assert_eq!(curve.breakevens, vec![dec!(97)]);
    // Cap above the strike: 5 + 3.
    assert_eq!(curve.max_profit, dec!(8));
}

#[test]
fn test_tail_hedge_curve_with_fractional_quantities() {
    let strategy = StrategyBuilder::new()
        .tail_hedge(
            dec!(60000),
            (dec!(50000), dec!(1200), dec!(2.5)),
            (dec!(75000), dec!(900), dec!(3)),
        )
        .unwrap();
    let curve = PayoffCurve::compute(&strategy).unwrap();

    // Crypto margins: 40000 to 90000 in 100s.
    assert_eq!(curve.series.points()[0].price, dec!(40000.00));
    assert_eq!(curve.series.len(), 501);

    // Deep crash: puts pay 2.5 * (10000 - 1200), calls keep 3 * 900.
    assert_eq!(curve.series.points()[0].total, dec!(24700));
    assert_eq!(curve.max_profit, dec!(24700));

    // Melt-up: puts expire, calls assigned 3 * (900 - 15000).
    assert_eq!(curve.max_loss, dec!(-45300));

    // Net debit of 300 pushes the breakeven below the put strike.
    assert_eq!(curve.net_premium, dec!(-300));
    assert_eq!(curve.breakevens, vec![dec!(49880)]);
}

#[test]
fn test_strategy_deserializes_from_dashboard_shape() {
    let strategy: Strategy = serde_json::from_str(
        r#"{
            "spot": "100",
            "legs": [
                {"kind": "underlying", "side": "long", "premium": "0", "quantity": "1"},
                {"kind": "call", "side": "short", "strike": "110", "premium": "2", "quantity": "1"},
                {"kind": "put", "side": "long", "strike": "90", "premium": "2", "quantity": "1"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(strategy.kind(), StrategyKind::Custom);
    assert_eq!(strategy.profile(), InstrumentProfile::equity());

    // Same curve as the builder-made collar apart from the kind tag.
    let curve = PayoffCurve::compute(&strategy).unwrap();
    let reference = PayoffCurve::compute(&reference_collar()).unwrap();
    assert_eq!(curve.series, reference.series);
    assert_eq!(curve.breakevens, reference.breakevens);
}

fn decimal_at(value: &serde_json::Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[test]
fn test_chart_points_serialize_for_the_dashboard() {
    let curve = PayoffCurve::compute(&reference_collar()).unwrap();
    let json = serde_json::to_value(curve.chart_points()).unwrap();
    let first = &json[0];

    assert_eq!(first["price"], "81.00");
    assert_eq!(decimal_at(&first["payoff"]), dec!(-10));
    assert_eq!(decimal_at(&first["negativePayoff"]), dec!(-10));
    assert_eq!(decimal_at(&first["legPayoffs"]["long_underlying"]), dec!(-19));
    assert_eq!(decimal_at(&first["legPayoffs"]["short_call"]), dec!(2));
    assert_eq!(decimal_at(&first["legPayoffs"]["long_put"]), dec!(7));

    // Positive totals leave the loss fill as an explicit JSON null.
    let last = json.as_array().unwrap().last().unwrap();
    assert_eq!(decimal_at(&last["payoff"]), dec!(10));
    assert!(last["negativePayoff"].is_null());
}

#[test]
fn test_degenerate_grid_degrades_gracefully() {
    let flat = InstrumentProfile {
        low_margin: Decimal::ONE,
        high_margin: Decimal::ONE,
        base_step: dec!(5),
    };
    let strategy = Strategy::new(
        StrategyKind::Custom,
        vec![Leg::long_underlying(dec!(1))],
        dec!(100),
        flat,
    )
    .unwrap();
    let curve = PayoffCurve::compute(&strategy).unwrap();

    assert_eq!(curve.series.len(), 1);
    assert_eq!(curve.series.points()[0].price, dec!(100));
    assert!(curve.breakevens.is_empty());
    assert_eq!(curve.profit.len(), 1);
    assert_eq!(curve.loss.len(), 1);
}

#[test]
fn test_validation_errors_surface_before_any_grid_work() {
    let missing_strike: Strategy = serde_json::from_str(
        r#"{"spot":"100","legs":[{"kind":"call","side":"long","premium":"2","quantity":"1"}]}"#,
    )
    .unwrap();
    assert!(matches!(
        PayoffCurve::compute(&missing_strike),
        Err(PayoffError::MalformedLeg { index: 0, .. })
    ));

    let bad_spot: Strategy = serde_json::from_str(
        r#"{"spot":"-1","legs":[{"kind":"underlying","side":"long","premium":"0","quantity":"1"}]}"#,
    )
    .unwrap();
    assert!(matches!(
        PayoffCurve::compute(&bad_spot),
        Err(PayoffError::InvalidStrategy { .. })
    ));
}

#[test]
fn test_batch_screening_over_candidate_strikes() {
    let builder = StrategyBuilder::new();
    let candidates: Vec<Strategy> = (0u32..20)
        .map(|i| {
            let call_strike = dec!(104) + Decimal::from(i);
            builder
                .collar(dec!(100), call_strike, dec!(2), dec!(90), dec!(2), dec!(1))
                .unwrap()
        })
        .collect();

    let results = compute_batch(&candidates, &BatchConfig::default());
    assert_eq!(results.len(), 20);
    for (i, result) in results.iter().enumerate() {
        let curve = result.as_ref().unwrap();
        let offset = Decimal::from(u32::try_from(i).unwrap());
        // Wider call strikes raise the cap one-for-one.
        assert_eq!(curve.max_profit, dec!(4) + offset);
    }
}
