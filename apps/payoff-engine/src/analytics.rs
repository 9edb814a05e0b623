//! Option and strategy analytics.
//!
//! Screening metrics recovered from the dashboard's collar scanners:
//! per-option moneyness and value decomposition, plus curve-level
//! risk/reward figures. Everything here is derived from legs and computed
//! curves; nothing feeds back into payoff math.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::curve::PayoffCurve;
use crate::domain::{Leg, LegKind, LegSide, Strategy};

// ============================================================================
// Moneyness
// ============================================================================

/// Where an option's strike sits relative to spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Moneyness {
    /// Positive intrinsic value at spot.
    InTheMoney,
    /// Strike equals spot.
    AtTheMoney,
    /// No intrinsic value at spot.
    OutOfTheMoney,
}

/// Moneyness of an option leg at the given spot.
///
/// Calls are out of the money above spot, puts below; `None` for
/// underlying legs and legs without a strike.
#[must_use]
pub fn moneyness(leg: &Leg, spot: Decimal) -> Option<Moneyness> {
    let strike = leg.strike()?;
    let bucket = match leg.kind() {
        LegKind::Underlying => return None,
        LegKind::Call => {
            if strike < spot {
                Moneyness::InTheMoney
            } else if strike > spot {
                Moneyness::OutOfTheMoney
            } else {
                Moneyness::AtTheMoney
            }
        }
        LegKind::Put => {
            if strike > spot {
                Moneyness::InTheMoney
            } else if strike < spot {
                Moneyness::OutOfTheMoney
            } else {
                Moneyness::AtTheMoney
            }
        }
    };
    Some(bucket)
}

// ============================================================================
// Option Value Decomposition
// ============================================================================

/// Premium decomposition for one option leg at spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Intrinsic value at spot.
    pub intrinsic: Decimal,
    /// Time value: premium above intrinsic, floored at zero.
    pub extrinsic: Decimal,
    /// Intrinsic value as a fraction of spot (downside cushion).
    pub protection: Decimal,
}

/// Decompose an option leg's premium at the given spot.
///
/// `None` for underlying legs, legs without a strike, or a non-positive
/// spot.
#[must_use]
pub fn option_value(leg: &Leg, spot: Decimal) -> Option<OptionValue> {
    if leg.kind() == LegKind::Underlying || leg.strike().is_none() || spot <= Decimal::ZERO {
        return None;
    }
    let intrinsic = leg.intrinsic_at(spot);
    let extrinsic = (leg.premium() - intrinsic).max(Decimal::ZERO);
    Some(OptionValue {
        intrinsic,
        extrinsic,
        protection: intrinsic / spot,
    })
}

// ============================================================================
// Strategy Metrics
// ============================================================================

/// Curve-level risk/reward figures for screening and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// Net option premium (positive = credit).
    pub net_premium: Decimal,
    /// Highest total payoff across the sampled range.
    pub max_profit: Decimal,
    /// Lowest total payoff across the sampled range.
    pub max_loss: Decimal,
    /// `max_profit / |max_loss|`; `None` when the range shows no downside.
    pub gain_to_risk_ratio: Option<Decimal>,
    /// True when the worst sampled outcome is still non-negative.
    pub zero_risk: bool,
    /// True when a sold call is in the money at spot, so part of the
    /// collected premium is intrinsic cushion.
    pub intrinsic_protection: bool,
}

/// Compute screening metrics for a strategy and its curve.
#[must_use]
pub fn strategy_metrics(strategy: &Strategy, curve: &PayoffCurve) -> StrategyMetrics {
    let max_profit = curve.max_profit;
    let max_loss = curve.max_loss;
    let gain_to_risk_ratio = if max_loss < Decimal::ZERO {
        Some(max_profit / max_loss.abs())
    } else {
        None
    };
    let intrinsic_protection = strategy.legs().iter().any(|leg| {
        leg.kind() == LegKind::Call
            && leg.side() == LegSide::Short
            && leg.strike().is_some_and(|strike| strike < strategy.spot())
    });

    StrategyMetrics {
        net_premium: curve.net_premium,
        max_profit,
        max_loss,
        gain_to_risk_ratio,
        zero_risk: max_loss >= Decimal::ZERO,
        intrinsic_protection,
    }
}
