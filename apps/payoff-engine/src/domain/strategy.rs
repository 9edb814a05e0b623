//! Strategy aggregate and fail-fast validation.
//!
//! A [`Strategy`] is the unit of curve computation: an ordered set of
//! legs plus the spot price and an instrument profile. Validation runs at
//! construction so every downstream stage (grid, aggregation, breakevens,
//! splitting) is total.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayoffError;
use crate::grid::InstrumentProfile;

use super::leg::{Leg, LegKind, LegSide};

// ============================================================================
// Strategy Types
// ============================================================================

/// Named strategy shape.
///
/// A tag for hosts (chart legends, screeners); payoff math never branches
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Long underlying + short call + long put.
    Collar,
    /// Long underlying + short call.
    CoveredCall,
    /// Long put protection financed by a short call, no underlying leg.
    TailHedge,
    /// Any other leg combination.
    Custom,
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Custom
    }
}

/// A validated multi-leg options strategy.
///
/// Construction via [`Strategy::new`] (or the preset builders) guarantees
/// the invariants evaluation relies on: at least one leg, positive spot,
/// positive quantities, and positive strikes on option legs. Deserialized
/// values are re-checked by the curve pipeline before evaluation.
///
/// Implements `Hash`/`Eq` so hosts can memoize computed curves keyed by
/// the strategy value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(default)]
    kind: StrategyKind,
    legs: Vec<Leg>,
    spot: Decimal,
    #[serde(default)]
    profile: InstrumentProfile,
}

impl Strategy {
    /// Create a validated strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidStrategy`] for an empty leg list,
    /// non-positive spot, non-positive quantity, or non-positive strike,
    /// and [`PayoffError::MalformedLeg`] for an option leg without a
    /// strike (or an underlying leg carrying one).
    pub fn new(
        kind: StrategyKind,
        legs: Vec<Leg>,
        spot: Decimal,
        profile: InstrumentProfile,
    ) -> Result<Self, PayoffError> {
        let strategy = Self {
            kind,
            legs,
            spot,
            profile,
        };
        strategy.validate()?;
        Ok(strategy)
    }

    /// Re-run construction-time validation.
    ///
    /// Cheap (one pass over the legs); the curve pipeline calls this to
    /// guard strategies that arrived through deserialization instead of
    /// [`Strategy::new`].
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Strategy::new`].
    pub fn validate(&self) -> Result<(), PayoffError> {
        if self.legs.is_empty() {
            return Err(PayoffError::InvalidStrategy {
                message: "Strategy has no legs".to_string(),
            });
        }
        if self.spot <= Decimal::ZERO {
            return Err(PayoffError::InvalidStrategy {
                message: format!("Spot must be positive, got {}", self.spot),
            });
        }
        if self.profile.low_margin <= Decimal::ZERO
            || self.profile.high_margin <= Decimal::ZERO
            || self.profile.base_step <= Decimal::ZERO
        {
            return Err(PayoffError::InvalidStrategy {
                message: "Instrument profile margins and base step must be positive".to_string(),
            });
        }

        for (index, leg) in self.legs.iter().enumerate() {
            let label = leg.display_label();
            if leg.quantity() <= Decimal::ZERO {
                return Err(PayoffError::InvalidStrategy {
                    message: format!(
                        "Leg `{label}` at index {index} has non-positive quantity {}",
                        leg.quantity()
                    ),
                });
            }
            match (leg.kind(), leg.strike()) {
                (LegKind::Underlying, None) => {}
                (LegKind::Underlying, Some(_)) => {
                    return Err(PayoffError::MalformedLeg {
                        index,
                        label,
                        message: "Underlying leg must not carry a strike".to_string(),
                    });
                }
                (LegKind::Call | LegKind::Put, Some(strike)) => {
                    if strike <= Decimal::ZERO {
                        return Err(PayoffError::InvalidStrategy {
                            message: format!(
                                "Leg `{label}` at index {index} has non-positive strike {strike}"
                            ),
                        });
                    }
                }
                (LegKind::Call | LegKind::Put, None) => {
                    return Err(PayoffError::MalformedLeg {
                        index,
                        label,
                        message: "Option leg is missing a strike".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Strategy shape tag.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Legs in declaration order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Spot price of the underlying; also the fixed reference for
    /// underlying-leg P&L.
    #[must_use]
    pub const fn spot(&self) -> Decimal {
        self.spot
    }

    /// Instrument profile driving grid margins and base step.
    #[must_use]
    pub const fn profile(&self) -> InstrumentProfile {
        self.profile
    }

    /// Resolved per-leg labels, unique and in leg order.
    ///
    /// Explicit labels win; unlabeled legs default to `"{side}_{kind}"`.
    /// Collisions get `_2`, `_3`, ... suffixes in leg order, so the
    /// mapping is deterministic for a given strategy.
    #[must_use]
    pub fn resolved_labels(&self) -> Vec<String> {
        let mut assigned: HashSet<String> = HashSet::with_capacity(self.legs.len());
        let mut labels = Vec::with_capacity(self.legs.len());
        for leg in &self.legs {
            let base = leg.display_label();
            let mut candidate = base.clone();
            let mut n = 1u32;
            while !assigned.insert(candidate.clone()) {
                n += 1;
                candidate = format!("{base}_{n}");
            }
            labels.push(candidate);
        }
        labels
    }

    /// Net premium across option legs (positive = credit).
    ///
    /// Underlying legs carry no premium and are excluded.
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        self.legs
            .iter()
            .map(|leg| match (leg.kind(), leg.side()) {
                (LegKind::Underlying, _) => Decimal::ZERO,
                (_, LegSide::Short) => leg.premium() * leg.quantity(),
                (_, LegSide::Long) => -leg.premium() * leg.quantity(),
            })
            .sum()
    }

    /// Strikes across option legs, in leg order.
    #[must_use]
    pub fn strikes(&self) -> Vec<Decimal> {
        self.legs.iter().filter_map(Leg::strike).collect()
    }

    /// Lowest and highest option strikes, when any option leg exists.
    #[must_use]
    pub fn strike_range(&self) -> Option<(Decimal, Decimal)> {
        let strikes = self.strikes();
        let min = strikes.iter().copied().min()?;
        let max = strikes.iter().copied().max()?;
        Some((min, max))
    }
}
