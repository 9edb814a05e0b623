//! Strategy leg types and per-leg payoff evaluation.
//!
//! A leg is one tradable instrument: a call, a put, or the underlying
//! itself. Option payoffs are intrinsic value at a terminal price net of
//! the premium paid or received; underlying payoffs measure drift from
//! the reference spot fixed at strategy construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Leg Enums
// ============================================================================

/// Instrument kind for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegKind {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
    /// The underlying instrument itself.
    Underlying,
}

impl std::fmt::Display for LegKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
            Self::Underlying => write!(f, "underlying"),
        }
    }
}

/// Position direction for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl LegSide {
    /// Sign multiplier: `+1` for long, `-1` for short.
    #[must_use]
    pub const fn sign(self) -> Decimal {
        match self {
            Self::Long => Decimal::ONE,
            Self::Short => Decimal::NEGATIVE_ONE,
        }
    }
}

impl std::fmt::Display for LegSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

// ============================================================================
// Leg
// ============================================================================

/// A single leg of an options strategy.
///
/// Constructed via the typed constructors ([`Leg::long_call`],
/// [`Leg::short_put`], [`Leg::long_underlying`], ...), which cannot
/// produce a strike-less option leg. Deserialized legs are re-checked by
/// strategy validation before any evaluation runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leg {
    kind: LegKind,
    side: LegSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strike: Option<Decimal>,
    premium: Decimal,
    quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiry_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Leg {
    const fn option(
        kind: LegKind,
        side: LegSide,
        strike: Decimal,
        premium: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            kind,
            side,
            strike: Some(strike),
            premium,
            quantity,
            expiry_days: None,
            label: None,
        }
    }

    const fn underlying(side: LegSide, quantity: Decimal) -> Self {
        Self {
            kind: LegKind::Underlying,
            side,
            strike: None,
            premium: Decimal::ZERO,
            quantity,
            expiry_days: None,
            label: None,
        }
    }

    /// Create a long call leg.
    #[must_use]
    pub const fn long_call(strike: Decimal, premium: Decimal, quantity: Decimal) -> Self {
        Self::option(LegKind::Call, LegSide::Long, strike, premium, quantity)
    }

    /// Create a short call leg.
    #[must_use]
    pub const fn short_call(strike: Decimal, premium: Decimal, quantity: Decimal) -> Self {
        Self::option(LegKind::Call, LegSide::Short, strike, premium, quantity)
    }

    /// Create a long put leg.
    #[must_use]
    pub const fn long_put(strike: Decimal, premium: Decimal, quantity: Decimal) -> Self {
        Self::option(LegKind::Put, LegSide::Long, strike, premium, quantity)
    }

    /// Create a short put leg.
    #[must_use]
    pub const fn short_put(strike: Decimal, premium: Decimal, quantity: Decimal) -> Self {
        Self::option(LegKind::Put, LegSide::Short, strike, premium, quantity)
    }

    /// Create a long underlying leg (premium-free; P&L is measured from
    /// the strategy's reference spot).
    #[must_use]
    pub const fn long_underlying(quantity: Decimal) -> Self {
        Self::underlying(LegSide::Long, quantity)
    }

    /// Create a short underlying leg.
    #[must_use]
    pub const fn short_underlying(quantity: Decimal) -> Self {
        Self::underlying(LegSide::Short, quantity)
    }

    /// Set an explicit display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set informational days-to-expiry (never used in payoff math).
    #[must_use]
    pub fn with_expiry_days(mut self, days: u32) -> Self {
        self.expiry_days = Some(days);
        self
    }

    /// Instrument kind.
    #[must_use]
    pub const fn kind(&self) -> LegKind {
        self.kind
    }

    /// Position direction.
    #[must_use]
    pub const fn side(&self) -> LegSide {
        self.side
    }

    /// Strike price; `None` for underlying legs.
    #[must_use]
    pub const fn strike(&self) -> Option<Decimal> {
        self.strike
    }

    /// Premium paid (long) or received (short) per unit.
    #[must_use]
    pub const fn premium(&self) -> Decimal {
        self.premium
    }

    /// Number of units (contracts or underlying quantity). Fractional
    /// quantities support notional sizing.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Informational days-to-expiry.
    #[must_use]
    pub const fn expiry_days(&self) -> Option<u32> {
        self.expiry_days
    }

    /// Explicit display label, when set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Resolved display label: the explicit label when set, otherwise
    /// `"{side}_{kind}"` (e.g. `"short_call"`).
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{}_{}", self.side, self.kind))
    }

    /// Intrinsic value at a terminal price, ignoring premium.
    ///
    /// Calls pay `max(price - strike, 0)`, puts pay `max(strike - price, 0)`,
    /// the underlying has no optionality. An option leg without a strike
    /// contributes nothing; strategy validation rejects such legs before
    /// evaluation runs.
    #[must_use]
    pub fn intrinsic_at(&self, price: Decimal) -> Decimal {
        match (self.kind, self.strike) {
            (LegKind::Call, Some(strike)) => (price - strike).max(Decimal::ZERO),
            (LegKind::Put, Some(strike)) => (strike - price).max(Decimal::ZERO),
            (LegKind::Underlying, _) | (LegKind::Call | LegKind::Put, None) => Decimal::ZERO,
        }
    }

    /// Signed net payoff at a terminal price.
    ///
    /// Option legs are net of premium: long pays
    /// `quantity * (intrinsic - premium)`, short pays
    /// `quantity * (premium - intrinsic)`. Underlying legs pay
    /// `sign * quantity * (price - reference_spot)`; the reference spot is
    /// fixed at strategy construction and premium is ignored.
    #[must_use]
    pub fn payoff_at(&self, price: Decimal, reference_spot: Decimal) -> Decimal {
        match self.kind {
            LegKind::Underlying => self.side.sign() * self.quantity * (price - reference_spot),
            LegKind::Call | LegKind::Put => {
                self.side.sign() * self.quantity * (self.intrinsic_at(price) - self.premium)
            }
        }
    }
}
