//! Preset strategy constructors.
//!
//! Builds the strategy shapes the dashboard screens work with:
//! - Collar / crypto collar: long underlying hedged by a long put,
//!   financed by a short call
//! - Covered call: long underlying plus a short call
//! - Tail hedge: long put protection financed by a short call, sized
//!   independently per leg (no underlying position)
//!
//! All presets go through [`Strategy::new`], so the returned values carry
//! the full validation guarantees.

use rust_decimal::Decimal;

use crate::domain::{Leg, Strategy, StrategyKind};
use crate::error::PayoffError;
use crate::grid::InstrumentProfile;

/// Strategy preset builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyBuilder;

impl StrategyBuilder {
    /// Create a new strategy builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build an equity collar.
    ///
    /// One unit of `quantity` holds the underlying, sells the call, and
    /// buys the put.
    ///
    /// # Errors
    ///
    /// Returns an error if the put strike is not below spot, the strikes
    /// are not ordered put-below-call, or leg validation fails.
    pub fn collar(
        &self,
        spot: Decimal,
        call_strike: Decimal,
        call_premium: Decimal,
        put_strike: Decimal,
        put_premium: Decimal,
        quantity: Decimal,
    ) -> Result<Strategy, PayoffError> {
        Self::collar_with_profile(
            InstrumentProfile::equity(),
            spot,
            call_strike,
            call_premium,
            put_strike,
            put_premium,
            quantity,
        )
    }

    /// Build a crypto collar: same legs as [`StrategyBuilder::collar`]
    /// with the wider crypto grid margins.
    ///
    /// # Errors
    ///
    /// Same conditions as [`StrategyBuilder::collar`].
    pub fn crypto_collar(
        &self,
        spot: Decimal,
        call_strike: Decimal,
        call_premium: Decimal,
        put_strike: Decimal,
        put_premium: Decimal,
        quantity: Decimal,
    ) -> Result<Strategy, PayoffError> {
        Self::collar_with_profile(
            InstrumentProfile::crypto(),
            spot,
            call_strike,
            call_premium,
            put_strike,
            put_premium,
            quantity,
        )
    }

    fn collar_with_profile(
        profile: InstrumentProfile,
        spot: Decimal,
        call_strike: Decimal,
        call_premium: Decimal,
        put_strike: Decimal,
        put_premium: Decimal,
        quantity: Decimal,
    ) -> Result<Strategy, PayoffError> {
        if put_strike >= spot {
            return Err(PayoffError::InvalidStrategy {
                message: format!("Collar put strike {put_strike} must be below spot {spot}"),
            });
        }
        if put_strike >= call_strike {
            return Err(PayoffError::InvalidStrategy {
                message: format!(
                    "Collar put strike {put_strike} must be below call strike {call_strike}"
                ),
            });
        }

        Strategy::new(
            StrategyKind::Collar,
            vec![
                Leg::long_underlying(quantity),
                Leg::short_call(call_strike, call_premium, quantity),
                Leg::long_put(put_strike, put_premium, quantity),
            ],
            spot,
            profile,
        )
    }

    /// Build a covered call: long underlying plus a short call.
    ///
    /// In-the-money call strikes are accepted; the intrinsic part of the
    /// premium simply becomes downside cushion.
    ///
    /// # Errors
    ///
    /// Returns an error if leg validation fails.
    pub fn covered_call(
        &self,
        spot: Decimal,
        call_strike: Decimal,
        call_premium: Decimal,
        quantity: Decimal,
    ) -> Result<Strategy, PayoffError> {
        Strategy::new(
            StrategyKind::CoveredCall,
            vec![
                Leg::long_underlying(quantity),
                Leg::short_call(call_strike, call_premium, quantity),
            ],
            spot,
            InstrumentProfile::equity(),
        )
    }

    /// Build a tail hedge: long puts financed by short calls, no
    /// underlying leg.
    ///
    /// `put` and `call` are `(strike, premium, quantity)` triples;
    /// quantities may be fractional (the call count comes from a
    /// financing-ratio sizing upstream).
    ///
    /// # Errors
    ///
    /// Returns an error if the put strike is not below the call strike or
    /// leg validation fails.
    pub fn tail_hedge(
        &self,
        spot: Decimal,
        put: (Decimal, Decimal, Decimal),
        call: (Decimal, Decimal, Decimal),
    ) -> Result<Strategy, PayoffError> {
        let (put_strike, put_premium, put_quantity) = put;
        let (call_strike, call_premium, call_quantity) = call;

        if put_strike >= call_strike {
            return Err(PayoffError::InvalidStrategy {
                message: format!(
                    "Tail hedge put strike {put_strike} must be below call strike {call_strike}"
                ),
            });
        }

        Strategy::new(
            StrategyKind::TailHedge,
            vec![
                Leg::long_put(put_strike, put_premium, put_quantity),
                Leg::short_call(call_strike, call_premium, call_quantity),
            ],
            spot,
            InstrumentProfile::crypto(),
        )
    }

    /// Build a custom strategy from an arbitrary leg list.
    ///
    /// # Errors
    ///
    /// Returns an error if leg validation fails.
    pub fn custom(
        &self,
        kind: StrategyKind,
        legs: Vec<Leg>,
        spot: Decimal,
        profile: InstrumentProfile,
    ) -> Result<Strategy, PayoffError> {
        Strategy::new(kind, legs, spot, profile)
    }
}
