//! Price-grid construction.
//!
//! The grid spans the strategy's strikes and spot with profile-specific
//! margins, stepping at a width selected from the price range so point
//! counts stay bounded across instruments from penny stocks to BTC.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Strategy;

/// Decimal places for emitted grid prices.
const PRICE_SCALE: u32 = 2;

// ============================================================================
// Instrument Profiles
// ============================================================================

/// Anchor margins and base step for an instrument class.
///
/// Data, not control flow: a new asset class is a new profile value, not
/// a new code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentProfile {
    /// Multiplier applied to the lowest strike/spot anchor.
    pub low_margin: Decimal,
    /// Multiplier applied to the highest strike/spot anchor.
    pub high_margin: Decimal,
    /// Step used when the range falls below every bracket.
    pub base_step: Decimal,
}

impl InstrumentProfile {
    /// Strikes-in-local-currency instruments (equities, index options).
    #[must_use]
    pub fn equity() -> Self {
        Self {
            low_margin: Decimal::new(90, 2),   // 0.90
            high_margin: Decimal::new(110, 2), // 1.10
            base_step: Decimal::new(5, 0),
        }
    }

    /// Crypto underlyings: wider margins for high-volatility price action.
    #[must_use]
    pub fn crypto() -> Self {
        Self {
            low_margin: Decimal::new(80, 2),   // 0.80
            high_margin: Decimal::new(120, 2), // 1.20
            base_step: Decimal::new(5, 0),
        }
    }

    /// Smallest instrument class: unit step for low-priced underlyings.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            low_margin: Decimal::new(90, 2),
            high_margin: Decimal::new(110, 2),
            base_step: Decimal::ONE,
        }
    }
}

impl Default for InstrumentProfile {
    fn default() -> Self {
        Self::equity()
    }
}

// ============================================================================
// Step Table
// ============================================================================

/// One range-to-step bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepBracket {
    /// Minimum range (inclusive) at which this bracket applies.
    pub min_range: Decimal,
    /// Grid step width for ranges in this bracket.
    pub step: Decimal,
}

/// Range-to-step lookup table.
///
/// The largest applicable bracket wins, so a tie at a threshold takes the
/// coarser step and point counts stay bounded as ranges grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTable {
    /// Brackets; order is irrelevant to selection.
    pub brackets: Vec<StepBracket>,
}

impl Default for StepTable {
    fn default() -> Self {
        Self {
            brackets: vec![
                StepBracket {
                    min_range: Decimal::new(20_000, 0),
                    step: Decimal::new(100, 0),
                },
                StepBracket {
                    min_range: Decimal::new(10_000, 0),
                    step: Decimal::new(50, 0),
                },
                StepBracket {
                    min_range: Decimal::new(5_000, 0),
                    step: Decimal::new(25, 0),
                },
                StepBracket {
                    min_range: Decimal::new(1_000, 0),
                    step: Decimal::new(10, 0),
                },
            ],
        }
    }
}

impl StepTable {
    /// Step for a price range; ranges below every bracket fall back to
    /// `base_step`.
    #[must_use]
    pub fn step_for(&self, range: Decimal, base_step: Decimal) -> Decimal {
        self.brackets
            .iter()
            .filter(|bracket| range >= bracket.min_range)
            .max_by_key(|bracket| bracket.min_range)
            .map_or(base_step, |bracket| bracket.step)
    }
}

// ============================================================================
// Price Grid
// ============================================================================

/// Strictly ascending terminal-price axis plus the step that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceGrid {
    prices: Vec<Decimal>,
    step: Decimal,
}

impl PriceGrid {
    /// Build the grid for a strategy using the default step table.
    #[must_use]
    pub fn build(strategy: &Strategy) -> Self {
        Self::build_with(strategy, &StepTable::default())
    }

    /// Build the grid for a strategy with a custom step table.
    ///
    /// Anchors are `min(strikes, spot) * low_margin` and
    /// `max(strikes, spot) * high_margin`. Emission walks from the low
    /// anchor in `step` increments, rounding each price to 2 decimal
    /// places, and stops at the first emitted price at or beyond the high
    /// anchor, so the grid always brackets every strike and the spot.
    ///
    /// Total by construction: a collapsed range (or a non-positive step
    /// from a custom table) degrades to the single-point grid `[spot]`
    /// rather than failing.
    #[must_use]
    pub fn build_with(strategy: &Strategy, table: &StepTable) -> Self {
        let profile = strategy.profile();
        let spot = strategy.spot();

        let mut low_ref = spot;
        let mut high_ref = spot;
        for strike in strategy.strikes() {
            low_ref = low_ref.min(strike);
            high_ref = high_ref.max(strike);
        }

        let low_anchor = low_ref * profile.low_margin;
        let high_anchor = high_ref * profile.high_margin;
        let range = high_anchor - low_anchor;
        if range <= Decimal::ZERO {
            return Self::single_point(spot, profile.base_step);
        }

        let step = table.step_for(range, profile.base_step);
        if step <= Decimal::ZERO {
            return Self::single_point(spot, profile.base_step);
        }

        let mut prices = Vec::new();
        let mut offset = 0u32;
        loop {
            let price = (low_anchor + step * Decimal::from(offset)).round_dp(PRICE_SCALE);
            prices.push(price);
            if price >= high_anchor {
                break;
            }
            offset += 1;
        }
        Self { prices, step }
    }

    fn single_point(spot: Decimal, step: Decimal) -> Self {
        Self {
            prices: vec![spot],
            step,
        }
    }

    /// Grid prices, strictly ascending.
    #[must_use]
    pub fn prices(&self) -> &[Decimal] {
        &self.prices
    }

    /// Step width between consecutive prices.
    #[must_use]
    pub const fn step(&self) -> Decimal {
        self.step
    }

    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when the grid holds no points (never produced by `build`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
