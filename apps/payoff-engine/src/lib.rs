// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Payoff Engine - Rust Core Library
//!
//! Deterministic payoff-curve engine for multi-leg options strategies.
//!
//! # Pipeline (leaves → output)
//!
//! - **Domain**: validated inputs
//!   - `domain`: legs (call/put/underlying, long/short) and the
//!     [`Strategy`] aggregate with fail-fast validation
//! - **Sampling**: where to evaluate
//!   - `grid`: instrument profiles, the range-to-step table, and
//!     [`PriceGrid`] construction around strikes and spot
//! - **Curve**: what the strategy pays
//!   - `curve`: per-leg evaluation summed into a [`PayoffSeries`],
//!     breakeven interpolation, profit/loss splitting, and the
//!     [`PayoffCurve`] pipeline
//! - **Derived**: host-facing extras
//!   - `analytics`: moneyness, premium decomposition, screening metrics
//!   - `strategies`: collar / crypto collar / covered call / tail hedge
//!     presets
//!   - `batch`: data-parallel evaluation across independent strategies
//!
//! The engine is a pure function library: no I/O, no shared mutable
//! state, nothing persists beyond one call. Hosts that cache curves
//! should memoize on the [`Strategy`] value, which implements `Hash`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Modules
// =============================================================================

/// Option and strategy analytics.
pub mod analytics;

/// Batch evaluation over many strategies.
pub mod batch;

/// Payoff-curve pipeline stages.
pub mod curve;

/// Legs and validated strategies.
pub mod domain;

/// Validation error types.
pub mod error;

/// Price-grid construction.
pub mod grid;

/// Preset strategy constructors.
pub mod strategies;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::{Leg, LegKind, LegSide, Strategy, StrategyKind};
pub use error::PayoffError;

// Grid re-exports
pub use grid::{InstrumentProfile, PriceGrid, StepBracket, StepTable};

// Curve re-exports
pub use curve::{ChartPoint, PayoffCurve, PayoffSeries, PricePoint, SplitPoint};

// Derived-layer re-exports
pub use analytics::{Moneyness, OptionValue, StrategyMetrics};
pub use batch::{BatchConfig, compute_batch};
pub use strategies::StrategyBuilder;
