//! Payoff-curve pipeline: aggregation, breakevens, splitting.
//!
//! Stages are pure and synchronous; [`PayoffCurve::compute`] chains them
//! for one strategy. Each stage is also exported on its own for hosts
//! that sample or post-process differently.

mod aggregate;
mod breakeven;
mod pipeline;
mod split;

// Series aggregation
pub use aggregate::{PayoffSeries, PricePoint, aggregate};

// Breakeven extraction
pub use breakeven::breakevens;

// Profit/loss splitting
pub use split::{SplitPoint, split};

// Full pipeline
pub use pipeline::{ChartPoint, PayoffCurve};
