//! Data-parallel batch evaluation.
//!
//! Curve computations share nothing and mutate nothing, so a batch of
//! strategies maps cleanly over the rayon pool. Small batches stay
//! sequential where pool dispatch costs more than the work itself.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::PayoffCurve;
use crate::domain::Strategy;
use crate::error::PayoffError;

/// Configuration for batch evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Minimum batch size before work moves to the rayon pool.
    pub min_parallel: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { min_parallel: 4 }
    }
}

/// Compute payoff curves for many independent strategies.
///
/// Order-preserving: result `i` belongs to `strategies[i]`. Per-strategy
/// validation failures land in the corresponding slot instead of aborting
/// the batch.
#[must_use]
pub fn compute_batch(
    strategies: &[Strategy],
    config: &BatchConfig,
) -> Vec<Result<PayoffCurve, PayoffError>> {
    if strategies.len() < config.min_parallel {
        return strategies.iter().map(PayoffCurve::compute).collect();
    }

    debug!(
        count = strategies.len(),
        min_parallel = config.min_parallel,
        "Computing payoff curves in parallel"
    );
    strategies.par_iter().map(PayoffCurve::compute).collect()
}
