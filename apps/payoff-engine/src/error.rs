//! Error types for strategy validation.
//!
//! All validation happens before any grid computation begins; curve
//! evaluation itself is total and has no failure path.

use thiserror::Error;

/// Errors from strategy validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayoffError {
    /// Strategy-level invariant violated.
    #[error("Invalid strategy: {message}")]
    InvalidStrategy {
        /// Error message.
        message: String,
    },

    /// A leg is missing a field required for evaluation.
    #[error("Malformed leg `{label}` at index {index}: {message}")]
    MalformedLeg {
        /// Index of the offending leg within the strategy.
        index: usize,
        /// Resolved label of the offending leg.
        label: String,
        /// Error message.
        message: String,
    },
}
