//! Domain types: legs and validated strategies.

mod leg;
mod strategy;

// Leg types
pub use leg::{Leg, LegKind, LegSide};

// Strategy aggregate
pub use strategy::{Strategy, StrategyKind};
