//! Error types for the strategy module.

use thiserror::Error;

/// Errors that can occur when selecting an ordering strategy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// The name does not match any known strategy.
    #[error("Unknown ordering strategy: {0} (expected one of: fifo, filo, random, black_hole)")]
    UnknownStrategy(String),
}
