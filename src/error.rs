//! Error types for the GA core.
//!
//! Every variant is fatal for the run in progress: the runner propagates
//! it out of [`GaRunner::run`](crate::GaRunner::run) and the caller's only
//! recovery is to fix the configuration (or discard the run and start
//! another).

use crate::crossover::Crossover;
use crate::individual::Encoding;
use thiserror::Error;

/// Error type for GA configuration and runtime failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// No selection strategy configured.
    #[error("no selection strategy configured")]
    SelectionUnconfigured,

    /// No crossover strategy configured.
    #[error("no crossover strategy configured")]
    CrossoverUnconfigured,

    /// The crossover strategy does not support the population's encoding.
    #[error("{strategy:?} crossover is not supported for {encoding:?} encoding")]
    CrossoverEncodingMismatch {
        strategy: Crossover,
        encoding: Encoding,
    },

    /// Two individuals selected for crossover have unequal chromosome
    /// lengths. Indicates a population-invariant violation.
    #[error("parent chromosome lengths differ: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Proportional selection weights could not form a distribution.
    ///
    /// Weights are `1 / fitness`, so every fitness must be positive and
    /// finite.
    #[error("proportional selection requires positive finite fitness for every individual")]
    DegenerateWeights,

    /// A construction-time precondition failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
