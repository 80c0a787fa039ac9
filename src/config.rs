//! Run configuration.
//!
//! [`GaConfig`] holds every parameter that controls one run. It is
//! consumed, not owned, by the runner and must not change for the run's
//! duration.

use crate::bounds::Bounds;
use crate::crossover::Crossover;
use crate::error::GaError;
use crate::individual::Encoding;
use crate::selection::Selection;

/// Configuration for one GA run.
///
/// # Defaults
///
/// ```
/// use evocore::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_epochs, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evocore::{Crossover, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_crossover(Crossover::Linear)
///     .with_mutation_rate(0.05);
/// ```
///
/// Selection and crossover strategies have no default: a run started
/// without them fails with [`GaError::SelectionUnconfigured`] or
/// [`GaError::CrossoverUnconfigured`].
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Genes per chromosome.
    pub dimensionality: usize,

    /// Chromosome encoding for every individual.
    pub encoding: Encoding,

    /// Closed per-gene interval, applied at initialization and mutation.
    pub bounds: Bounds,

    /// Selection strategy for building the parent pool.
    pub selection: Option<Selection>,

    /// Crossover strategy for recombining parent pairs.
    pub crossover: Option<Crossover>,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of epochs before termination.
    pub max_epochs: usize,

    /// Fitness threshold at or below which the run stops early.
    ///
    /// The default of `f64::NEG_INFINITY` never stops a run early.
    pub target: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Ignored unless the crate's `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            dimensionality: 1,
            encoding: Encoding::Discrete,
            bounds: Bounds::default(),
            selection: None,
            crossover: None,
            mutation_rate: 0.1,
            max_epochs: 500,
            target: f64::NEG_INFINITY,
            parallel: cfg!(feature = "parallel"),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of genes per chromosome.
    pub fn with_dimensionality(mut self, n: usize) -> Self {
        self.dimensionality = n;
        self
    }

    /// Sets the chromosome encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the per-gene bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = Some(crossover);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the epoch budget.
    pub fn with_max_epochs(mut self, n: usize) -> Self {
        self.max_epochs = n;
        self
    }

    /// Sets the early-stop fitness target.
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Validates the configuration.
    ///
    /// Missing selection/crossover strategies are deliberately not checked
    /// here; they surface as run-time errors when the corresponding phase
    /// is reached.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 1 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.dimensionality < 1 {
            return Err(GaError::InvalidConfig(
                "dimensionality must be at least 1".into(),
            ));
        }
        self.bounds.validate()?;
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfig(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        if self.max_epochs < 1 {
            return Err(GaError::InvalidConfig(
                "max_epochs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.dimensionality, 1);
        assert_eq!(config.encoding, Encoding::Discrete);
        assert_eq!(config.bounds, Bounds::new(-1.0, 1.0));
        assert!(config.selection.is_none());
        assert!(config.crossover.is_none());
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.max_epochs, 500);
        assert_eq!(config.target, f64::NEG_INFINITY);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_dimensionality(5)
            .with_encoding(Encoding::GrayCode)
            .with_bounds(Bounds::new(0.0, 3.0))
            .with_selection(Selection::Rank)
            .with_crossover(Crossover::Discrete)
            .with_mutation_rate(0.05)
            .with_max_epochs(100)
            .with_target(-4.65)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.dimensionality, 5);
        assert_eq!(config.encoding, Encoding::GrayCode);
        assert_eq!(config.bounds, Bounds::new(0.0, 3.0));
        assert_eq!(config.selection, Some(Selection::Rank));
        assert_eq!(config.crossover, Some(Crossover::Discrete));
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.max_epochs, 100);
        assert_eq!(config.target, -4.65);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_mutation_rate_clamped() {
        assert_eq!(GaConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-0.5).mutation_rate, 0.0);
    }

    #[test]
    fn test_with_tournament_size() {
        let config = GaConfig::default().with_tournament_size(5);
        assert_eq!(config.selection, Some(Selection::Tournament(5)));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        assert!(GaConfig::default()
            .with_population_size(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_dimensionality() {
        assert!(GaConfig::default()
            .with_dimensionality(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        assert!(GaConfig::default()
            .with_bounds(Bounds::new(2.0, 1.0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_epochs() {
        assert!(GaConfig::default().with_max_epochs(0).validate().is_err());
    }

    #[test]
    fn test_validate_direct_mutation_rate_write() {
        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_does_not_require_strategies() {
        // Unset strategies are a run-time failure, not a config one.
        let config = GaConfig::default();
        assert!(config.selection.is_none());
        assert!(config.validate().is_ok());
    }
}
