//! Generational genetic-algorithm core.
//!
//! Maintains a population of candidate solutions to a user-supplied
//! real-valued objective function and iteratively improves it via
//! selection, crossover, and mutation until a target fitness is reached
//! or an epoch budget is exhausted. Single-objective, fixed
//! dimensionality, minimization over a closed interval per dimension.
//!
//! Two chromosome encodings are supported:
//!
//! - [`Encoding::Discrete`]: a real-valued gene vector.
//! - [`Encoding::GrayCode`]: one 8-bit reflected Gray code per dimension,
//!   decoded to its unsigned value before the objective is invoked (see
//!   [`codec`]).
//!
//! # Key Types
//!
//! - [`GaConfig`]: run parameters (population, encoding, strategies, budget)
//! - [`Population`]: individual set with selection/crossover/evaluation
//! - [`GaRunner`]: executes the epoch loop
//! - [`GaResult`]: best individual and run statistics
//!
//! # Example
//!
//! ```
//! use evocore::{Bounds, Crossover, GaConfig, GaRunner, Selection};
//!
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_dimensionality(3)
//!     .with_bounds(Bounds::new(-5.0, 5.0))
//!     .with_selection(Selection::Tournament(3))
//!     .with_crossover(Crossover::Linear)
//!     .with_max_epochs(50)
//!     .with_seed(42);
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! let result = GaRunner::run(&config, &sphere).unwrap();
//! assert!(result.best_fitness.is_finite());
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod bounds;
pub mod codec;
mod config;
mod crossover;
mod error;
pub mod factory;
mod individual;
mod population;
mod random;
mod runner;
mod selection;

pub use bounds::Bounds;
pub use config::GaConfig;
pub use crossover::Crossover;
pub use error::GaError;
pub use individual::{Chromosome, Encoding, Individual};
pub use population::Population;
pub use random::create_rng;
pub use runner::{GaResult, GaRunner};
pub use selection::{Selection, DEFAULT_TOURNAMENT_SIZE};
