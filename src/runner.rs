//! Epoch-loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → termination check → selection →
//! reproduction → wholesale replacement → repeat.

use crate::config::GaConfig;
use crate::error::GaError;
use crate::individual::Individual;
use crate::population::Population;
use crate::random::create_rng;
use std::cmp::Ordering;

/// Result of one GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best individual observed across all epochs.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of epochs executed.
    pub epochs: usize,

    /// Whether the run stopped because the target fitness was reached.
    pub reached_target: bool,

    /// Best-so-far fitness at the end of each epoch.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::default()
///     .with_selection(Selection::Tournament(3))
///     .with_crossover(Crossover::Linear)
///     .with_seed(42);
/// let result = GaRunner::run(&config, &|x| x.iter().map(|v| v * v).sum())?;
/// println!("best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until the target fitness is reached or the epoch budget
    /// is exhausted, returning the best individual observed overall.
    ///
    /// The objective maps a decoded gene vector to a fitness value; lower
    /// is better. It is treated as opaque and invoked once per individual
    /// per epoch.
    pub fn run<F>(config: &GaConfig, objective: &F) -> Result<GaResult, GaError>
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population = Population::new(
            config.population_size,
            config.dimensionality,
            config.encoding,
            &config.bounds,
            &mut rng,
        );

        let mut best: Option<Individual> = None;
        let mut best_fitness = f64::INFINITY;
        let mut fitness_history = Vec::with_capacity(config.max_epochs);

        for epoch in 0..config.max_epochs {
            population.evaluate(objective, config.parallel);

            let epoch_best = find_best(population.individuals());
            if best.is_none() || epoch_best.fitness() < best_fitness {
                best_fitness = epoch_best.fitness();
                best = Some(epoch_best.clone());
            }
            fitness_history.push(best_fitness);

            if best_fitness <= config.target {
                return Ok(GaResult {
                    best: best.expect("best is set once an epoch has been evaluated"),
                    best_fitness,
                    epochs: epoch + 1,
                    reached_target: true,
                    fitness_history,
                });
            }

            let selected = population.select(config.selection, &mut rng)?;

            // Consecutive pairs; an odd tail wraps back to index 0. The
            // second child is dropped if it would overfill the set, so the
            // replacement always has exactly `population_size` members.
            let mut next_gen = Vec::with_capacity(selected.len());
            for i in (0..selected.len()).step_by(2) {
                let parent1 = &selected[i];
                let parent2 = &selected[(i + 1) % selected.len()];

                let (mut child1, mut child2) =
                    population.crossover(config.crossover, parent1, parent2, &mut rng)?;

                child1.mutate(config.mutation_rate, &config.bounds, &mut rng);
                child2.mutate(config.mutation_rate, &config.bounds, &mut rng);

                next_gen.push(child1);
                if next_gen.len() < selected.len() {
                    next_gen.push(child2);
                }
            }
            population.set_individuals(next_gen);
        }

        Ok(GaResult {
            best: best.expect("max_epochs >= 1 guarantees one evaluated epoch"),
            best_fitness,
            epochs: config.max_epochs,
            reached_target: false,
            fitness_history,
        })
    }
}

/// Find the individual with the best (lowest) fitness.
fn find_best(individuals: &[Individual]) -> &Individual {
    individuals
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        })
        .expect("population must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;
    use crate::crossover::Crossover;
    use crate::individual::Encoding;
    use crate::selection::Selection;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn base_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_dimensionality(3)
            .with_bounds(Bounds::new(-5.0, 5.0))
            .with_selection(Selection::Tournament(3))
            .with_crossover(Crossover::Linear)
            .with_mutation_rate(0.1)
            .with_max_epochs(50)
            .with_seed(42)
    }

    #[test]
    fn test_unreachable_target_runs_exact_epoch_count() {
        let config = base_config().with_max_epochs(17);
        let result = GaRunner::run(&config, &sphere).unwrap();
        assert_eq!(result.epochs, 17);
        assert_eq!(result.fitness_history.len(), 17);
        assert!(!result.reached_target);
    }

    #[test]
    fn test_best_is_best_across_all_epochs() {
        let config = base_config().with_max_epochs(30);
        let result = GaRunner::run(&config, &sphere).unwrap();
        // History tracks best-so-far, so it is non-increasing and ends at
        // the reported best.
        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
        assert_eq!(result.best.fitness(), result.best_fitness);
    }

    #[test]
    fn test_target_reached_stops_early() {
        // Constant objective hits any target at or above it immediately.
        let config = base_config().with_max_epochs(1000).with_target(0.5);
        let result = GaRunner::run(&config, &|_: &[f64]| 0.5).unwrap();
        assert_eq!(result.epochs, 1);
        assert!(result.reached_target);
        assert_eq!(result.best_fitness, 0.5);
    }

    #[test]
    fn test_sphere_converges() {
        let config = base_config()
            .with_population_size(50)
            .with_max_epochs(200)
            .with_mutation_rate(0.05);
        let result = GaRunner::run(&config, &sphere).unwrap();
        // 3D sphere over [-5, 5]^3 starts around 25 on average; selection
        // pressure plus averaging crossover must get well below that.
        assert!(
            result.best_fitness < 5.0,
            "expected convergence, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = base_config();
        let a = GaRunner::run(&config, &sphere).unwrap();
        let b = GaRunner::run(&config, &sphere).unwrap();
        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = GaRunner::run(&base_config().with_seed(1), &sphere).unwrap();
        let b = GaRunner::run(&base_config().with_seed(2), &sphere).unwrap();
        assert_ne!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_odd_population_size_is_preserved() {
        let config = base_config().with_population_size(5).with_max_epochs(10);
        let result = GaRunner::run(&config, &sphere).unwrap();
        assert_eq!(result.epochs, 10);
        assert_eq!(result.best.len(), 3);
    }

    #[test]
    fn test_missing_selection_fails() {
        let mut config = base_config();
        config.selection = None;
        assert_eq!(
            GaRunner::run(&config, &sphere),
            Err(GaError::SelectionUnconfigured)
        );
    }

    #[test]
    fn test_missing_crossover_fails() {
        let mut config = base_config();
        config.crossover = None;
        assert_eq!(
            GaRunner::run(&config, &sphere),
            Err(GaError::CrossoverUnconfigured)
        );
    }

    #[test]
    fn test_gray_population_has_no_crossover() {
        let config = base_config().with_encoding(Encoding::GrayCode);
        assert!(matches!(
            GaRunner::run(&config, &sphere),
            Err(GaError::CrossoverEncodingMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = base_config().with_population_size(0);
        assert!(matches!(
            GaRunner::run(&config, &sphere),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rank_and_discrete_crossover_run() {
        let config = base_config()
            .with_selection(Selection::Rank)
            .with_crossover(Crossover::Discrete)
            .with_max_epochs(30);
        let result = GaRunner::run(&config, &sphere).unwrap();
        assert_eq!(result.epochs, 30);
        assert!(result.best_fitness.is_finite());
    }

    #[test]
    fn test_panmixia_selection_runs() {
        let config = base_config()
            .with_selection(Selection::Panmixia)
            .with_max_epochs(10);
        let result = GaRunner::run(&config, &sphere).unwrap();
        assert_eq!(result.epochs, 10);
    }

    #[test]
    fn test_proportional_selection_runs_on_positive_objective() {
        // Shift sphere so fitness stays strictly positive.
        let config = base_config()
            .with_selection(Selection::Proportional)
            .with_max_epochs(20);
        let result = GaRunner::run(&config, &|x: &[f64]| sphere(x) + 1.0).unwrap();
        assert_eq!(result.epochs, 20);
        assert!(result.best_fitness >= 1.0);
    }

    #[test]
    fn test_proportional_selection_degenerate_objective_fails() {
        let config = base_config()
            .with_selection(Selection::Proportional)
            .with_max_epochs(20);
        // A zero-fitness individual makes 1/fitness unusable.
        assert_eq!(
            GaRunner::run(&config, &|_: &[f64]| 0.0),
            Err(GaError::DegenerateWeights)
        );
    }

    // Michalewicz in 5 dimensions over [0, pi], the original calling
    // pattern for this core: best-of-N independent short runs.
    #[test]
    fn test_michalewicz_best_of_n() {
        fn michalewicz(x: &[f64]) -> f64 {
            -x.iter()
                .enumerate()
                .map(|(i, &xi)| {
                    let arg = ((i + 1) as f64 / std::f64::consts::PI) * xi * xi;
                    xi.sin() * arg.sin().powi(2)
                })
                .sum::<f64>()
        }

        let mut best = f64::INFINITY;
        for seed in 0..5 {
            let config = GaConfig::default()
                .with_population_size(30)
                .with_dimensionality(5)
                .with_bounds(Bounds::new(0.0, std::f64::consts::PI))
                .with_selection(Selection::Rank)
                .with_crossover(Crossover::Discrete)
                .with_mutation_rate(0.05)
                .with_max_epochs(100)
                .with_seed(seed);
            let result = GaRunner::run(&config, &michalewicz).unwrap();
            best = best.min(result.best_fitness);
        }
        // The 5D optimum is near -4.69; independent runs should at least
        // find a clearly negative region.
        assert!(best < -2.0, "expected best < -2.0, got {best}");
    }
}
