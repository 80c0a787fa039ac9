//! Selection strategies.
//!
//! Selection produces the parent pool for one round of reproduction. All
//! strategies return a sequence the same length as the input population
//! and assume minimization (lower fitness is better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::GaError;
use crate::individual::Individual;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use std::cmp::Ordering;

/// Default tournament group size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Selection strategy for building the parent pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Repeat n times: sample `k` individuals with replacement, keep the
    /// one with minimum fitness.
    ///
    /// Higher `k` means stronger selection pressure; `k = 1` degenerates
    /// to uniform resampling.
    Tournament(usize),

    /// The population sorted ascending by fitness. A permutation: no
    /// truncation, no resampling.
    Rank,

    /// n uniform draws with replacement. Pure random resampling with no
    /// fitness pressure.
    Panmixia,

    /// Fitness-proportionate (roulette) selection with weight
    /// `1 / fitness`, so every fitness must be positive and finite.
    Proportional,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(DEFAULT_TOURNAMENT_SIZE)
    }
}

impl Selection {
    /// Applies the strategy to a population snapshot.
    ///
    /// # Panics
    /// Panics if `individuals` is empty.
    pub(crate) fn apply<R: Rng>(
        &self,
        individuals: &[Individual],
        rng: &mut R,
    ) -> Result<Vec<Individual>, GaError> {
        assert!(
            !individuals.is_empty(),
            "cannot select from empty population"
        );
        match self {
            Selection::Tournament(k) => Ok(tournament(individuals, *k, rng)),
            Selection::Rank => Ok(rank(individuals)),
            Selection::Panmixia => Ok(panmixia(individuals, rng)),
            Selection::Proportional => proportional(individuals, rng),
        }
    }
}

fn tournament<R: Rng>(individuals: &[Individual], k: usize, rng: &mut R) -> Vec<Individual> {
    let k = k.max(1);
    let n = individuals.len();
    (0..n)
        .map(|_| {
            let mut best = &individuals[rng.random_range(0..n)];
            for _ in 1..k {
                let contender = &individuals[rng.random_range(0..n)];
                if contender.fitness() < best.fitness() {
                    best = contender;
                }
            }
            best.clone()
        })
        .collect()
}

fn rank(individuals: &[Individual]) -> Vec<Individual> {
    let mut sorted = individuals.to_vec();
    sorted.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

fn panmixia<R: Rng>(individuals: &[Individual], rng: &mut R) -> Vec<Individual> {
    let n = individuals.len();
    (0..n)
        .map(|_| individuals[rng.random_range(0..n)].clone())
        .collect()
}

/// Roulette draw over weights `1 / fitness`.
///
/// Degenerate weights (fitness zero, negative, or non-finite) fail with
/// [`GaError::DegenerateWeights`] rather than being clamped, so a
/// misconfigured objective is surfaced instead of silently reweighted.
fn proportional<R: Rng>(
    individuals: &[Individual],
    rng: &mut R,
) -> Result<Vec<Individual>, GaError> {
    let weights: Vec<f64> = individuals.iter().map(|ind| 1.0 / ind.fitness()).collect();
    if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
        return Err(GaError::DegenerateWeights);
    }
    let dist = WeightedIndex::new(&weights).map_err(|_| GaError::DegenerateWeights)?;
    Ok((0..individuals.len())
        .map(|_| individuals[dist.sample(rng)].clone())
        .collect())
}
