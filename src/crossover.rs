//! Crossover strategies.
//!
//! Crossover recombines two parents into two children of the same length.
//! Both strategies operate on real-valued chromosomes only; gray-coded
//! populations have no supported crossover and fail with
//! [`GaError::CrossoverEncodingMismatch`].
//!
//! Children start as clones of the parents and then have their chromosome
//! replaced, so their fitness is stale until the next evaluation pass.

use crate::error::GaError;
use crate::individual::{Chromosome, Encoding, Individual};
use rand::Rng;

/// Blend factor for [`Crossover::Linear`].
const LINEAR_ALPHA: f64 = 0.5;

/// Crossover strategy for recombining two parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// Uniform crossover: per gene, a fair coin decides which parent each
    /// child inherits from.
    Discrete,

    /// Arithmetic crossover with `alpha = 0.5`:
    /// `child1[i] = alpha * p1[i] + (1 - alpha) * p2[i]` and the mirror
    /// for `child2`. At this alpha both children are the per-gene mean.
    Linear,
}

impl Crossover {
    /// Applies the strategy to a parent pair from a population with the
    /// given encoding.
    pub(crate) fn apply<R: Rng>(
        &self,
        encoding: Encoding,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Result<(Individual, Individual), GaError> {
        if encoding != Encoding::Discrete {
            return Err(GaError::CrossoverEncodingMismatch {
                strategy: *self,
                encoding,
            });
        }
        if parent1.len() != parent2.len() {
            return Err(GaError::DimensionMismatch {
                left: parent1.len(),
                right: parent2.len(),
            });
        }
        match self {
            Crossover::Discrete => Ok(discrete(parent1, parent2, rng)),
            Crossover::Linear => Ok(linear(parent1, parent2)),
        }
    }
}

fn discrete<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    let (Chromosome::Real(g1), Chromosome::Real(g2)) =
        (parent1.chromosome(), parent2.chromosome())
    else {
        // Guarded by the encoding check in `apply`; a Discrete population
        // holds real chromosomes only.
        return (parent1.clone(), parent2.clone());
    };

    let mut c1 = Vec::with_capacity(g1.len());
    let mut c2 = Vec::with_capacity(g2.len());
    for i in 0..g1.len() {
        if rng.random_bool(0.5) {
            c1.push(g1[i]);
            c2.push(g2[i]);
        } else {
            c1.push(g2[i]);
            c2.push(g1[i]);
        }
    }

    build_children(parent1, parent2, c1, c2)
}

fn linear(parent1: &Individual, parent2: &Individual) -> (Individual, Individual) {
    let (Chromosome::Real(g1), Chromosome::Real(g2)) =
        (parent1.chromosome(), parent2.chromosome())
    else {
        return (parent1.clone(), parent2.clone());
    };

    let c1 = g1
        .iter()
        .zip(g2)
        .map(|(&a, &b)| LINEAR_ALPHA * a + (1.0 - LINEAR_ALPHA) * b)
        .collect();
    let c2 = g1
        .iter()
        .zip(g2)
        .map(|(&a, &b)| (1.0 - LINEAR_ALPHA) * a + LINEAR_ALPHA * b)
        .collect();

    build_children(parent1, parent2, c1, c2)
}

fn build_children(
    parent1: &Individual,
    parent2: &Individual,
    genes1: Vec<f64>,
    genes2: Vec<f64>,
) -> (Individual, Individual) {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    child1.set_chromosome(Chromosome::Real(genes1));
    child2.set_chromosome(Chromosome::Real(genes2));
    (child1, child2)
}
