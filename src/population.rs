//! Population container and strategy dispatch.
//!
//! A [`Population`] owns an ordered set of individuals sharing one
//! chromosome encoding. Order matters only during reproduction, where
//! index `i` pairs with `i + 1`. The individual set is replaced wholesale
//! at the end of each epoch (generational, non-overlapping replacement).

use crate::bounds::Bounds;
use crate::crossover::Crossover;
use crate::error::GaError;
use crate::factory;
use crate::individual::{Encoding, Individual};
use crate::selection::Selection;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fmt;

/// An ordered set of individuals sharing one chromosome encoding.
pub struct Population {
    individuals: Vec<Individual>,
    encoding: Encoding,
}

impl Population {
    /// Builds a population of `size` randomly initialized individuals.
    pub fn new<R: Rng>(
        size: usize,
        dimensionality: usize,
        encoding: Encoding,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let individuals = (0..size)
            .map(|_| factory::create(encoding, dimensionality, bounds, rng))
            .collect();
        Self {
            individuals,
            encoding,
        }
    }

    /// Builds a population from pre-constructed individuals.
    ///
    /// Every individual's chromosome tag must match `encoding`.
    pub fn from_individuals(encoding: Encoding, individuals: Vec<Individual>) -> Self {
        debug_assert!(
            individuals
                .iter()
                .all(|ind| ind.chromosome().encoding() == encoding),
            "all individuals must match the population encoding"
        );
        Self {
            individuals,
            encoding,
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Wholesale generational replacement of the individual set.
    pub fn set_individuals(&mut self, individuals: Vec<Individual>) {
        self.individuals = individuals;
    }

    /// Evaluates every individual: decode the chromosome, invoke the
    /// objective on the numeric vector, store the result.
    ///
    /// With the `parallel` feature enabled and `parallel == true`,
    /// evaluation runs across individuals via rayon; evaluation is the one
    /// step with no shared mutable state between individuals.
    pub fn evaluate<F>(&mut self, objective: &F, parallel: bool)
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        #[cfg(feature = "parallel")]
        if parallel {
            self.individuals.par_iter_mut().for_each(|ind| {
                let fitness = objective(&ind.chromosome().decode());
                ind.set_fitness(fitness);
            });
            return;
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for ind in &mut self.individuals {
            let fitness = objective(&ind.chromosome().decode());
            ind.set_fitness(fitness);
        }
    }

    /// Builds the parent pool with the configured strategy.
    ///
    /// `None` fails with [`GaError::SelectionUnconfigured`].
    pub fn select<R: Rng>(
        &self,
        strategy: Option<Selection>,
        rng: &mut R,
    ) -> Result<Vec<Individual>, GaError> {
        let strategy = strategy.ok_or(GaError::SelectionUnconfigured)?;
        strategy.apply(&self.individuals, rng)
    }

    /// Recombines a parent pair with the configured strategy.
    ///
    /// `None` fails with [`GaError::CrossoverUnconfigured`]; a strategy
    /// the population's encoding does not support fails with
    /// [`GaError::CrossoverEncodingMismatch`].
    pub fn crossover<R: Rng>(
        &self,
        strategy: Option<Crossover>,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Result<(Individual, Individual), GaError> {
        let strategy = strategy.ok_or(GaError::CrossoverUnconfigured)?;
        strategy.apply(self.encoding, parent1, parent2, rng)
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {} [", self.individuals.len())?;
        for (i, ind) in self.individuals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ind}")?;
        }
        write!(f, "]")
    }
}
