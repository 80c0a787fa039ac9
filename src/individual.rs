//! Candidate solutions and their chromosomes.
//!
//! An [`Individual`] is one candidate solution: a chromosome in one of two
//! encodings plus a cached fitness value. The chromosome variant is fixed
//! at construction and matches the owning population's configured
//! [`Encoding`]; only its contents change afterwards.
//!
//! Lower fitness is better (minimization). Fitness starts at the
//! `f64::INFINITY` sentinel and is overwritten by
//! [`Population::evaluate`](crate::Population::evaluate).

use crate::bounds::Bounds;
use crate::codec;
use rand::Rng;
use std::fmt;

/// Chromosome encoding for a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Real-valued gene vector.
    Discrete,
    /// Vector of 8-bit reflected Gray codes, one per dimension.
    GrayCode,
}

/// Chromosome payload. The variant never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Chromosome {
    Real(Vec<f64>),
    Gray(Vec<u8>),
}

impl Chromosome {
    /// Number of genes.
    pub fn len(&self) -> usize {
        match self {
            Chromosome::Real(genes) => genes.len(),
            Chromosome::Gray(codes) => codes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoding this chromosome belongs to.
    pub fn encoding(&self) -> Encoding {
        match self {
            Chromosome::Real(_) => Encoding::Discrete,
            Chromosome::Gray(_) => Encoding::GrayCode,
        }
    }

    /// Decodes into the plain numeric vector consumed by the objective.
    ///
    /// Real chromosomes decode to themselves; gray chromosomes decode each
    /// code to its unsigned 0–255 value via [`codec::decode_gene`].
    pub fn decode(&self) -> Vec<f64> {
        match self {
            Chromosome::Real(genes) => genes.clone(),
            Chromosome::Gray(codes) => codes.iter().map(|&c| codec::decode_gene(c)).collect(),
        }
    }
}

/// A single candidate solution: one chromosome plus its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: f64,
}

impl Individual {
    /// Allocates an empty individual of the given encoding, reserving
    /// capacity for `dimensionality` genes. Fitness starts at the
    /// `f64::INFINITY` sentinel.
    pub fn new(encoding: Encoding, dimensionality: usize) -> Self {
        let chromosome = match encoding {
            Encoding::Discrete => Chromosome::Real(Vec::with_capacity(dimensionality)),
            Encoding::GrayCode => Chromosome::Gray(Vec::with_capacity(dimensionality)),
        };
        Self {
            chromosome,
            fitness: f64::INFINITY,
        }
    }

    /// Appends a real-valued gene.
    ///
    /// Calling this on a gray-coded individual is a programming error; it
    /// is reported in debug builds and ignored in release builds.
    pub fn push_gene(&mut self, value: f64) {
        match &mut self.chromosome {
            Chromosome::Real(genes) => genes.push(value),
            Chromosome::Gray(_) => {
                debug_assert!(false, "push_gene called on a gray-coded individual")
            }
        }
    }

    /// Appends an 8-bit gray code.
    ///
    /// Calling this on a real-valued individual is a programming error; it
    /// is reported in debug builds and ignored in release builds.
    pub fn push_code(&mut self, code: u8) {
        match &mut self.chromosome {
            Chromosome::Gray(codes) => codes.push(code),
            Chromosome::Real(_) => {
                debug_assert!(false, "push_code called on a real-valued individual")
            }
        }
    }

    /// With probability `probability`, replaces one uniformly chosen gene:
    /// real genes get a fresh uniform draw from `bounds`, gray genes have
    /// one uniformly chosen bit flipped. At most one gene changes per call.
    pub fn mutate<R: Rng>(&mut self, probability: f64, bounds: &Bounds, rng: &mut R) {
        if self.chromosome.is_empty() {
            return;
        }
        if rng.random_range(0.0..1.0) >= probability {
            return;
        }
        let ix = rng.random_range(0..self.chromosome.len());
        match &mut self.chromosome {
            Chromosome::Real(genes) => genes[ix] = bounds.sample(rng),
            Chromosome::Gray(codes) => codes[ix] ^= 1u8 << rng.random_range(0..8),
        }
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Replaces the chromosome contents. The variant must not change.
    pub fn set_chromosome(&mut self, chromosome: Chromosome) {
        debug_assert_eq!(
            self.chromosome.encoding(),
            chromosome.encoding(),
            "chromosome variant is fixed at construction"
        );
        self.chromosome = chromosome;
    }

    /// Number of genes, for either encoding.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Individual, fitness: {} (", self.fitness)?;
        match &self.chromosome {
            Chromosome::Real(genes) => {
                for (i, gene) in genes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{gene}")?;
                }
            }
            Chromosome::Gray(codes) => {
                for (i, code) in codes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{code:08b}")?;
                }
            }
        }
        write!(f, ")")
    }
}
