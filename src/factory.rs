//! Random individual construction.
//!
//! Produces randomly initialized individuals for a given encoding and
//! bounds. Used by [`Population::new`](crate::Population::new) and by
//! crossover-free callers that want to seed their own populations.

use crate::bounds::Bounds;
use crate::codec;
use crate::individual::{Encoding, Individual};
use rand::Rng;

/// Creates a randomly initialized individual.
///
/// - [`Encoding::Discrete`]: `dimensionality` independent uniform samples
///   over the bounds.
/// - [`Encoding::GrayCode`]: `dimensionality` uniform samples, each
///   gray-encoded via [`codec::encode_real`].
pub fn create<R: Rng>(
    encoding: Encoding,
    dimensionality: usize,
    bounds: &Bounds,
    rng: &mut R,
) -> Individual {
    let mut individual = Individual::new(encoding, dimensionality);
    match encoding {
        Encoding::Discrete => {
            for _ in 0..dimensionality {
                individual.push_gene(bounds.sample(rng));
            }
        }
        Encoding::GrayCode => {
            for _ in 0..dimensionality {
                individual.push_code(codec::encode_real(bounds.sample(rng), bounds));
            }
        }
    }
    individual
}
