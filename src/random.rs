//! Seeded random number generation.
//!
//! Every stochastic operation in this crate takes a `&mut R where R: Rng`
//! argument instead of constructing its own generator, so a run seeded
//! through [`create_rng`] is fully reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
