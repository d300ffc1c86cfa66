//! Seeded sampling used by group-law spot checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic sampler over element indices.
///
/// The same seed always yields the same sequence of indices, so sampled
/// verification runs are reproducible.
#[derive(Debug, Clone)]
pub struct SampleRng {
    rng: StdRng,
}

impl SampleRng {
    /// Creates a sampler from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a sampler for a named substream of `master_seed`.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    /// Three independent uniform indices in `0..bound`.
    pub fn triple(&mut self, bound: usize) -> [usize; 3] {
        [self.index(bound), self.index(bound), self.index(bound)]
    }
}

/// Derives the seed of a substream by hashing `(master_seed, substream)` with
/// SipHash-1-3 under fixed zero keys.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
