//! Helpers for generating random point data in tests and benches.
use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::float::kdtree::Axis;
use crate::traits::Content;

/// A deterministic RNG so that randomized property tests stay reproducible.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn rand_data_point<A: Axis, const K: usize, R: Rng>(rng: &mut R) -> [A; K]
where
    Standard: Distribution<A>,
{
    let mut point = [A::zero(); K];
    for val in point.iter_mut() {
        *val = rng.gen::<A>();
    }
    point
}

pub fn rand_data_entry<A: Axis, T: Content, const K: usize, R: Rng>(rng: &mut R) -> ([A; K], T)
where
    Standard: Distribution<A>,
    Standard: Distribution<T>,
{
    (rand_data_point::<A, K, R>(rng), rng.gen::<T>())
}
