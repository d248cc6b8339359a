//! Deterministic RNG utilities for reproducible tests.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use stance_core::{Branch, EnumKey, Limb};

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Deterministic joint values in `[-pi, pi)`.
pub fn deterministic_vec(dim: usize, seed: u64) -> Vec<f64> {
    let mut rng = seeded_rng(seed);
    (0..dim)
        .map(|_| rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI))
        .collect()
}

/// Random subset of limbs in shuffled order (possibly empty).
pub fn random_limb_subset(rng: &mut ChaCha8Rng) -> Vec<Limb> {
    random_subset(rng)
}

/// Random subset of branches in shuffled order (possibly empty).
pub fn random_branch_subset(rng: &mut ChaCha8Rng) -> Vec<Branch> {
    random_subset(rng)
}

fn random_subset<K: EnumKey>(rng: &mut ChaCha8Rng) -> Vec<K> {
    let mut keys: Vec<K> = K::ALL.iter().copied().filter(|_| rng.gen_bool(0.5)).collect();
    keys.shuffle(rng);
    keys
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
