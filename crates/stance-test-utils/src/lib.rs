//! Shared test fixtures and utilities for stance crates.
//!
//! Provides standard topologies, pre-initialized execution states, and
//! deterministic RNG helpers for sweeping limb and branch subsets.

pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use fixtures::{all_subsets, heterogeneous_topology, initialized_quadruped, quadruped_state};
pub use rng::{deterministic_vec, random_branch_subset, random_limb_subset, seeded_rng};
