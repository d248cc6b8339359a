//! Base full-body kinematic state for legged robots.
//!
//! [`QuadrupedState`] owns the whole-body joint position and velocity vectors
//! together with the floating-base pose and twist. Vectors are sized once
//! from a [`Topology`](stance_core::Topology) and never resized; how they are
//! partitioned into per-limb windows is the topology's business.

pub mod state;

pub use state::QuadrupedState;
