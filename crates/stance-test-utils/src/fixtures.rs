//! Topologies and execution states used across stance test suites.

use stance_core::{EnumKey, Limb, Topology};
use stance_executor::ExecutionState;

/// Uninitialized execution state for the standard 12-joint quadruped.
pub fn quadruped_state() -> ExecutionState {
    ExecutionState::new(Topology::quadruped())
}

/// Standard quadruped with every limb and branch initialized.
pub fn initialized_quadruped() -> ExecutionState {
    let mut state = quadruped_state();
    state.initialize_all();
    state
}

/// Quadruped with 2/3/3/4 joints on LF/RF/LH/RH (12 joints total).
pub fn heterogeneous_topology() -> Topology {
    Topology::new(&[
        (Limb::LeftFore, 2),
        (Limb::RightFore, 3),
        (Limb::LeftHind, 3),
        (Limb::RightHind, 4),
    ])
    .expect("heterogeneous fixture topology is valid")
}

/// Every subset of a closed enumeration, each in ordinal order.
///
/// `2^COUNT` entries, starting with the empty set.
pub fn all_subsets<K: EnumKey>() -> Vec<Vec<K>> {
    (0..1_u32 << K::COUNT)
        .map(|mask| {
            K::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, &k)| k)
                .collect()
        })
        .collect()
}
