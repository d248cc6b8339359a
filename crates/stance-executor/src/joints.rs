//! Per-limb windows onto the whole-body joint vectors.
//!
//! Offsets and window lengths come from the base state's
//! [`Topology`](stance_core::Topology), so limbs with different joint counts
//! are addressed without any fixed stride arithmetic.

use std::ops::Range;

use stance_core::{Limb, StateError};
use stance_model::QuadrupedState;

/// Limb-level slicing of a whole-body joint state.
pub trait JointVectorView {
    /// Joint positions of `limb`.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` is not part of the topology.
    fn limb_joint_positions(&self, limb: Limb) -> Result<&[f64], StateError>;

    /// Overwrite the joint positions of `limb` in place.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` is not part of the topology,
    /// [`StateError::ShapeMismatch`] if `values` does not match its DOF.
    fn set_limb_joint_positions(&mut self, limb: Limb, values: &[f64]) -> Result<(), StateError>;

    /// Joint velocities of `limb`.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` is not part of the topology.
    fn limb_joint_velocities(&self, limb: Limb) -> Result<&[f64], StateError>;

    /// Overwrite the joint velocities of `limb` in place.
    ///
    /// # Errors
    ///
    /// As for [`set_limb_joint_positions`](Self::set_limb_joint_positions).
    fn set_limb_joint_velocities(&mut self, limb: Limb, values: &[f64]) -> Result<(), StateError>;
}

impl JointVectorView for QuadrupedState {
    fn limb_joint_positions(&self, limb: Limb) -> Result<&[f64], StateError> {
        let range = window(self, limb)?;
        Ok(&self.joint_positions().as_slice()[range])
    }

    fn set_limb_joint_positions(&mut self, limb: Limb, values: &[f64]) -> Result<(), StateError> {
        let range = checked_window(self, limb, values)?;
        self.joint_positions_mut()[range].copy_from_slice(values);
        Ok(())
    }

    fn limb_joint_velocities(&self, limb: Limb) -> Result<&[f64], StateError> {
        let range = window(self, limb)?;
        Ok(&self.joint_velocities().as_slice()[range])
    }

    fn set_limb_joint_velocities(&mut self, limb: Limb, values: &[f64]) -> Result<(), StateError> {
        let range = checked_window(self, limb, values)?;
        self.joint_velocities_mut()[range].copy_from_slice(values);
        Ok(())
    }
}

fn window(state: &QuadrupedState, limb: Limb) -> Result<Range<usize>, StateError> {
    state
        .topology()
        .range(limb)
        .ok_or_else(|| StateError::unknown(limb))
}

fn checked_window(
    state: &QuadrupedState,
    limb: Limb,
    values: &[f64],
) -> Result<Range<usize>, StateError> {
    let range = window(state, limb)?;
    if values.len() != range.len() {
        return Err(StateError::ShapeMismatch {
            expected: range.len(),
            got: values.len(),
        });
    }
    Ok(range)
}
