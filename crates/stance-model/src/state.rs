use nalgebra::{DVector, UnitQuaternion, Vector3};
use stance_core::{StateError, Topology};

/// Whole-body kinematic state: joint vectors plus floating-base pose.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadrupedState {
    topology: Topology,
    /// Joint positions (rad), `topology.total_dof()` long.
    joint_positions: DVector<f64>,
    /// Joint velocities (rad/s), `topology.total_dof()` long.
    joint_velocities: DVector<f64>,
    /// Base position in world frame (meters).
    base_position: Vector3<f64>,
    /// Base orientation, world to base.
    base_orientation: UnitQuaternion<f64>,
    /// Base linear velocity in world frame (m/s).
    base_linear_velocity: Vector3<f64>,
    /// Base angular velocity in base frame (rad/s).
    base_angular_velocity: Vector3<f64>,
}

impl QuadrupedState {
    /// Zeroed joints, base at the origin with identity orientation.
    pub fn new(topology: Topology) -> Self {
        let n = topology.total_dof();
        Self {
            topology,
            joint_positions: DVector::zeros(n),
            joint_velocities: DVector::zeros(n),
            base_position: Vector3::zeros(),
            base_orientation: UnitQuaternion::identity(),
            base_linear_velocity: Vector3::zeros(),
            base_angular_velocity: Vector3::zeros(),
        }
    }

    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    // -- joints --------------------------------------------------------------

    pub const fn joint_positions(&self) -> &DVector<f64> {
        &self.joint_positions
    }

    pub const fn joint_velocities(&self) -> &DVector<f64> {
        &self.joint_velocities
    }

    /// In-place access. The slice cannot change the vector's length.
    pub fn joint_positions_mut(&mut self) -> &mut [f64] {
        self.joint_positions.as_mut_slice()
    }

    pub fn joint_velocities_mut(&mut self) -> &mut [f64] {
        self.joint_velocities.as_mut_slice()
    }

    /// Replace every joint position.
    ///
    /// # Errors
    ///
    /// [`StateError::ShapeMismatch`] if `values` is not `total_dof()` long;
    /// the stored vector is left untouched.
    pub fn set_joint_positions(&mut self, values: &[f64]) -> Result<(), StateError> {
        copy_exact(&mut self.joint_positions, values)
    }

    /// Replace every joint velocity.
    ///
    /// # Errors
    ///
    /// [`StateError::ShapeMismatch`] if `values` is not `total_dof()` long.
    pub fn set_joint_velocities(&mut self, values: &[f64]) -> Result<(), StateError> {
        copy_exact(&mut self.joint_velocities, values)
    }

    // -- base ----------------------------------------------------------------

    pub const fn base_position(&self) -> &Vector3<f64> {
        &self.base_position
    }

    pub fn set_base_position(&mut self, position: Vector3<f64>) {
        self.base_position = position;
    }

    pub const fn base_orientation(&self) -> &UnitQuaternion<f64> {
        &self.base_orientation
    }

    pub fn set_base_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.base_orientation = orientation;
    }

    pub const fn base_linear_velocity(&self) -> &Vector3<f64> {
        &self.base_linear_velocity
    }

    pub fn set_base_linear_velocity(&mut self, velocity: Vector3<f64>) {
        self.base_linear_velocity = velocity;
    }

    pub const fn base_angular_velocity(&self) -> &Vector3<f64> {
        &self.base_angular_velocity
    }

    pub fn set_base_angular_velocity(&mut self, velocity: Vector3<f64>) {
        self.base_angular_velocity = velocity;
    }
}

impl Default for QuadrupedState {
    fn default() -> Self {
        Self::new(Topology::quadruped())
    }
}

fn copy_exact(target: &mut DVector<f64>, values: &[f64]) -> Result<(), StateError> {
    if values.len() != target.len() {
        return Err(StateError::ShapeMismatch {
            expected: target.len(),
            got: values.len(),
        });
    }
    target.as_mut_slice().copy_from_slice(values);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
