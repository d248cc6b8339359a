use nalgebra::Vector3;
use stance_core::{Branch, Limb, StateError, Topology};
use stance_model::QuadrupedState;
use tracing::debug;

use crate::attributes::{LimbAttributes, LimbFlag};
use crate::control::{ControlSetup, ControlSetups};
use crate::joints::JointVectorView;
use crate::surface::SurfaceNormals;

/// Execution state shared by the gait executor and the joint-command layer.
///
/// Holds the per-limb flags, surface normal estimates, and per-branch
/// control setups for one control session, on top of the whole-body
/// [`QuadrupedState`] it owns. Every per-limb and per-branch lookup fails
/// with [`StateError::UnknownKey`] until the key has been initialized or
/// written; lookups never create entries.
///
/// Not internally synchronized: callers serialize access, typically one
/// exclusive borrow per control cycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct ExecutionState {
    base: QuadrupedState,
    robot_execution_running: bool,
    attributes: LimbAttributes,
    surface_normals: SurfaceNormals,
    control_setups: ControlSetups,
}

impl ExecutionState {
    /// Empty state over a zeroed base state for `topology`.
    pub fn new(topology: Topology) -> Self {
        Self::from_base(QuadrupedState::new(topology))
    }

    /// Empty state wrapping an existing base state.
    pub fn from_base(base: QuadrupedState) -> Self {
        Self {
            base,
            robot_execution_running: false,
            attributes: LimbAttributes::new(),
            surface_normals: SurfaceNormals::new(),
            control_setups: ControlSetups::new(),
        }
    }

    /// Seed every limb in `limbs` with all flags false and every branch in
    /// `branches` with the empty control setup. Re-running resets the named
    /// keys; surface normals are left alone.
    pub fn initialize(&mut self, limbs: &[Limb], branches: &[Branch]) {
        self.attributes.initialize(limbs);
        self.control_setups.initialize(branches);
        debug!(
            limbs = limbs.len(),
            branches = branches.len(),
            "initialized execution state"
        );
    }

    /// [`initialize`](Self::initialize) with every limb and branch of the
    /// topology.
    pub fn initialize_all(&mut self) {
        let limbs = self.base.topology().limbs().to_vec();
        let branches = self.base.topology().branches();
        self.initialize(&limbs, &branches);
    }

    // -- base state ----------------------------------------------------------

    pub const fn base(&self) -> &QuadrupedState {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut QuadrupedState {
        &mut self.base
    }

    pub const fn topology(&self) -> &Topology {
        self.base.topology()
    }

    pub fn into_base(self) -> QuadrupedState {
        self.base
    }

    // -- execution status ----------------------------------------------------

    pub const fn robot_execution_running(&self) -> bool {
        self.robot_execution_running
    }

    pub fn set_robot_execution_running(&mut self, running: bool) {
        self.robot_execution_running = running;
    }

    // -- limb attributes -----------------------------------------------------

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` was never initialized.
    pub fn is_support_leg(&self, limb: Limb) -> Result<bool, StateError> {
        self.attributes.get(LimbFlag::SupportLeg, limb)
    }

    pub fn set_support_leg(&mut self, limb: Limb, support: bool) {
        self.attributes.set(LimbFlag::SupportLeg, limb, support);
    }

    /// Number of limbs currently flagged as support legs.
    pub fn number_of_support_legs(&self) -> usize {
        self.attributes.number_of_support_legs()
    }

    pub fn support_legs(&self) -> impl Iterator<Item = Limb> + '_ {
        self.attributes.support_legs()
    }

    pub fn swing_legs(&self) -> impl Iterator<Item = Limb> + '_ {
        self.attributes.swing_legs()
    }

    /// Limbs with recorded attributes, in ordinal order.
    pub fn limbs(&self) -> impl Iterator<Item = Limb> + '_ {
        self.attributes.limbs()
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` was never initialized.
    pub fn is_ignore_contact(&self, limb: Limb) -> Result<bool, StateError> {
        self.attributes.get(LimbFlag::IgnoreContact, limb)
    }

    pub fn set_ignore_contact(&mut self, limb: Limb, ignore: bool) {
        self.attributes.set(LimbFlag::IgnoreContact, limb, ignore);
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` was never initialized.
    pub fn is_ignore_for_pose_adaptation(&self, limb: Limb) -> Result<bool, StateError> {
        self.attributes.get(LimbFlag::IgnoreForPoseAdaptation, limb)
    }

    pub fn set_ignore_for_pose_adaptation(&mut self, limb: Limb, ignore: bool) {
        self.attributes
            .set(LimbFlag::IgnoreForPoseAdaptation, limb, ignore);
    }

    pub const fn attributes(&self) -> &LimbAttributes {
        &self.attributes
    }

    // -- surface normals -----------------------------------------------------

    pub fn has_surface_normal(&self, limb: Limb) -> bool {
        self.surface_normals.has(limb)
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if no estimate is recorded; check
    /// [`has_surface_normal`](Self::has_surface_normal) first.
    pub fn surface_normal(&self, limb: Limb) -> Result<&Vector3<f64>, StateError> {
        self.surface_normals.get(limb)
    }

    pub fn set_surface_normal(&mut self, limb: Limb, normal: Vector3<f64>) {
        self.surface_normals.set(limb, normal);
    }

    pub fn remove_surface_normal(&mut self, limb: Limb) {
        self.surface_normals.remove(limb);
    }

    pub const fn surface_normals(&self) -> &SurfaceNormals {
        &self.surface_normals
    }

    // -- control setups ------------------------------------------------------

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `branch` was never initialized.
    pub fn control_setup(&self, branch: Branch) -> Result<&ControlSetup, StateError> {
        self.control_setups.get(branch)
    }

    /// Control setup of the branch driven by `limb`.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if that branch was never initialized.
    pub fn control_setup_for_limb(&self, limb: Limb) -> Result<&ControlSetup, StateError> {
        self.control_setups.get(limb.branch())
    }

    /// Replace the whole control setup of `branch`.
    pub fn set_control_setup(&mut self, branch: Branch, setup: ControlSetup) {
        self.control_setups.set(branch, setup);
    }

    pub fn set_control_setup_for_limb(&mut self, limb: Limb, setup: ControlSetup) {
        self.control_setups.set(limb.branch(), setup);
    }

    /// Disable every control level on `branch`. Creates the entry if it is
    /// missing.
    pub fn set_empty_control_setup(&mut self, branch: Branch) {
        self.control_setups.set_empty(branch);
    }

    pub fn set_empty_control_setup_for_limb(&mut self, limb: Limb) {
        self.control_setups.set_empty(limb.branch());
    }

    pub const fn control_setups(&self) -> &ControlSetups {
        &self.control_setups
    }

    // -- joint vectors -------------------------------------------------------

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` is not part of the topology.
    pub fn joint_positions(&self, limb: Limb) -> Result<&[f64], StateError> {
        self.base.limb_joint_positions(limb)
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] for a limb outside the topology,
    /// [`StateError::ShapeMismatch`] if `values` does not match its DOF.
    pub fn set_joint_positions(&mut self, limb: Limb, values: &[f64]) -> Result<(), StateError> {
        self.base.set_limb_joint_positions(limb, values)
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` is not part of the topology.
    pub fn joint_velocities(&self, limb: Limb) -> Result<&[f64], StateError> {
        self.base.limb_joint_velocities(limb)
    }

    /// # Errors
    ///
    /// See [`set_joint_positions`](Self::set_joint_positions).
    pub fn set_joint_velocities(&mut self, limb: Limb, values: &[f64]) -> Result<(), StateError> {
        self.base.set_limb_joint_velocities(limb, values)
    }

    /// Replace the whole-body joint position vector.
    ///
    /// # Errors
    ///
    /// [`StateError::ShapeMismatch`] unless `values` is exactly
    /// `topology().total_dof()` long; the stored vector is then unchanged.
    pub fn set_all_joint_positions(&mut self, values: &[f64]) -> Result<(), StateError> {
        self.base.set_joint_positions(values)
    }

    /// Replace the whole-body joint velocity vector.
    ///
    /// # Errors
    ///
    /// See [`set_all_joint_positions`](Self::set_all_joint_positions).
    pub fn set_all_joint_velocities(&mut self, values: &[f64]) -> Result<(), StateError> {
        self.base.set_joint_velocities(values)
    }
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self::new(Topology::quadruped())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
