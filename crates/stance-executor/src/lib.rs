//! Execution state model for legged-robot gait executors.
//!
//! [`ExecutionState`] is the per-cycle blackboard between a gait-sequencing
//! layer and a joint-command layer. It records, per limb and per branch:
//!
//! 1. **Limb attributes**: support leg, ignore contact, ignore for pose
//!    adaptation
//! 2. **Surface normals**: sparse terrain normal estimates
//! 3. **Control setups**: active control levels per branch
//! 4. **Joint vector view**: per-limb windows onto the whole-body joint
//!    vectors of the owned [`QuadrupedState`](stance_model::QuadrupedState)
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Vector3;
//! use stance_core::{Branch, ControlLevel, Limb, Topology};
//! use stance_executor::{ControlSetup, ExecutionState};
//!
//! let mut state = ExecutionState::new(Topology::quadruped());
//! state.initialize_all();
//!
//! state.set_support_leg(Limb::LeftFore, true);
//! state.set_support_leg(Limb::RightHind, true);
//! assert_eq!(state.number_of_support_legs(), 2);
//!
//! state.set_surface_normal(Limb::LeftFore, Vector3::z());
//! state.set_control_setup(Branch::Base, ControlSetup::from_levels(&[ControlLevel::Position]));
//! state.set_joint_positions(Limb::RightFore, &[0.0, 0.7, -1.4]).unwrap();
//! assert_eq!(state.joint_positions(Limb::RightFore).unwrap(), &[0.0, 0.7, -1.4]);
//! ```

pub mod attributes;
pub mod control;
pub mod joints;
pub mod state;
pub mod surface;

pub use attributes::{LimbAttributes, LimbFlag};
pub use control::{ControlSetup, ControlSetups};
pub use joints::JointVectorView;
pub use state::ExecutionState;
pub use surface::SurfaceNormals;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::{ControlSetup, ExecutionState, JointVectorView, LimbFlag};
    pub use stance_core::{Branch, ControlLevel, EnumKey, Limb, StateError, Topology};
    pub use stance_model::QuadrupedState;
}
