// stance-core: Enumerations, topology, config, and errors for the stance execution state model.

pub mod config;
pub mod error;
pub mod limb;
pub mod slots;
pub mod topology;

pub use config::{LimbEntry, TopologyConfig};
pub use error::{ConfigError, StanceError, StateError, StateKey};
pub use limb::{Branch, ControlLevel, EnumKey, Limb, ParseKeyError};
pub use slots::KeyedSlots;
pub use topology::{DEFAULT_LIMB_DOF, MAX_LIMB_DOF, Topology};
