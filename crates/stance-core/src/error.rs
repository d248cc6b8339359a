use std::fmt;

use thiserror::Error;

use crate::limb::{Branch, Limb};

/// Top-level error type for stance crates.
#[derive(Debug, Error)]
pub enum StanceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("State error: {0}")]
    State(#[from] StateError),
}

/// Topology configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Topology has no limbs")]
    EmptyTopology,

    #[error("Limb {0} listed more than once")]
    DuplicateLimb(Limb),

    #[error("Limb {0} has zero degrees of freedom")]
    ZeroDof(Limb),

    #[error("Limb {limb} has {dof} degrees of freedom (max {max})")]
    DofTooLarge { limb: Limb, dof: usize, max: usize },
}

/// Key of a per-limb or per-branch attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Limb(Limb),
    Branch(Branch),
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limb(limb) => write!(f, "limb {limb}"),
            Self::Branch(branch) => write!(f, "branch {branch}"),
        }
    }
}

impl From<Limb> for StateKey {
    fn from(limb: Limb) -> Self {
        Self::Limb(limb)
    }
}

impl From<Branch> for StateKey {
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

/// Contract violations raised by state lookups and joint-vector writes.
///
/// Copy + static messages for cheap propagation inside the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The limb or branch was never initialized (or lies outside the topology).
    #[error("Unknown key: {0}")]
    UnknownKey(StateKey),

    /// A joint-vector write whose length does not match its target.
    #[error("Shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

impl StateError {
    pub fn unknown(key: impl Into<StateKey>) -> Self {
        Self::UnknownKey(key.into())
    }

    pub const fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey(_))
    }

    pub const fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}
