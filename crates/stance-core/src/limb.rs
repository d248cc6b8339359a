//! Closed enumerations keying the execution state: limbs, branches, and
//! control levels.
//!
//! Each enum implements [`EnumKey`], which gives it a dense ordinal so it can
//! index a fixed-size [`KeyedSlots`](crate::slots::KeyedSlots) table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed enumeration with a dense `0..COUNT` ordinal.
pub trait EnumKey: Copy + Eq + 'static {
    /// Number of variants.
    const COUNT: usize;

    /// Every variant in ordinal order.
    const ALL: &'static [Self];

    /// Dense ordinal in `0..COUNT`.
    fn index(self) -> usize;

    /// Inverse of [`index`](Self::index).
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Error returned when a limb, branch, or control level name does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized {kind} name: {name:?}")]
pub struct ParseKeyError {
    kind: &'static str,
    name: String,
}

// ---------------------------------------------------------------------------
// Limb
// ---------------------------------------------------------------------------

/// One leg of the quadruped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limb {
    LeftFore,
    RightFore,
    LeftHind,
    RightHind,
}

impl Limb {
    /// Short tag used in logs and config (`LF`, `RF`, `LH`, `RH`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::LeftFore => "LF",
            Self::RightFore => "RF",
            Self::LeftHind => "LH",
            Self::RightHind => "RH",
        }
    }

    /// The kinematic branch this limb drives.
    pub const fn branch(self) -> Branch {
        match self {
            Self::LeftFore => Branch::LeftFore,
            Self::RightFore => Branch::RightFore,
            Self::LeftHind => Branch::LeftHind,
            Self::RightHind => Branch::RightHind,
        }
    }

    pub const fn is_fore(self) -> bool {
        matches!(self, Self::LeftFore | Self::RightFore)
    }

    pub const fn is_left(self) -> bool {
        matches!(self, Self::LeftFore | Self::LeftHind)
    }

    const fn snake_name(self) -> &'static str {
        match self {
            Self::LeftFore => "left_fore",
            Self::RightFore => "right_fore",
            Self::LeftHind => "left_hind",
            Self::RightHind => "right_hind",
        }
    }
}

impl EnumKey for Limb {
    const COUNT: usize = 4;
    const ALL: &'static [Self] = &[
        Self::LeftFore,
        Self::RightFore,
        Self::LeftHind,
        Self::RightHind,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Limb {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Front/rear aliases (FL, HR, ...) are accepted alongside the tags.
        let alias = match s.to_ascii_uppercase().as_str() {
            "FL" => Some(Self::LeftFore),
            "FR" => Some(Self::RightFore),
            "HL" => Some(Self::LeftHind),
            "HR" => Some(Self::RightHind),
            _ => None,
        };
        alias
            .or_else(|| parse_variant(s, |l: Self| l.tag(), |l| l.snake_name()))
            .ok_or_else(|| ParseKeyError {
                kind: "limb",
                name: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// One kinematic chain of the robot. Every limb maps to exactly one leg
/// branch; `Base` has no limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Base,
    LeftFore,
    RightFore,
    LeftHind,
    RightHind,
}

impl Branch {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::LeftFore => "LF",
            Self::RightFore => "RF",
            Self::LeftHind => "LH",
            Self::RightHind => "RH",
        }
    }

    /// The limb driven by this branch, if it is a leg branch.
    pub const fn limb(self) -> Option<Limb> {
        match self {
            Self::Base => None,
            Self::LeftFore => Some(Limb::LeftFore),
            Self::RightFore => Some(Limb::RightFore),
            Self::LeftHind => Some(Limb::LeftHind),
            Self::RightHind => Some(Limb::RightHind),
        }
    }

    const fn snake_name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::LeftFore => "left_fore",
            Self::RightFore => "right_fore",
            Self::LeftHind => "left_hind",
            Self::RightHind => "right_hind",
        }
    }
}

impl EnumKey for Branch {
    const COUNT: usize = 5;
    const ALL: &'static [Self] = &[
        Self::Base,
        Self::LeftFore,
        Self::RightFore,
        Self::LeftHind,
        Self::RightHind,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl From<Limb> for Branch {
    fn from(limb: Limb) -> Self {
        limb.branch()
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Branch {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, |b: Self| b.tag(), |b| b.snake_name()).ok_or_else(|| ParseKeyError {
            kind: "branch",
            name: s.to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// ControlLevel
// ---------------------------------------------------------------------------

/// A mode of commanding a branch's actuators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlLevel {
    Position,
    Velocity,
    Acceleration,
    Effort,
}

impl ControlLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Velocity => "velocity",
            Self::Acceleration => "acceleration",
            Self::Effort => "effort",
        }
    }
}

impl EnumKey for ControlLevel {
    const COUNT: usize = 4;
    const ALL: &'static [Self] = &[
        Self::Position,
        Self::Velocity,
        Self::Acceleration,
        Self::Effort,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ControlLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlLevel {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, |c: Self| c.name(), |c| c.name()).ok_or_else(|| ParseKeyError {
            kind: "control level",
            name: s.to_owned(),
        })
    }
}

/// Match `s` case-insensitively against each variant's tag and snake_case name.
fn parse_variant<K: EnumKey>(
    s: &str,
    tag: impl Fn(K) -> &'static str,
    snake: impl Fn(K) -> &'static str,
) -> Option<K> {
    K::ALL
        .iter()
        .copied()
        .find(|&k| s.eq_ignore_ascii_case(tag(k)) || s.eq_ignore_ascii_case(snake(k)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
