//! Layout of the whole-body joint vector.
//!
//! A [`Topology`] fixes which limbs the robot has, in which order their joint
//! windows appear in the whole-body joint vector, and how many degrees of
//! freedom each window holds. Offsets are precomputed once so per-limb
//! slicing is a table lookup.
//!
//! ```text
//! joint vector:  [ LF0 LF1 LF2 | RF0 RF1 RF2 | LH0 LH1 LH2 | RH0 RH1 RH2 ]
//! offsets:         0             3             6             9
//! ```

use std::ops::Range;

use tracing::debug;

use crate::error::ConfigError;
use crate::limb::{Branch, EnumKey, Limb};
use crate::slots::KeyedSlots;

/// Degrees of freedom per limb on a standard quadruped leg (hip abduction,
/// hip flexion, knee).
pub const DEFAULT_LIMB_DOF: usize = 3;

/// Upper bound on the joints of a single limb.
pub const MAX_LIMB_DOF: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LimbLayout {
    ordinal: usize,
    offset: usize,
    dof: usize,
}

/// Limb order, per-limb DOF table, and offset table for one robot.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    order: Vec<Limb>,
    layout: KeyedSlots<Limb, LimbLayout>,
    total_dof: usize,
}

impl Topology {
    /// Build a topology from `(limb, dof)` pairs in joint-vector order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyTopology`] if `limbs` is empty,
    /// [`ConfigError::DuplicateLimb`] if a limb appears twice,
    /// [`ConfigError::ZeroDof`] if a limb has no degrees of freedom, and
    /// [`ConfigError::DofTooLarge`] if a limb exceeds [`MAX_LIMB_DOF`].
    pub fn new(limbs: &[(Limb, usize)]) -> Result<Self, ConfigError> {
        if limbs.is_empty() {
            return Err(ConfigError::EmptyTopology);
        }

        let mut order = Vec::with_capacity(limbs.len());
        let mut layout = KeyedSlots::new();
        let mut offset = 0;

        for (ordinal, &(limb, dof)) in limbs.iter().enumerate() {
            if dof == 0 {
                return Err(ConfigError::ZeroDof(limb));
            }
            if dof > MAX_LIMB_DOF {
                return Err(ConfigError::DofTooLarge {
                    limb,
                    dof,
                    max: MAX_LIMB_DOF,
                });
            }
            let entry = LimbLayout {
                ordinal,
                offset,
                dof,
            };
            if layout.insert(limb, entry).is_some() {
                return Err(ConfigError::DuplicateLimb(limb));
            }
            order.push(limb);
            offset += dof;
        }

        debug!(limbs = order.len(), total_dof = offset, "built topology");

        Ok(Self {
            order,
            layout,
            total_dof: offset,
        })
    }

    /// Build a topology with the same DOF for every listed limb.
    ///
    /// # Errors
    ///
    /// See [`Topology::new`].
    pub fn uniform(limbs: &[Limb], dof: usize) -> Result<Self, ConfigError> {
        let pairs: Vec<(Limb, usize)> = limbs.iter().map(|&l| (l, dof)).collect();
        Self::new(&pairs)
    }

    /// Standard quadruped: LF, RF, LH, RH with 3 DOF each (12 joints).
    pub fn quadruped() -> Self {
        let mut layout = KeyedSlots::new();
        for (ordinal, &limb) in Limb::ALL.iter().enumerate() {
            layout.insert(
                limb,
                LimbLayout {
                    ordinal,
                    offset: ordinal * DEFAULT_LIMB_DOF,
                    dof: DEFAULT_LIMB_DOF,
                },
            );
        }
        Self {
            order: Limb::ALL.to_vec(),
            layout,
            total_dof: Limb::COUNT * DEFAULT_LIMB_DOF,
        }
    }

    /// Limbs in joint-vector order.
    pub fn limbs(&self) -> &[Limb] {
        &self.order
    }

    /// Leg branches of every limb plus [`Branch::Base`], in branch ordinal order.
    pub fn branches(&self) -> Vec<Branch> {
        Branch::ALL
            .iter()
            .copied()
            .filter(|b| b.limb().is_none_or(|l| self.contains(l)))
            .collect()
    }

    pub fn n_limbs(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, limb: Limb) -> bool {
        self.layout.contains(limb)
    }

    /// Position of `limb` in the joint-vector order.
    pub fn ordinal(&self, limb: Limb) -> Option<usize> {
        self.layout.get(limb).map(|l| l.ordinal)
    }

    /// Degrees of freedom of `limb`.
    pub fn dof(&self, limb: Limb) -> Option<usize> {
        self.layout.get(limb).map(|l| l.dof)
    }

    /// Index of the first joint of `limb` in the whole-body vector.
    pub fn offset(&self, limb: Limb) -> Option<usize> {
        self.layout.get(limb).map(|l| l.offset)
    }

    /// Index range of `limb`'s window in the whole-body vector.
    pub fn range(&self, limb: Limb) -> Option<Range<usize>> {
        self.layout.get(limb).map(|l| l.offset..l.offset + l.dof)
    }

    /// Length of the whole-body joint vector.
    pub const fn total_dof(&self) -> usize {
        self.total_dof
    }

    /// True when every limb has [`DEFAULT_LIMB_DOF`] joints.
    pub fn is_uniform_default(&self) -> bool {
        self.layout.iter().all(|(_, l)| l.dof == DEFAULT_LIMB_DOF)
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::quadruped()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadruped_has_twelve_joints() {
        let topo = Topology::quadruped();
        assert_eq!(topo.n_limbs(), 4);
        assert_eq!(topo.total_dof(), 12);
        assert!(topo.is_uniform_default());
        assert_eq!(topo.limbs(), Limb::ALL);
    }

    #[test]
    fn quadruped_offsets_are_three_times_ordinal() {
        let topo = Topology::quadruped();
        for (i, &limb) in Limb::ALL.iter().enumerate() {
            assert_eq!(topo.ordinal(limb), Some(i));
            assert_eq!(topo.offset(limb), Some(3 * i));
            assert_eq!(topo.dof(limb), Some(3));
            assert_eq!(topo.range(limb), Some(3 * i..3 * i + 3));
        }
    }

    #[test]
    fn quadruped_matches_uniform_builder() {
        let built = Topology::uniform(Limb::ALL, DEFAULT_LIMB_DOF).unwrap();
        assert_eq!(built, Topology::quadruped());
    }

    #[test]
    fn heterogeneous_offsets_are_contiguous() {
        let topo = Topology::new(&[
            (Limb::LeftFore, 2),
            (Limb::RightFore, 3),
            (Limb::LeftHind, 3),
            (Limb::RightHind, 4),
        ])
        .unwrap();
        assert_eq!(topo.total_dof(), 12);
        assert_eq!(topo.range(Limb::LeftFore), Some(0..2));
        assert_eq!(topo.range(Limb::RightFore), Some(2..5));
        assert_eq!(topo.range(Limb::LeftHind), Some(5..8));
        assert_eq!(topo.range(Limb::RightHind), Some(8..12));
        assert!(!topo.is_uniform_default());
    }

    #[test]
    fn custom_order_changes_ordinals() {
        let topo = Topology::uniform(&[Limb::RightHind, Limb::LeftFore], 3).unwrap();
        assert_eq!(topo.ordinal(Limb::RightHind), Some(0));
        assert_eq!(topo.offset(Limb::LeftFore), Some(3));
        assert_eq!(topo.total_dof(), 6);
    }

    #[test]
    fn missing_limb_has_no_layout() {
        let topo = Topology::uniform(&[Limb::LeftFore, Limb::RightFore], 3).unwrap();
        assert!(!topo.contains(Limb::LeftHind));
        assert_eq!(topo.ordinal(Limb::LeftHind), None);
        assert_eq!(topo.range(Limb::RightHind), None);
        assert_eq!(
            topo.branches(),
            vec![Branch::Base, Branch::LeftFore, Branch::RightFore]
        );
    }

    #[test]
    fn rejects_empty_duplicate_and_zero_dof() {
        assert!(matches!(Topology::new(&[]), Err(ConfigError::EmptyTopology)));
        assert!(matches!(
            Topology::uniform(&[Limb::LeftFore, Limb::LeftFore], 3),
            Err(ConfigError::DuplicateLimb(Limb::LeftFore))
        ));
        assert!(matches!(
            Topology::new(&[(Limb::RightHind, 0)]),
            Err(ConfigError::ZeroDof(Limb::RightHind))
        ));
    }

    #[test]
    fn rejects_oversized_limb() {
        assert!(Topology::new(&[(Limb::LeftFore, MAX_LIMB_DOF)]).is_ok());
        assert!(matches!(
            Topology::new(&[(Limb::LeftFore, 3), (Limb::RightFore, usize::MAX)]),
            Err(ConfigError::DofTooLarge {
                limb: Limb::RightFore,
                dof: usize::MAX,
                max: MAX_LIMB_DOF,
            })
        ));
    }

    #[test]
    fn quadruped_drives_every_branch() {
        let topo = Topology::quadruped();
        assert_eq!(topo.branches(), Branch::ALL);
    }
}
