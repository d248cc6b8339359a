//! Per-limb boolean flags read by the gait executor each control cycle.

use stance_core::{EnumKey, KeyedSlots, Limb, StateError};

/// One of the three independent per-limb flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LimbFlag {
    /// Limb bears load (stance) rather than swinging.
    SupportLeg,
    /// Contact sensing on this limb should not be trusted.
    IgnoreContact,
    /// Limb is left out of base pose adaptation.
    IgnoreForPoseAdaptation,
}

impl LimbFlag {
    pub const ALL: [Self; 3] = [
        Self::SupportLeg,
        Self::IgnoreContact,
        Self::IgnoreForPoseAdaptation,
    ];
}

/// Store of the three per-limb flags. Each flag is its own sparse table, so
/// writing one never touches the others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LimbAttributes {
    support_leg: KeyedSlots<Limb, bool>,
    ignore_contact: KeyedSlots<Limb, bool>,
    ignore_for_pose_adaptation: KeyedSlots<Limb, bool>,
}

impl LimbAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every flag of every limb in `limbs` with `false`.
    pub fn initialize(&mut self, limbs: &[Limb]) {
        for &limb in limbs {
            for flag in LimbFlag::ALL {
                self.table_mut(flag).insert(limb, false);
            }
        }
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `limb` was never initialized or set.
    pub fn get(&self, flag: LimbFlag, limb: Limb) -> Result<bool, StateError> {
        self.table(flag)
            .get(limb)
            .copied()
            .ok_or_else(|| StateError::unknown(limb))
    }

    /// Insert or overwrite.
    pub fn set(&mut self, flag: LimbFlag, limb: Limb, value: bool) {
        self.table_mut(flag).insert(limb, value);
    }

    /// Limbs with any flag recorded, in ordinal order.
    pub fn limbs(&self) -> impl Iterator<Item = Limb> + '_ {
        Limb::ALL.iter().copied().filter(move |&l| {
            LimbFlag::ALL
                .iter()
                .any(|&flag| self.table(flag).contains(l))
        })
    }

    /// Limbs currently flagged as support legs, in ordinal order.
    pub fn support_legs(&self) -> impl Iterator<Item = Limb> + '_ {
        self.support_leg
            .iter()
            .filter_map(|(limb, &support)| support.then_some(limb))
    }

    /// Limbs with a support-leg entry that is `false`.
    pub fn swing_legs(&self) -> impl Iterator<Item = Limb> + '_ {
        self.support_leg
            .iter()
            .filter_map(|(limb, &support)| (!support).then_some(limb))
    }

    pub fn number_of_support_legs(&self) -> usize {
        self.support_legs().count()
    }

    const fn table(&self, flag: LimbFlag) -> &KeyedSlots<Limb, bool> {
        match flag {
            LimbFlag::SupportLeg => &self.support_leg,
            LimbFlag::IgnoreContact => &self.ignore_contact,
            LimbFlag::IgnoreForPoseAdaptation => &self.ignore_for_pose_adaptation,
        }
    }

    fn table_mut(&mut self, flag: LimbFlag) -> &mut KeyedSlots<Limb, bool> {
        match flag {
            LimbFlag::SupportLeg => &mut self.support_leg,
            LimbFlag::IgnoreContact => &mut self.ignore_contact,
            LimbFlag::IgnoreForPoseAdaptation => &mut self.ignore_for_pose_adaptation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_seeds_false() {
        let mut attrs = LimbAttributes::new();
        attrs.initialize(Limb::ALL);
        for &limb in Limb::ALL {
            for flag in LimbFlag::ALL {
                assert_eq!(attrs.get(flag, limb), Ok(false));
            }
        }
        assert_eq!(attrs.number_of_support_legs(), 0);
    }

    #[test]
    fn uninitialized_limb_is_unknown() {
        let mut attrs = LimbAttributes::new();
        assert_eq!(
            attrs.get(LimbFlag::SupportLeg, Limb::LeftFore),
            Err(StateError::unknown(Limb::LeftFore))
        );

        attrs.initialize(&[Limb::RightFore]);
        assert!(
            attrs
                .get(LimbFlag::IgnoreContact, Limb::LeftFore)
                .unwrap_err()
                .is_unknown_key()
        );
    }

    #[test]
    fn flags_do_not_cross_talk() {
        let mut attrs = LimbAttributes::new();
        attrs.initialize(Limb::ALL);
        for flag in LimbFlag::ALL {
            attrs.set(flag, Limb::LeftHind, true);
            for other in LimbFlag::ALL.into_iter().filter(|&f| f != flag) {
                assert_eq!(attrs.get(other, Limb::LeftHind), Ok(false));
            }
            assert_eq!(attrs.get(flag, Limb::LeftHind), Ok(true));
            attrs.set(flag, Limb::LeftHind, false);
        }
    }

    #[test]
    fn set_creates_missing_entry() {
        let mut attrs = LimbAttributes::new();
        attrs.set(LimbFlag::IgnoreContact, Limb::RightHind, true);
        assert_eq!(attrs.get(LimbFlag::IgnoreContact, Limb::RightHind), Ok(true));
        // Only the written flag exists.
        assert!(attrs.get(LimbFlag::SupportLeg, Limb::RightHind).is_err());
        assert_eq!(attrs.limbs().collect::<Vec<_>>(), vec![Limb::RightHind]);
    }

    #[test]
    fn support_and_swing_partition() {
        let mut attrs = LimbAttributes::new();
        attrs.initialize(Limb::ALL);
        attrs.set(LimbFlag::SupportLeg, Limb::LeftFore, true);
        attrs.set(LimbFlag::SupportLeg, Limb::RightHind, true);

        let support: Vec<Limb> = attrs.support_legs().collect();
        let swing: Vec<Limb> = attrs.swing_legs().collect();
        assert_eq!(support, vec![Limb::LeftFore, Limb::RightHind]);
        assert_eq!(swing, vec![Limb::RightFore, Limb::LeftHind]);
        assert_eq!(attrs.number_of_support_legs(), 2);
        assert_eq!(support.len() + swing.len(), Limb::COUNT);
    }

    #[test]
    fn all_limbs_may_support() {
        let mut attrs = LimbAttributes::new();
        attrs.initialize(Limb::ALL);
        for &limb in Limb::ALL {
            attrs.set(LimbFlag::SupportLeg, limb, true);
        }
        assert_eq!(attrs.number_of_support_legs(), 4);
    }
}
