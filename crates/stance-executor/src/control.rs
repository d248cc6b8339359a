//! Control setups: which control levels are active on each branch.
//!
//! A [`ControlSetup`] always carries an explicit on/off value for every
//! [`ControlLevel`]. The [`ControlSetups`] registry stores one setup per
//! branch and only ever replaces setups as a whole.

use std::fmt;

use serde::{Deserialize, Serialize};
use stance_core::{Branch, ControlLevel, EnumKey, KeyedSlots, StateError};

// ---------------------------------------------------------------------------
// ControlSetup
// ---------------------------------------------------------------------------

/// Active/inactive flag for each of the four control levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlSetup {
    levels: [bool; 4],
}

impl ControlSetup {
    /// All levels inactive.
    pub const fn empty() -> Self {
        Self {
            levels: [false; 4],
        }
    }

    /// Exactly the given levels active.
    pub fn from_levels(levels: &[ControlLevel]) -> Self {
        levels
            .iter()
            .fold(Self::empty(), |setup, &level| setup.with(level, true))
    }

    pub fn is_active(self, level: ControlLevel) -> bool {
        self.levels[level.index()]
    }

    /// Copy of `self` with `level` switched to `active`.
    #[must_use]
    pub fn with(mut self, level: ControlLevel, active: bool) -> Self {
        self.set(level, active);
        self
    }

    pub fn set(&mut self, level: ControlLevel, active: bool) {
        self.levels[level.index()] = active;
    }

    pub fn active_levels(self) -> impl Iterator<Item = ControlLevel> {
        ControlLevel::ALL
            .iter()
            .copied()
            .filter(move |&level| self.is_active(level))
    }

    pub fn is_empty(self) -> bool {
        !self.levels.iter().any(|&active| active)
    }
}

impl fmt::Display for ControlSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, level) in self.active_levels().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{level}")?;
        }
        f.write_str("}")
    }
}

impl FromIterator<ControlLevel> for ControlSetup {
    fn from_iter<I: IntoIterator<Item = ControlLevel>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |setup, level| setup.with(level, true))
    }
}

// ---------------------------------------------------------------------------
// ControlSetups
// ---------------------------------------------------------------------------

/// Per-branch control setup registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlSetups {
    setups: KeyedSlots<Branch, ControlSetup>,
}

impl ControlSetups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give every branch in `branches` the empty setup.
    pub fn initialize(&mut self, branches: &[Branch]) {
        for &branch in branches {
            self.set_empty(branch);
        }
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if `branch` has no setup.
    pub fn get(&self, branch: Branch) -> Result<&ControlSetup, StateError> {
        self.setups
            .get(branch)
            .ok_or_else(|| StateError::unknown(branch))
    }

    /// Replace the whole setup of `branch`, creating the entry if needed.
    pub fn set(&mut self, branch: Branch, setup: ControlSetup) {
        self.setups.insert(branch, setup);
    }

    /// Disable every level on `branch`, creating the entry if needed.
    pub fn set_empty(&mut self, branch: Branch) {
        self.set(branch, ControlSetup::empty());
    }

    pub fn contains(&self, branch: Branch) -> bool {
        self.setups.contains(branch)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Branch, &ControlSetup)> + '_ {
        self.setups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_setup_has_no_active_level() {
        let setup = ControlSetup::empty();
        assert!(setup.is_empty());
        for &level in ControlLevel::ALL {
            assert!(!setup.is_active(level));
        }
        assert_eq!(setup, ControlSetup::default());
        assert_eq!(setup.to_string(), "{}");
    }

    #[test]
    fn from_levels_sets_exactly_those() {
        let setup = ControlSetup::from_levels(&[ControlLevel::Position, ControlLevel::Effort]);
        assert!(setup.is_active(ControlLevel::Position));
        assert!(!setup.is_active(ControlLevel::Velocity));
        assert!(!setup.is_active(ControlLevel::Acceleration));
        assert!(setup.is_active(ControlLevel::Effort));
        assert_eq!(
            setup.active_levels().collect::<Vec<_>>(),
            vec![ControlLevel::Position, ControlLevel::Effort]
        );
        assert_eq!(setup.to_string(), "{position, effort}");
    }

    #[test]
    fn with_toggles_one_level() {
        let setup = ControlSetup::empty()
            .with(ControlLevel::Velocity, true)
            .with(ControlLevel::Velocity, false)
            .with(ControlLevel::Acceleration, true);
        assert_eq!(
            setup,
            ControlSetup::from_levels(&[ControlLevel::Acceleration])
        );
    }

    #[test]
    fn collect_from_levels() {
        let setup: ControlSetup = [ControlLevel::Position, ControlLevel::Velocity]
            .into_iter()
            .collect();
        assert_eq!(setup.to_string(), "{position, velocity}");
    }

    #[test]
    fn registry_initialize_and_lookup() {
        let mut setups = ControlSetups::new();
        assert!(setups.get(Branch::Base).unwrap_err().is_unknown_key());

        setups.initialize(&[Branch::Base, Branch::LeftFore]);
        assert_eq!(setups.get(Branch::Base), Ok(&ControlSetup::empty()));
        assert_eq!(setups.get(Branch::LeftFore), Ok(&ControlSetup::empty()));
        assert_eq!(
            setups.get(Branch::RightHind),
            Err(StateError::unknown(Branch::RightHind))
        );
    }

    #[test]
    fn registry_overwrite_is_total() {
        let mut setups = ControlSetups::new();
        setups.initialize(&[Branch::RightFore]);
        setups.set(
            Branch::RightFore,
            ControlSetup::from_levels(&[ControlLevel::Velocity, ControlLevel::Effort]),
        );
        let position_only = ControlSetup::from_levels(&[ControlLevel::Position]);
        setups.set(Branch::RightFore, position_only);
        assert_eq!(setups.get(Branch::RightFore), Ok(&position_only));
    }

    #[test]
    fn set_empty_creates_missing_branch() {
        let mut setups = ControlSetups::new();
        assert!(!setups.contains(Branch::LeftHind));
        setups.set_empty(Branch::LeftHind);
        assert!(setups.contains(Branch::LeftHind));
        assert!(setups.get(Branch::LeftHind).unwrap().is_empty());
    }
}
