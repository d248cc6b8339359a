use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::limb::{EnumKey, Limb};
use crate::topology::{DEFAULT_LIMB_DOF, Topology};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_dof() -> usize {
    DEFAULT_LIMB_DOF
}

fn default_limbs() -> Vec<LimbEntry> {
    Limb::ALL
        .iter()
        .map(|&limb| LimbEntry { limb, dof: None })
        .collect()
}

// ---------------------------------------------------------------------------
// TopologyConfig
// ---------------------------------------------------------------------------

/// One limb of a [`TopologyConfig`], in joint-vector order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimbEntry {
    pub limb: Limb,
    /// Overrides [`TopologyConfig::default_dof`] for this limb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dof: Option<usize>,
}

/// Robot topology as loaded from TOML.
///
/// ```toml
/// default_dof = 3
///
/// [[limbs]]
/// limb = "left_fore"
///
/// [[limbs]]
/// limb = "right_fore"
/// dof = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Joints per limb unless a limb overrides it (default: 3).
    #[serde(default = "default_dof")]
    pub default_dof: usize,

    /// Limbs in joint-vector order (default: LF, RF, LH, RH).
    #[serde(default = "default_limbs")]
    pub limbs: Vec<LimbEntry>,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            default_dof: default_dof(),
            limbs: default_limbs(),
        }
    }
}

impl TopologyConfig {
    /// Resolve per-limb DOF and build the [`Topology`].
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`Topology::new`].
    pub fn build(&self) -> Result<Topology, ConfigError> {
        let pairs: Vec<(Limb, usize)> = self
            .limbs
            .iter()
            .map(|e| (e.limb, e.dof.unwrap_or(self.default_dof)))
            .collect();
        Topology::new(&pairs)
    }

    /// Validate without keeping the built topology.
    ///
    /// # Errors
    ///
    /// See [`TopologyConfig::build`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] on malformed input, otherwise the validation
    /// errors of [`TopologyConfig::build`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise see
    /// [`TopologyConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), limbs = config.limbs.len(), "loaded topology config");
        Ok(config)
    }
}

impl From<&Topology> for TopologyConfig {
    fn from(topology: &Topology) -> Self {
        Self {
            default_dof: DEFAULT_LIMB_DOF,
            limbs: topology
                .limbs()
                .iter()
                .map(|&limb| LimbEntry {
                    limb,
                    dof: topology.dof(limb).filter(|&d| d != DEFAULT_LIMB_DOF),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::topology::MAX_LIMB_DOF;

    #[test]
    fn default_config_builds_standard_quadruped() {
        let topo = TopologyConfig::default().build().unwrap();
        assert_eq!(topo, Topology::quadruped());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = TopologyConfig::from_toml_str("").unwrap();
        assert_eq!(config, TopologyConfig::default());
    }

    #[test]
    fn per_limb_override() {
        let config = TopologyConfig::from_toml_str(
            r#"
            default_dof = 3

            [[limbs]]
            limb = "left_fore"

            [[limbs]]
            limb = "right_fore"
            dof = 4
            "#,
        )
        .unwrap();
        let topo = config.build().unwrap();
        assert_eq!(topo.limbs(), &[Limb::LeftFore, Limb::RightFore]);
        assert_eq!(topo.range(Limb::RightFore), Some(3..7));
        assert_eq!(topo.total_dof(), 7);
    }

    #[test]
    fn duplicate_limb_rejected() {
        let err = TopologyConfig::from_toml_str(
            r#"
            [[limbs]]
            limb = "left_hind"
            [[limbs]]
            limb = "left_hind"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLimb(Limb::LeftHind)));
    }

    #[test]
    fn zero_default_dof_rejected() {
        let err = TopologyConfig::from_toml_str("default_dof = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDof(Limb::LeftFore)));
    }

    #[test]
    fn huge_default_dof_rejected() {
        let err = TopologyConfig::from_toml_str("default_dof = 9223372036854775807").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DofTooLarge {
                limb: Limb::LeftFore,
                max: MAX_LIMB_DOF,
                ..
            }
        ));
        assert!(err.to_string().contains("max 32"));
    }

    #[test]
    fn oversized_limb_override_rejected() {
        let err = TopologyConfig::from_toml_str(
            "[[limbs]]\nlimb = \"left_fore\"\n\n[[limbs]]\nlimb = \"right_hind\"\ndof = 33",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DofTooLarge {
                limb: Limb::RightHind,
                dof: 33,
                ..
            }
        ));
    }

    #[test]
    fn empty_limb_list_rejected() {
        let err = TopologyConfig::from_toml_str("limbs = []").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTopology));
    }

    #[test]
    fn unknown_limb_name_is_toml_error() {
        let err = TopologyConfig::from_toml_str("[[limbs]]\nlimb = \"tail\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn serialize_round_trip_preserves_topology() {
        let topo = Topology::new(&[
            (Limb::RightHind, 2),
            (Limb::LeftFore, 3),
            (Limb::LeftHind, 5),
        ])
        .unwrap();
        let config = TopologyConfig::from(&topo);
        let text = toml::to_string(&config).unwrap();
        let back = TopologyConfig::from_toml_str(&text).unwrap();
        assert_eq!(back.build().unwrap(), topo);
    }

    #[test]
    fn from_file_reads_toml() {
        let path = std::env::temp_dir().join(format!(
            "stance-topology-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "default_dof = 2").unwrap();
        drop(file);

        let config = TopologyConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.build().unwrap().total_dof(), 8);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = TopologyConfig::from_file("/nonexistent/stance/topology.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
