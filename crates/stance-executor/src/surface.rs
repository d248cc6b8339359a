//! Sparse per-limb terrain normal estimates.

use nalgebra::Vector3;
use stance_core::{KeyedSlots, Limb, StateError};

/// Estimated terrain normal per limb. A missing entry means "no estimate"
/// and is distinct from a stored zero vector.
///
/// Vectors are stored as given; unit length is the producer's concern.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceNormals {
    normals: KeyedSlots<Limb, Vector3<f64>>,
}

impl SurfaceNormals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, limb: Limb) -> bool {
        self.normals.contains(limb)
    }

    /// # Errors
    ///
    /// [`StateError::UnknownKey`] if no estimate is recorded for `limb`.
    pub fn get(&self, limb: Limb) -> Result<&Vector3<f64>, StateError> {
        self.normals
            .get(limb)
            .ok_or_else(|| StateError::unknown(limb))
    }

    pub fn set(&mut self, limb: Limb, normal: Vector3<f64>) {
        self.normals.insert(limb, normal);
    }

    /// Drop the estimate for `limb`; no-op when none is recorded.
    pub fn remove(&mut self, limb: Limb) {
        self.normals.remove(limb);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Limb, &Vector3<f64>)> + '_ {
        self.normals.iter()
    }

    pub fn len(&self) -> usize {
        self.normals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }
}
