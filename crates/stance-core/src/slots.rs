//! Fixed-size table keyed by a closed enumeration.
//!
//! [`KeyedSlots`] stores at most one value per variant of an [`EnumKey`]
//! in an array indexed by the variant's ordinal. An empty slot is distinct
//! from any stored value, so "never configured" stays observable.

use std::fmt;

use crate::limb::EnumKey;

/// Sparse map from an enum key to `V` with O(1) access and no allocation.
#[derive(Clone, PartialEq)]
pub struct KeyedSlots<K: EnumKey, V> {
    // Sized by K::COUNT at construction; never resized.
    slots: Box<[Option<V>]>,
    _key: std::marker::PhantomData<K>,
}

impl<K: EnumKey, V> KeyedSlots<K, V> {
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(K::COUNT).collect(),
            _key: std::marker::PhantomData,
        }
    }

    pub fn get(&self, key: K) -> Option<&V> {
        self.slots[key.index()].as_ref()
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots[key.index()].as_mut()
    }

    pub fn contains(&self, key: K) -> bool {
        self.slots[key.index()].is_some()
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.slots[key.index()].replace(value)
    }

    /// Remove the entry if present. Removing an empty slot is a no-op.
    pub fn remove(&mut self, key: K) -> Option<V> {
        self.slots[key.index()].take()
    }

    pub fn clear(&mut self) {
        for slot in &mut *self.slots {
            *slot = None;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Keys with a stored value, in ordinal order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// `(key, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        K::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(&k, slot)| slot.as_ref().map(|v| (k, v)))
    }
}

impl<K: EnumKey, V> Default for KeyedSlots<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EnumKey + fmt::Debug, V: fmt::Debug> fmt::Debug for KeyedSlots<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: EnumKey, V> FromIterator<(K, V)> for KeyedSlots<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut slots = Self::new();
        for (k, v) in iter {
            slots.insert(k, v);
        }
        slots
    }
}
