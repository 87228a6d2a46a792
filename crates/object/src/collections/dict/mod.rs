//! The Dict category
//!
//! A hash map from hashable keys to values. `Dict` (i.e.
//! `Dict<HashableObject, Object>`) is fully type-erased; `Dict<K, V>` with
//! concrete types converts foreign handles with a checked downcast.
//!
//! Lookups never fail on a miss except [`Dict::at`], which reports
//! `KeyError`. [`Dict::at_or_insert_default`] is the mutable index form:
//! a missing key is inserted with a default value.

use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};
use std::fmt;
use std::hash::Hash;

use crate::core::category::Category;
use crate::core::display::{DebugConfig, DebugRender, write_mapping};
use crate::core::hashable::HashableObject;
use crate::core::object::Object;
use crate::core::traits::{BaseObject, Hashable};
use crate::error::{ValueError, ValueResult};

/// Unordered map from `K` to `V`
#[derive(Debug, Clone)]
pub struct Dict<K = HashableObject, V = Object> {
    map: HashMap<K, V>,
}

impl<K, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

fn render_key<K: DebugRender>(key: &K) -> String {
    let mut out = String::new();
    key.render(&mut out, &DebugConfig::short(), 0).ok();
    out
}

impl<K: Eq + Hash, V> Dict<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Check if `key` is present
    pub fn has_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// The stored entry for `key`, `None` on a miss
    pub fn find(&self, key: &K) -> Option<(&K, &V)> {
        self.map.get_key_value(key)
    }

    /// Value stored under `key`, `None` on a miss
    pub fn find_val(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn find_val_mut(&mut self, key: &K) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    /// Keep the existing value if `key` is present. Returns the stored
    /// value and whether an insertion happened.
    pub fn insert_only(&mut self, key: impl Into<K>, value: impl Into<V>) -> (&mut V, bool) {
        match self.map.entry(key.into()) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(value.into()), true),
        }
    }

    /// Always store `value`. Returns the stored value and whether the key
    /// was newly inserted (`false` means an existing value was replaced).
    pub fn insert_or_assign(&mut self, key: impl Into<K>, value: impl Into<V>) -> (&mut V, bool) {
        match self.map.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(value.into());
                (entry.into_mut(), false)
            }
            Entry::Vacant(entry) => (entry.insert(value.into()), true),
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.map.remove_entry(key)
    }

    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.map.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.map.values()
    }

    /// Values in place; keys stay immutable so the hash invariant holds
    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, K, V> {
        self.map.values_mut()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.map.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, K, V> {
        self.map.iter_mut()
    }
}

impl<K: Eq + Hash + DebugRender, V> Dict<K, V> {
    /// Value stored under `key`, or `KeyError`
    pub fn at(&self, key: &K) -> ValueResult<&V> {
        self.map
            .get(key)
            .ok_or_else(|| ValueError::key_error(render_key(key)))
    }

    pub fn at_mut(&mut self, key: &K) -> ValueResult<&mut V> {
        match self.map.get_mut(key) {
            Some(value) => Ok(value),
            None => Err(ValueError::key_error(render_key(key))),
        }
    }
}

impl<K: Eq + Hash + DebugRender, V: Default> Dict<K, V> {
    /// Value stored under `key`, inserting `V::default()` on a miss
    pub fn at_or_insert_default(&mut self, key: impl Into<K>) -> &mut V {
        match self.map.entry(key.into()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::trace!(
                    key = %render_key(entry.key()),
                    "inserting default value for missing key"
                );
                entry.insert(V::default())
            }
        }
    }
}

impl<K: Hashable, V: BaseObject> Dict<K, V> {
    /// Insert-or-assign from type-erased handles, downcasting both sides.
    /// Returns whether the key was newly inserted.
    pub fn insert_object(&mut self, key: Object, value: Object) -> ValueResult<bool> {
        let key = K::from_object(key)?;
        let value = V::from_object(value)?;
        Ok(self.insert_or_assign(key, value).1)
    }

    pub fn remove_object(&mut self, key: Object) -> ValueResult<Option<V>> {
        let key = K::from_object(key)?;
        Ok(self.map.remove(&key))
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Dict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .map
                .iter()
                .all(|(key, value)| other.map.get(key).is_some_and(|v| v == value))
    }
}

impl<K: DebugRender, V: DebugRender> DebugRender for Dict<K, V> {
    fn render(&self, out: &mut dyn fmt::Write, cfg: &DebugConfig, depth: usize) -> fmt::Result {
        write_mapping(out, cfg, depth, self.map.iter())
    }
}

impl<K: Hashable, V: BaseObject> BaseObject for Dict<K, V> {
    const TYPE_NAME: &'static str = "Dict";

    fn category(&self) -> Category {
        Category::Dict
    }

    fn less(&self, _other: &Self) -> ValueResult<bool> {
        Err(ValueError::unsupported("<", "Dict", "Dict"))
    }

    fn greater(&self, _other: &Self) -> ValueResult<bool> {
        Err(ValueError::unsupported(">", "Dict", "Dict"))
    }

    fn into_object(self) -> Object {
        Object::Dict(
            self.map
                .into_iter()
                .map(|(key, value)| (key.into_hashable(), value.into_object()))
                .collect(),
        )
    }

    fn from_object(object: Object) -> ValueResult<Self> {
        match object {
            Object::Dict(dict) => dict
                .map
                .into_iter()
                .map(|(key, value)| -> ValueResult<(K, V)> {
                    Ok((K::from_object(key.into_object())?, V::from_object(value)?))
                })
                .collect(),
            other => Err(ValueError::type_error(Self::TYPE_NAME, other.category_name())),
        }
    }
}

impl<K: Hashable, V: BaseObject> fmt::Display for Dict<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for Dict<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for Dict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K, V> IntoIterator for Dict<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Dict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Dict<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = hash_map::IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter_mut()
    }
}
