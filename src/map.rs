//! Ordered map type for object nodes.
//!
//! This module provides [`FieldMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for object keys. Field entries are processed in input order,
//! and that order must survive in the built structure: both the flattener and any
//! JSON rendering of the result iterate keys in the order they were first
//! assigned.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: keys iterate in a consistent order
//! - **Faithful round-trips**: build → flatten reproduces the input field order
//! - **Predictable tests**: no hash-order flakiness
//!
//! ## Examples
//!
//! ```rust
//! use formtree::{FieldMap, Value};
//!
//! let mut map = FieldMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to [`Value`](crate::Value)s.
///
/// # Examples
///
/// ```rust
/// use formtree::{FieldMap, Value};
///
/// let mut map = FieldMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMap(IndexMap<String, crate::Value>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced and the old
    /// value returned; the key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    ///
    /// The deep assigner uses this to decide whether an array-append entry can
    /// still be grouped into the previous element.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Inserts `value` under `key` if absent, then returns a mutable reference
    /// to the slot.
    pub fn entry_or_insert(&mut self, key: &str, value: crate::Value) -> &mut crate::Value {
        self.0.entry(key.to_string()).or_insert(value)
    }
}

impl From<HashMap<String, crate::Value>> for FieldMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        FieldMap(map.into_iter().collect())
    }
}

impl From<FieldMap> for HashMap<String, crate::Value> {
    fn from(map: FieldMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = FieldMap::new();
        map.insert("z".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        map.insert("m".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = FieldMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        let old = map.insert("a".to_string(), Value::from(3));

        assert_eq!(old, Some(Value::from(1)));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_entry_or_insert() {
        let mut map = FieldMap::new();
        *map.entry_or_insert("n", Value::from(0)) = Value::from(7);
        assert_eq!(map.get("n"), Some(&Value::from(7)));

        // existing slot is returned untouched
        let slot = map.entry_or_insert("n", Value::from(0));
        assert_eq!(*slot, Value::from(7));
    }
}
