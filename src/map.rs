//! Ordered map type for JSON objects.
//!
//! This module provides [`JsonMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object members. Insertion order is what a
//! document author wrote and is preserved for storage and display; it is
//! never consulted by the comparison engine, which walks keys in sorted
//! order so that two objects differing only in member order diff as equal.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: re-serializing a parsed document reproduces
//!   the author's member order
//! - **Iteration order**: members iterate in insertion order
//! - **Compatibility**: predictable output makes testing and debugging easier
//!
//! ## Examples
//!
//! ```rust
//! use json_deep_diff::{JsonMap, Value};
//!
//! let mut map = JsonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to JSON values.
///
/// A thin wrapper around [`IndexMap`] that maintains insertion order.
///
/// # Examples
///
/// ```rust
/// use json_deep_diff::{JsonMap, Value};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(IndexMap<String, crate::Value>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::JsonMap;
    ///
    /// let map = JsonMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::{JsonMap, Value};
    ///
    /// let mut map = JsonMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_deep_diff::{JsonMap, Value};
    ///
    /// let mut map = JsonMap::new();
    /// map.insert("key".to_string(), Value::Null);
    /// assert!(map.contains_key("key"));
    /// assert!(!map.contains_key("other"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
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
}

impl From<HashMap<String, crate::Value>> for JsonMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        JsonMap(map.into_iter().collect())
    }
}

impl From<JsonMap> for HashMap<String, crate::Value> {
    fn from(map: JsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = JsonMap::new();
        map.insert("zebra".to_string(), Value::from(1));
        map.insert("apple".to_string(), Value::from(2));
        map.insert("mango".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn insert_replaces_and_returns_old() {
        let mut map = JsonMap::new();
        assert!(map.insert("k".to_string(), Value::from(1)).is_none());
        let old = map.insert("k".to_string(), Value::from(2));
        assert_eq!(old, Some(Value::from(1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn maps_equal_regardless_of_capacity() {
        let mut a = JsonMap::new();
        let mut b = JsonMap::with_capacity(16);
        a.insert("x".to_string(), Value::Null);
        b.insert("x".to_string(), Value::Null);
        assert_eq!(a, b);
    }
}
