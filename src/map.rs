//! Ordered map type for document objects.
//!
//! This module provides [`PropMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for object entries. Properties files are read top to bottom,
//! and keeping that order makes serialized output deterministic and diffs against
//! the source file readable.
//!
//! ## Why IndexMap?
//!
//! `PropMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: Entries serialize in a consistent order
//! - **Iteration order**: Entries are iterated in insertion order
//! - **Value equality**: `PartialEq` compares by key/value content, not order,
//!   which matches the document contract (entry order is not semantically
//!   significant)
//!
//! ## Examples
//!
//! ```rust
//! use props2json::{PropMap, Value};
//!
//! let mut map = PropMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to document values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// Every object node of a converted document, including the root, is a
/// `PropMap`.
///
/// # Examples
///
/// ```rust
/// use props2json::{PropMap, Value};
///
/// let mut map = PropMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropMap(IndexMap<String, crate::Value>);

impl PropMap {
    /// Creates an empty `PropMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::PropMap;
    ///
    /// let map = PropMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        PropMap(IndexMap::new())
    }

    /// Creates an empty `PropMap` with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::PropMap;
    ///
    /// let map = PropMap::with_capacity(10);
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    /// This is the "later pair wins" behavior for repeated property keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::{PropMap, Value};
    ///
    /// let mut map = PropMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::{PropMap, Value};
    ///
    /// let mut map = PropMap::new();
    /// map.insert("key".to_string(), Value::from(42));
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Gets the entry for a key, for in-place insertion or update.
    pub fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, crate::Value> {
        self.0.entry(key)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::{PropMap, Value};
    ///
    /// let mut map = PropMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert("key".to_string(), Value::from(42));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use props2json::PropMap;
    ///
    /// let map = PropMap::new();
    /// assert!(map.is_empty());
    /// ```
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

impl Default for PropMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Value>> for PropMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        PropMap(map.into_iter().collect())
    }
}

impl From<PropMap> for HashMap<String, crate::Value> {
    fn from(map: PropMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for PropMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for PropMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        PropMap(IndexMap::from_iter(iter))
    }
}
