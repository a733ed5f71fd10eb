//! Ordered map type for bencode dictionaries.
//!
//! This module provides [`BencodeMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for dictionary entries. This matters for bencode
//! because the decoder preserves the order keys appear on the wire, while the
//! encoder re-sorts entries into ascending byte-wise key order when emitting
//! canonical output.
//!
//! ## Why IndexMap?
//!
//! Bencode uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Wire-order observation**: decoding reports keys in the order they were
//!   read, which is useful when inspecting non-canonical input
//! - **Deterministic iteration**: easier testing and debugging with
//!   predictable output
//! - **Order-insensitive equality**: two maps compare equal when they hold
//!   the same entries, regardless of insertion order
//!
//! Keys are raw byte sequences, never text. Torrent files routinely carry
//! non-UTF-8 keys and values, so nothing in this type depends on a text
//! encoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bencode::{BencodeMap, Value};
//!
//! let mut map = BencodeMap::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert("age", Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(b"name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// An insertion-ordered map of byte-string keys to bencode values.
///
/// This is a thin wrapper around [`IndexMap`] that records the order entries
/// arrive in. A map built by the decoder iterates in wire order; the encoder
/// sorts entries by raw key bytes on the way out, so insertion order never
/// affects the canonical encoding.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{BencodeMap, Value};
///
/// let mut map = BencodeMap::new();
/// map.insert("first", Value::from(1));
/// map.insert("second", Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![b"first".to_vec(), b"second".to_vec()]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BencodeMap(IndexMap<Vec<u8>, crate::Value>);

impl BencodeMap {
    /// Creates an empty `BencodeMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::BencodeMap;
    ///
    /// let map = BencodeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        BencodeMap(IndexMap::new())
    }

    /// Creates an empty `BencodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BencodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    ///
    /// The key may be anything convertible to raw bytes (`&str`, `String`,
    /// `&[u8]`, `Vec<u8>`, byte literals).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::{BencodeMap, Value};
    ///
    /// let mut map = BencodeMap::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert(b"key".to_vec(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::{BencodeMap, Value};
    ///
    /// let mut map = BencodeMap::new();
    /// map.insert("key", Value::from(42));
    /// assert_eq!(map.get(b"key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &[u8]) -> bool {
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
    pub fn keys(&self) -> indexmap::map::Keys<'_, Vec<u8>, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Vec<u8>, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Vec<u8>, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<Vec<u8>, crate::Value>> for BencodeMap {
    fn from(map: HashMap<Vec<u8>, crate::Value>) -> Self {
        BencodeMap(map.into_iter().collect())
    }
}

impl From<BTreeMap<Vec<u8>, crate::Value>> for BencodeMap {
    fn from(map: BTreeMap<Vec<u8>, crate::Value>) -> Self {
        BencodeMap(map.into_iter().collect())
    }
}

impl From<BencodeMap> for HashMap<Vec<u8>, crate::Value> {
    fn from(map: BencodeMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for BencodeMap {
    type Item = (Vec<u8>, crate::Value);
    type IntoIter = indexmap::map::IntoIter<Vec<u8>, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BencodeMap {
    type Item = (&'a Vec<u8>, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, Vec<u8>, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, crate::Value)> for BencodeMap {
    fn from_iter<T: IntoIterator<Item = (K, crate::Value)>>(iter: T) -> Self {
        BencodeMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = BencodeMap::new();
        map.insert("zebra", Value::from(1));
        map.insert("apple", Value::from(2));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![b"zebra".to_vec(), b"apple".to_vec()]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = BencodeMap::new();
        a.insert("x", Value::from(1));
        a.insert("y", Value::from(2));

        let mut b = BencodeMap::new();
        b.insert("y", Value::from(2));
        b.insert("x", Value::from(1));

        assert_eq!(a, b);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = BencodeMap::new();
        map.insert("a", Value::from(1));
        map.insert("b", Value::from(2));
        let old = map.insert("a", Value::from(3));

        assert_eq!(old, Some(Value::from(1)));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec()]);
        assert_eq!(map.get(b"a"), Some(&Value::from(3)));
    }
}
