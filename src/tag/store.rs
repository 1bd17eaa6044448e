//! The native attribute store: an ordered mapping from native keys to
//! multi-value attribute lists.

use std::collections::BTreeMap;

use super::attribute::{Attribute, AttributeList};

/// An ordered mapping from a native key to one [`AttributeList`].
///
/// Keys are unique and iterated in a stable (sorted) order. The store never
/// holds an entry with zero elements: appending creates the list, removing
/// the last value deletes the key, and inserting an empty list is the same
/// as removing the key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeStore {
    entries: BTreeMap<String, AttributeList>,
}

impl AttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Whether any values are stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The values stored under `key`, empty if the key is absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> &[Attribute] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replaces the values stored under `key` with `values`.
    ///
    /// An empty `values` removes the key instead, keeping the no-empty-entry
    /// invariant.
    pub fn insert(&mut self, key: impl Into<String>, values: AttributeList) {
        let key = key.into();
        if values.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, values);
        }
    }

    /// Appends `value` to the list under `key`, creating the list if the key
    /// is absent.
    pub fn append(&mut self, key: impl Into<String>, value: Attribute) {
        self.entries.entry(key.into()).or_default().push(value);
    }

    /// Removes `key` and all its values, returning them if the key was
    /// present.
    pub fn remove(&mut self, key: &str) -> Option<AttributeList> {
        self.entries.remove(key)
    }

    /// Whether the store holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of keys in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over all `(key, values)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Attribute])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_and_extends() {
        let mut store = AttributeStore::new();
        assert!(!store.contains("WM/Genre"));

        store.append("WM/Genre", Attribute::from("Rock"));
        assert_eq!(store.lookup("WM/Genre"), [Attribute::from("Rock")]);

        store.append("WM/Genre", Attribute::from("Pop"));
        assert_eq!(
            store.lookup("WM/Genre"),
            [Attribute::from("Rock"), Attribute::from("Pop")]
        );
    }

    #[test]
    fn insert_replaces() {
        let mut store = AttributeStore::new();
        store.append("WM/Mood", Attribute::from("Calm"));
        store.insert("WM/Mood", vec![Attribute::from("Angry")]);
        assert_eq!(store.lookup("WM/Mood"), [Attribute::from("Angry")]);
    }

    #[test]
    fn insert_empty_removes_the_key() {
        let mut store = AttributeStore::new();
        store.append("WM/Mood", Attribute::from("Calm"));
        store.insert("WM/Mood", vec![]);
        assert!(!store.contains("WM/Mood"));
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_of_absent_key_is_empty() {
        let store = AttributeStore::new();
        assert!(store.lookup("WM/Missing").is_empty());
    }

    #[test]
    fn iteration_is_key_ordered() {
        let mut store = AttributeStore::new();
        store.append("WM/Mood", Attribute::from("Calm"));
        store.append("WM/AlbumTitle", Attribute::from("Album"));
        store.append("Acoustid/Id", Attribute::from("aa-bb"));

        let keys: Vec<_> = store.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["Acoustid/Id", "WM/AlbumTitle", "WM/Mood"]);
    }
}
