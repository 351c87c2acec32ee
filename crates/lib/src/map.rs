//! Keyed-map representation.
//!
//! [`Map`] wraps a `HashMap<Value, Value>`. Keys compare by deep value
//! equality, and iteration order is whatever the hash table yields.

use std::{
    collections::{HashMap, hash_map::DefaultHasher},
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// Hash-style mapping from values to values.
///
/// Write methods return a full copy with the change applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    entries: HashMap<Value, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Builds a map from pairs; a later duplicate key overwrites an earlier one
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates in hash-table order, which is not stable across maps
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, Value, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a copy with `key` set to `value`
    pub fn with(&self, key: Value, value: Value) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key, value);
        Self { entries }
    }

    /// Returns a copy without `key`
    pub fn without(&self, key: &Value) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(key);
        Self { entries }
    }
}

// Order-independent so equal maps hash equally regardless of bucket layout.
impl Hash for Map {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        let combined = self
            .entries
            .iter()
            .map(|(key, value)| {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                value.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0u64, u64::wrapping_add);
        combined.hash(state);
    }
}

// Keys are arbitrary values, so maps travel as a sequence of [key, value] pairs.
impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(Value, Value)>::deserialize(deserializer)?;
        Ok(Self::from_pairs(pairs))
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = std::collections::hash_map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key} {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}
