//! Pair-sequence (association list) representation.
//!
//! An [`Alist`] is an ordered sequence of `(key, value)` entries. Duplicate
//! keys are allowed: lookup sees only the first occurrence, while a write
//! rewrites every occurrence so duplicates stay consistent with each other.

use std::fmt;

use crate::value::Value;

/// Ordered sequence of `(key, value)` pairs.
///
/// All write methods return a new `Alist` and leave `self` untouched.
///
/// # Examples
///
/// ```
/// # use assoc::{Alist, Value, kw};
/// let alist = Alist::from_pairs([(kw("foo"), Value::Int(5)), (kw("bar"), Value::Int(6))]);
/// let updated = alist.with(kw("baz"), Value::Int(20));
///
/// // New keys are prepended
/// assert_eq!(updated.keys().next(), Some(&kw("baz")));
/// // The original is unchanged
/// assert_eq!(alist.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Alist {
    entries: Vec<(Value, Value)>,
}

impl Alist {
    /// Creates a new empty pair-sequence
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a pair-sequence keeping the given order and any duplicates
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry whose key equals `key`
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterates over entries in sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns a copy with `key` set to `value`.
    ///
    /// If the key is present, every matching entry gets the new value in its
    /// existing position. Otherwise the pair is prepended, so the most
    /// recently added key comes first.
    pub fn with(&self, key: Value, value: Value) -> Self {
        if self.contains_key(&key) {
            let entries = self
                .entries
                .iter()
                .map(|(k, v)| {
                    if *k == key {
                        (k.clone(), value.clone())
                    } else {
                        (k.clone(), v.clone())
                    }
                })
                .collect();
            Self { entries }
        } else {
            let mut entries = Vec::with_capacity(self.entries.len() + 1);
            entries.push((key, value));
            entries.extend(self.entries.iter().cloned());
            Self { entries }
        }
    }

    /// Returns a copy with every entry for `key` dropped
    pub fn without(&self, key: &Value) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<(Value, Value)> for Alist {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl IntoIterator for Alist {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Alist {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Alist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({key} . {value})")?;
        }
        write!(f, ")")
    }
}
