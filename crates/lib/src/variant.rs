//! Representation classifier and per-variant primitives.
//!
//! [`classify`] is the single place where a [`Value`] is inspected to decide
//! which associative representation it is. It returns a borrowed [`Coll`]
//! view on which the primitive reads and copy-on-write writes are
//! dispatched. Everything above this module works through the primitive
//! functions in [`crate::ops`] and never matches on the variant itself.

use std::fmt;

use tracing::{debug, trace};

use crate::{alist::Alist, errors::AssocError, map::Map, value::Value};

/// The three supported associative representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Ordered `(key, value)` pairs
    PairSeq,
    /// Ordered values keyed by position
    IndexSeq,
    /// Hash-style mapping
    KeyedMap,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::PairSeq => "pair-sequence",
            Variant::IndexSeq => "index-sequence",
            Variant::KeyedMap => "keyed-map",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backing store for `Null`, which reads as an empty pair-sequence.
static EMPTY_ALIST: Alist = Alist::new();

/// A classified, borrowed view of an associative value.
#[derive(Debug, Clone, Copy)]
pub enum Coll<'a> {
    Pairs(&'a Alist),
    Index(&'a [Value]),
    Keyed(&'a Map),
}

/// Classifies `value` as one of the supported representations.
///
/// `Null` is the absent collection and classifies as an empty
/// pair-sequence. Leaf values fail with [`AssocError::NotAssociative`].
///
/// # Examples
///
/// ```
/// # use assoc::{Value, Variant, classify};
/// assert_eq!(classify(&Value::Null).unwrap().variant(), Variant::PairSeq);
/// assert_eq!(classify(&Value::Vector(vec![])).unwrap().variant(), Variant::IndexSeq);
/// assert!(classify(&Value::Int(3)).is_err());
/// ```
pub fn classify(value: &Value) -> Result<Coll<'_>, AssocError> {
    match value {
        Value::Null => Ok(Coll::Pairs(&EMPTY_ALIST)),
        Value::Alist(alist) => Ok(Coll::Pairs(alist)),
        Value::Vector(items) => Ok(Coll::Index(items)),
        Value::Map(map) => Ok(Coll::Keyed(map)),
        other => {
            debug!(type_name = other.type_name(), "value is not associative");
            Err(AssocError::NotAssociative {
                type_name: other.type_name().to_string(),
            })
        }
    }
}

impl<'a> Coll<'a> {
    pub fn variant(&self) -> Variant {
        match self {
            Coll::Pairs(_) => Variant::PairSeq,
            Coll::Index(_) => Variant::IndexSeq,
            Coll::Keyed(_) => Variant::KeyedMap,
        }
    }

    /// Looks up `key`. Index-sequences treat anything but an in-bounds
    /// non-negative integer as absent.
    pub fn get(&self, key: &Value) -> Option<&'a Value> {
        match *self {
            Coll::Pairs(alist) => alist.get(key),
            Coll::Index(items) => key.as_index().and_then(|index| items.get(index)),
            Coll::Keyed(map) => map.get(key),
        }
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        match *self {
            Coll::Pairs(alist) => alist.contains_key(key),
            Coll::Index(items) => key.as_index().is_some_and(|index| index < items.len()),
            Coll::Keyed(map) => map.contains_key(key),
        }
    }

    /// Number of key/value pairs; sequence length for sequences
    pub fn len(&self) -> usize {
        match *self {
            Coll::Pairs(alist) => alist.len(),
            Coll::Index(items) => items.len(),
            Coll::Keyed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(key, value)` pairs in the natural order of the representation
    pub fn entries(&self) -> Entries<'a> {
        match *self {
            Coll::Pairs(alist) => Entries::Pairs(alist.iter()),
            Coll::Index(items) => Entries::Index(items.iter().enumerate()),
            Coll::Keyed(map) => Entries::Keyed(map.iter()),
        }
    }

    /// Builds a new collection of the same representation with one mapping set.
    ///
    /// Writing past the end of an index-sequence grows it to `key + 1`
    /// elements, filling the gap with `Null`. A position too large to
    /// allocate fails with [`AssocError::InvalidKey`].
    pub fn assoc_one(&self, key: Value, value: Value) -> Result<Value, AssocError> {
        match *self {
            Coll::Pairs(alist) => Ok(Value::Alist(alist.with(key, value))),
            Coll::Keyed(map) => Ok(Value::Map(map.with(key, value))),
            Coll::Index(items) => {
                let Some(index) = key.as_index() else {
                    debug!(%key, "rejected index-sequence key");
                    return Err(AssocError::InvalidKey {
                        key: key.to_string(),
                        reason: "index-sequence keys must be non-negative integers".to_string(),
                    });
                };

                let mut items = items.to_vec();
                if let Some(slot) = items.get_mut(index) {
                    *slot = value;
                } else {
                    trace!(from = items.len(), to = index + 1, "growing index-sequence");
                    let additional = (index - items.len()).saturating_add(1);
                    if items.try_reserve_exact(additional).is_err() {
                        debug!(%key, "index-sequence growth failed to allocate");
                        return Err(AssocError::InvalidKey {
                            key: key.to_string(),
                            reason: format!("cannot grow index-sequence to {index} elements"),
                        });
                    }
                    items.resize(index, Value::Null);
                    items.push(value);
                }
                Ok(Value::Vector(items))
            }
        }
    }

    /// Builds a new collection without `key`, or `None` if the key is absent.
    ///
    /// Index-sequences cannot drop a position without re-indexing, so they
    /// fail with [`AssocError::UnsupportedVariant`].
    pub fn without(&self, key: &Value) -> Result<Option<Value>, AssocError> {
        match *self {
            Coll::Index(_) => Err(AssocError::UnsupportedVariant {
                operation: "dissoc".to_string(),
                variant: Variant::IndexSeq.to_string(),
            }),
            _ if !self.contains_key(key) => Ok(None),
            Coll::Pairs(alist) => Ok(Some(Value::Alist(alist.without(key)))),
            Coll::Keyed(map) => Ok(Some(Value::Map(map.without(key)))),
        }
    }
}

/// Iterator over the `(key, value)` pairs of a [`Coll`].
///
/// Index-sequence keys are synthesized as [`Value::Int`] positions.
pub enum Entries<'a> {
    Pairs(std::slice::Iter<'a, (Value, Value)>),
    Index(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Keyed(std::collections::hash_map::Iter<'a, Value, Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Pairs(iter) => iter.next().map(|(k, v)| (k.clone(), v)),
            Entries::Index(iter) => iter.next().map(|(i, v)| (Value::from(i), v)),
            Entries::Keyed(iter) => iter.next().map(|(k, v)| (k.clone(), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Pairs(iter) => iter.size_hint(),
            Entries::Index(iter) => iter.size_hint(),
            Entries::Keyed(iter) => iter.size_hint(),
        }
    }
}
