//! Primitive accessors and copy-on-write mutators.
//!
//! These are the only functions that touch a classified
//! [`Coll`](crate::variant::Coll). Composite and nested operations are
//! written purely in terms of them.

use tracing::debug;

use crate::{
    Result,
    errors::AssocError,
    value::Value,
    variant::{Entries, classify},
};

/// Looks up `key` in `coll`.
///
/// Returns `Ok(None)` when the key is absent. For an index-sequence, an
/// out-of-bounds, negative or non-integer key is absent rather than an error.
pub fn get<'a>(coll: &'a Value, key: &Value) -> Result<Option<&'a Value>> {
    Ok(classify(coll)?.get(key))
}

/// Looks up `key` in `coll`, returning `fallback` if it is absent.
///
/// ```
/// # use assoc::{Value, alist, get_or, kw};
/// let coll = alist![kw("a"), 1]?;
/// let missing = Value::from("none");
/// assert_eq!(get_or(&coll, &kw("a"), &missing)?, &Value::Int(1));
/// assert_eq!(get_or(&coll, &kw("b"), &missing)?, &missing);
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn get_or<'a>(coll: &'a Value, key: &Value, fallback: &'a Value) -> Result<&'a Value> {
    Ok(get(coll, key)?.unwrap_or(fallback))
}

pub fn has_key(coll: &Value, key: &Value) -> Result<bool> {
    Ok(classify(coll)?.contains_key(key))
}

/// Lazily walks `(key, value)` pairs in natural order: sequence order for
/// sequences, hash order for maps.
pub fn iter(coll: &Value) -> Result<Entries<'_>> {
    Ok(classify(coll)?.entries())
}

pub fn keys(coll: &Value) -> Result<Vec<Value>> {
    Ok(iter(coll)?.map(|(key, _)| key).collect())
}

/// Values in the same order as [`keys`].
pub fn vals(coll: &Value) -> Result<Vec<Value>> {
    Ok(iter(coll)?.map(|(_, value)| value.clone()).collect())
}

/// `(key, value)` pairs in the same order as [`keys`].
pub fn entries(coll: &Value) -> Result<Vec<(Value, Value)>> {
    Ok(iter(coll)?.map(|(key, value)| (key, value.clone())).collect())
}

pub fn count(coll: &Value) -> Result<usize> {
    Ok(classify(coll)?.len())
}

/// Returns a new collection of the same representation with `key` set.
///
/// A pair-sequence rewrites every entry for an existing key in place and
/// prepends a new key. An index-sequence overwrites in bounds and grows
/// with `Null` padding past the end. A keyed-map is copied with the entry
/// set. `Null` is treated as an empty pair-sequence.
pub fn assoc_one(coll: &Value, key: Value, value: Value) -> Result<Value> {
    Ok(classify(coll)?.assoc_one(key, value)?)
}

/// Applies a flat `k1, v1, k2, v2, ...` list left to right.
///
/// The list length is checked before anything is applied.
///
/// ```
/// # use assoc::{alist, assoc, equal, kw};
/// let coll = alist![kw("foo"), 5, kw("bar"), 6]?;
/// let updated = assoc(&coll, [kw("foo"), 7.into(), kw("baz"), 20.into()])?;
/// assert!(equal(&updated, &alist![kw("baz"), 20, kw("foo"), 7, kw("bar"), 6]?));
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn assoc(coll: &Value, kvs: impl IntoIterator<Item = Value>) -> Result<Value> {
    let pairs = into_pairs("assoc", kvs)?;
    classify(coll)?;
    pairs
        .into_iter()
        .try_fold(coll.clone(), |acc, (key, value)| assoc_one(&acc, key, value))
}

/// Returns a new collection with `key` removed.
///
/// A collection that lacks the key is returned unchanged. Index-sequences
/// fail with [`AssocError::UnsupportedVariant`].
pub fn dissoc(coll: &Value, key: &Value) -> Result<Value> {
    match classify(coll)?.without(key)? {
        Some(removed) => Ok(removed),
        None => Ok(coll.clone()),
    }
}

/// Removes each key in turn.
pub fn dissoc_all<'k>(coll: &Value, keys: impl IntoIterator<Item = &'k Value>) -> Result<Value> {
    classify(coll)?;
    keys.into_iter()
        .try_fold(coll.clone(), |acc, key| dissoc(&acc, key))
}

/// Splits a flat argument list into pairs, rejecting odd lengths.
pub(crate) fn into_pairs(
    operation: &str,
    flat: impl IntoIterator<Item = Value>,
) -> Result<Vec<(Value, Value)>> {
    let flat: Vec<Value> = flat.into_iter().collect();
    if flat.len() % 2 != 0 {
        debug!(operation, count = flat.len(), "odd key/value argument list");
        return Err(AssocError::Arity {
            operation: operation.to_string(),
            count: flat.len(),
        }
        .into());
    }

    let mut iter = flat.into_iter();
    let mut pairs = Vec::with_capacity(iter.len() / 2);
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        pairs.push((key, value));
    }
    Ok(pairs)
}
