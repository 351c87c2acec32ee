//! Composite operations built from the primitive accessors and mutators.
//!
//! Nothing in here looks at which representation a collection uses, so a
//! pair-sequence, index-sequence and keyed-map can be freely mixed.

use std::collections::HashSet;

use crate::{
    Result,
    ops::{assoc_one, get, iter},
    value::Value,
    variant::classify,
};

/// The `(key, value)` pairs that lookup can see, in natural order.
///
/// Each distinct key appears once, paired with what [`get`] returns for
/// it, so shadowed duplicates in a pair-sequence are skipped.
fn visible_entries(coll: &Value) -> Result<Vec<(Value, &Value)>> {
    let mut seen = HashSet::new();
    let mut visible = Vec::new();
    for (key, _) in iter(coll)? {
        if !seen.insert(key.clone()) {
            continue;
        }
        if let Some(value) = get(coll, &key)? {
            visible.push((key, value));
        }
    }
    Ok(visible)
}

/// Deep, representation-agnostic equality.
///
/// Two collections are equal when they have the same number of distinct
/// keys and every visible pair of `a` is found in `b` with an equal value.
/// Nested collections are compared the same way; anything that is not a
/// collection falls back to plain value equality.
///
/// ```
/// # use assoc::{alist, equal, kw, map};
/// let pairs = alist![kw("a"), 1, kw("b"), 2]?;
/// let keyed = map![kw("b"), 2, kw("a"), 1]?;
/// assert!(equal(&pairs, &keyed));
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn equal(a: &Value, b: &Value) -> bool {
    let (Ok(pairs_a), Ok(pairs_b)) = (visible_entries(a), visible_entries(b)) else {
        return a == b;
    };
    if pairs_a.len() != pairs_b.len() {
        return false;
    }

    // Equal distinct-key counts mean one-way containment is enough.
    pairs_a.iter().all(|(key, value)| match get(b, key) {
        Ok(Some(other)) => equal(value, other),
        _ => false,
    })
}

/// Folds `f(acc, key, value)` over `coll` in its natural key order.
///
/// A key repeated in a pair-sequence is visited once, with its first value.
pub fn reduce_kv<T, F>(coll: &Value, init: T, mut f: F) -> Result<T>
where
    F: FnMut(T, &Value, &Value) -> T,
{
    Ok(visible_entries(coll)?
        .into_iter()
        .fold(init, |acc, (key, value)| f(acc, &key, value)))
}

/// Merges collections left to right; later values win on key collision.
///
/// The result has the representation of the first non-`Null` argument.
/// With no arguments the result is `Null`, and a single argument is
/// returned as is.
pub fn merge<'a>(colls: impl IntoIterator<Item = &'a Value>) -> Result<Value> {
    merge_with(colls, |_, incoming| incoming.clone())
}

/// Like [`merge`], but a key present on both sides becomes
/// `combine(existing, incoming)`.
///
/// ```
/// # use assoc::{Value, alist, equal, kw, merge_with};
/// let add = |a: &Value, b: &Value| Value::Int(a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
/// let merged = merge_with([&alist![kw("foo"), 5, kw("bar"), 6]?, &alist![kw("foo"), 10]?], add)?;
/// assert!(equal(&merged, &alist![kw("foo"), 15, kw("bar"), 6]?));
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn merge_with<'a, F>(colls: impl IntoIterator<Item = &'a Value>, mut combine: F) -> Result<Value>
where
    F: FnMut(&Value, &Value) -> Value,
{
    let mut colls = colls.into_iter().skip_while(|coll| coll.is_null());
    let Some(first) = colls.next() else {
        return Ok(Value::Null);
    };
    classify(first)?;

    colls.try_fold(first.clone(), |acc, incoming| {
        visible_entries(incoming)?.into_iter().try_fold(acc, |acc, (key, value)| {
            let merged = match get(&acc, &key)? {
                Some(existing) => combine(existing, value),
                None => value.clone(),
            };
            assoc_one(&acc, key, merged)
        })
    })
}
