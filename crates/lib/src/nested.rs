//! Nested path operations.
//!
//! A path is a slice of keys describing a descent through nested
//! collections. Writes copy every level along the path and leave the input
//! untouched. Missing intermediate levels are always created as
//! pair-sequences, whatever their siblings look like.

use tracing::trace;

use crate::{
    Result,
    ops::{assoc_one, get},
    value::Value,
    variant::classify,
};

/// Follows `path` down from `coll`.
///
/// Returns `Ok(None)` as soon as a key is missing, or when a level along
/// the way is not a collection. An empty path yields `coll` itself.
pub fn get_in<'a>(coll: &'a Value, path: &[Value]) -> Result<Option<&'a Value>> {
    classify(coll)?;

    let mut current = coll;
    for key in path {
        match get(current, key) {
            Ok(Some(next)) => current = next,
            // Err here only means a leaf sits where a level was expected.
            Ok(None) | Err(_) => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Like [`get_in`], returning `fallback` when the path does not resolve.
pub fn get_in_or<'a>(coll: &'a Value, path: &[Value], fallback: &'a Value) -> Result<&'a Value> {
    Ok(get_in(coll, path)?.unwrap_or(fallback))
}

/// Sets `value` at the end of `path`, copying each level on the way down.
///
/// An empty path returns `coll` unchanged. A level that is absent (or
/// `Null`) is synthesized as a pair-sequence; a level that holds a
/// non-collection value fails with `NotAssociative`.
///
/// ```
/// # use assoc::{alist, assoc_in, equal, kw};
/// let player = alist![kw("name"), "Arne"]?;
/// let scored = assoc_in(&player, &[kw("stats"), kw("score")], 100.into())?;
/// assert!(equal(
///     &scored,
///     &alist![kw("name"), "Arne", kw("stats"), alist![kw("score"), 100]?]?
/// ));
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn assoc_in(coll: &Value, path: &[Value], value: Value) -> Result<Value> {
    match path {
        [] => {
            classify(coll)?;
            Ok(coll.clone())
        }
        [key] => assoc_one(coll, key.clone(), value),
        [key, rest @ ..] => {
            let absent = Value::Null;
            let child = child_level(coll, key, &absent)?;
            let updated = assoc_in(child, rest, value)?;
            assoc_one(coll, key.clone(), updated)
        }
    }
}

/// Sets `key` to `f(old)`, where `old` is the current value or `Null`.
///
/// Extra arguments to the update function are captured by the closure.
pub fn update<F>(coll: &Value, key: &Value, f: F) -> Result<Value>
where
    F: FnOnce(&Value) -> Value,
{
    let absent = Value::Null;
    let updated = f(get(coll, key)?.unwrap_or(&absent));
    assoc_one(coll, key.clone(), updated)
}

/// [`update`] applied at the end of `path`, with the same descent and
/// level synthesis as [`assoc_in`]. An empty path returns `coll` unchanged.
pub fn update_in<F>(coll: &Value, path: &[Value], f: F) -> Result<Value>
where
    F: FnOnce(&Value) -> Value,
{
    match path {
        [] => {
            classify(coll)?;
            Ok(coll.clone())
        }
        [key] => update(coll, key, f),
        [key, rest @ ..] => {
            let absent = Value::Null;
            let child = child_level(coll, key, &absent)?;
            let updated = update_in(child, rest, f)?;
            assoc_one(coll, key.clone(), updated)
        }
    }
}

/// The level under `key`, or `absent` when nothing is stored there yet.
fn child_level<'a>(coll: &'a Value, key: &Value, absent: &'a Value) -> Result<&'a Value> {
    match get(coll, key)? {
        Some(child) => Ok(child),
        None => {
            trace!(%key, "synthesizing missing level");
            Ok(absent)
        }
    }
}
