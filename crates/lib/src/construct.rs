//! Constructors for pair-sequences and keyed-maps.
//!
//! The flat forms take `k1, v1, k2, v2, ...` and reject odd lengths with an
//! arity error. The [`alist!`](crate::alist!) and [`map!`](crate::map!)
//! macros wrap them so each item only needs to be `Into<Value>`.

use crate::{Result, alist::Alist, map::Map, ops::into_pairs, value::Value};

/// Builds a pair-sequence from a flat key/value list, keeping argument order.
pub fn alist(flat: impl IntoIterator<Item = Value>) -> Result<Value> {
    Ok(alist_from_pairs(into_pairs("alist", flat)?))
}

/// Builds a keyed-map from a flat key/value list; a repeated key keeps its
/// last value.
pub fn map(flat: impl IntoIterator<Item = Value>) -> Result<Value> {
    Ok(map_from_pairs(into_pairs("map", flat)?))
}

pub fn alist_from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Value {
    Value::Alist(Alist::from_pairs(pairs))
}

pub fn map_from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Value {
    Value::Map(Map::from_pairs(pairs))
}

/// Builds a pair-sequence from `key, value, ...` expressions.
///
/// Expands to a call to [`alist`](fn@crate::alist) and so returns a
/// `Result`.
///
/// ```
/// # use assoc::{alist, count, kw};
/// let coll = alist![kw("a"), 1, kw("b"), "two"]?;
/// assert_eq!(count(&coll)?, 2);
/// assert!(alist![kw("a"), 1, kw("b")].is_err());
/// # Ok::<(), assoc::Error>(())
/// ```
#[macro_export]
macro_rules! alist {
    () => {
        $crate::alist(::std::vec::Vec::<$crate::Value>::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::alist(::std::vec![$($crate::Value::from($item)),+])
    };
}

/// Builds a keyed-map from `key, value, ...` expressions.
///
/// Expands to a call to [`map`](fn@crate::map) and so returns a `Result`.
#[macro_export]
macro_rules! map {
    () => {
        $crate::map(::std::vec::Vec::<$crate::Value>::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::map(::std::vec![$($crate::Value::from($item)),+])
    };
}
