use std::collections::HashSet;

use assoc::{Value, alist, kw, map};

/// Numeric addition over values; non-integers count as zero
pub fn add(a: &Value, b: &Value) -> Value {
    Value::Int(a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0))
}

/// Collects values into a set for order-insensitive comparisons
pub fn as_set(values: Vec<Value>) -> HashSet<Value> {
    values.into_iter().collect()
}

/// alist(:foo 5 :bar 6)
pub fn foo_bar() -> Value {
    alist![kw("foo"), 5, kw("bar"), 6].unwrap()
}

/// The same entries as `foo_bar` held in a keyed-map
pub fn foo_bar_map() -> Value {
    map![kw("foo"), 5, kw("bar"), 6].unwrap()
}

/// alist(:name "Arne" :stats alist(:score 99))
pub fn player() -> Value {
    alist![kw("name"), "Arne", kw("stats"), alist![kw("score"), 99].unwrap()].unwrap()
}

/// Index-sequence holding 0..len
pub fn index_seq(len: usize) -> Value {
    Value::Vector((0..len).map(Value::from).collect())
}

/// Every representation holding :foo -> 5 and :bar -> 6, plus an
/// index-sequence with the same values at positions 0 and 1
pub fn all_variants() -> Vec<Value> {
    vec![foo_bar(), foo_bar_map(), Value::Vector(vec![Value::Int(5), Value::Int(6)])]
}
