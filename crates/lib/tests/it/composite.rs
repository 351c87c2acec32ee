//! Composite operation tests
//!
//! equal, merge, merge_with and reduce_kv work across representations
//! because they only go through the primitives.

use assoc::{Value, Variant, alist, equal, get, kw, map, merge, merge_with, reduce_kv};

use super::helpers::*;

#[test]
fn test_equal_is_reflexive_and_symmetric() {
    for a in all_variants() {
        assert!(equal(&a, &a));
        for b in all_variants() {
            assert_eq!(equal(&a, &b), equal(&b, &a));
        }
    }
}

#[test]
fn test_equal_across_representations() {
    let pairs = foo_bar();
    let keyed = foo_bar_map();
    assert!(equal(&pairs, &keyed));

    // Order does not matter for pair-sequences either
    let reversed = alist![kw("bar"), 6, kw("foo"), 5].unwrap();
    assert!(equal(&pairs, &reversed));
    assert_ne!(pairs, reversed);
}

#[test]
fn test_equal_requires_same_count() {
    let smaller = alist![kw("foo"), 5].unwrap();
    assert!(!equal(&foo_bar(), &smaller));
    assert!(!equal(&smaller, &foo_bar()));
}

#[test]
fn test_equal_compares_values() {
    let changed = map![kw("foo"), 5, kw("bar"), 7].unwrap();
    assert!(!equal(&foo_bar(), &changed));
}

#[test]
fn test_equal_index_sequence_and_positional_map() {
    let seq = Value::Vector(vec![kw("a"), kw("b")]);
    let positional = map![0, kw("a"), 1, kw("b")].unwrap();
    assert!(equal(&seq, &positional));
}

#[test]
fn test_equal_nested_mixed_representations() {
    let a = alist![kw("stats"), map![kw("score"), 99].unwrap()].unwrap();
    let b = map![kw("stats"), alist![kw("score"), 99].unwrap()].unwrap();
    assert!(equal(&a, &b));

    let c = map![kw("stats"), alist![kw("score"), 98].unwrap()].unwrap();
    assert!(!equal(&a, &c));
}

#[test]
fn test_equal_leaves_and_null() {
    assert!(equal(&Value::Int(1), &Value::Int(1)));
    assert!(!equal(&Value::Int(1), &Value::from("1")));
    assert!(!equal(&Value::Int(1), &foo_bar()));

    // Null is the empty collection
    assert!(equal(&Value::Null, &alist![].unwrap()));
    assert!(equal(&Value::Null, &map![].unwrap()));
}

#[test]
fn test_merge_later_wins() {
    let overrides = map![kw("foo"), 10, kw("baz"), 1].unwrap();
    let merged = merge([&foo_bar(), &overrides]).unwrap();

    assert_eq!(merged.variant(), Some(Variant::PairSeq));
    let expected = alist![kw("foo"), 10, kw("bar"), 6, kw("baz"), 1].unwrap();
    assert!(equal(&merged, &expected));
}

#[test]
fn test_merge_keeps_first_representation() {
    let merged = merge([&foo_bar_map(), &alist![kw("baz"), 1].unwrap()]).unwrap();
    assert_eq!(merged.variant(), Some(Variant::KeyedMap));
}

#[test]
fn test_merge_single_and_empty() {
    let coll = foo_bar();
    assert_eq!(merge([&coll]).unwrap(), coll);
    assert_eq!(merge(std::iter::empty::<&Value>()).unwrap(), Value::Null);
}

#[test]
fn test_merge_skips_leading_null() {
    let merged = merge([&Value::Null, &foo_bar_map()]).unwrap();
    assert_eq!(merged, foo_bar_map());

    let merged = merge([&foo_bar(), &Value::Null]).unwrap();
    assert_eq!(merged, foo_bar());
}

#[test]
fn test_merge_rejects_leaves() {
    assert!(merge([&Value::Int(1)]).unwrap_err().is_not_associative());
    assert!(
        merge([&foo_bar(), &Value::from("x")])
            .unwrap_err()
            .is_not_associative()
    );
}

#[test]
fn test_merge_index_sequence_into_map() {
    let seq = Value::Vector(vec![kw("a"), kw("b")]);
    let merged = merge([&map![].unwrap(), &seq]).unwrap();
    assert_eq!(merged, map![0, kw("a"), 1, kw("b")].unwrap());
}

#[test]
fn test_merge_with_combines_collisions() {
    let merged = merge_with([&foo_bar(), &alist![kw("foo"), 10].unwrap()], add).unwrap();
    assert_eq!(get(&merged, &kw("foo")).unwrap(), Some(&Value::Int(15)));
    assert_eq!(get(&merged, &kw("bar")).unwrap(), Some(&Value::Int(6)));
}

#[test]
fn test_merge_with_captured_arguments() {
    let weight = 3;
    let merged = merge_with([&foo_bar_map(), &foo_bar_map()], |a, b| {
        Value::Int(a.as_int().unwrap_or(0) + weight * b.as_int().unwrap_or(0))
    })
    .unwrap();
    assert!(equal(&merged, &map![kw("foo"), 20, kw("bar"), 24].unwrap()));
}

#[test]
fn test_reduce_kv_sums_values() {
    let total = reduce_kv(&foo_bar_map(), 0, |acc, _, value| {
        acc + value.as_int().unwrap_or(0)
    })
    .unwrap();
    assert_eq!(total, 11);
}

#[test]
fn test_reduce_kv_visits_sequence_order() {
    let seq = Value::Vector(vec![kw("a"), kw("b"), kw("c")]);
    let visited = reduce_kv(&seq, Vec::new(), |mut acc, key, value| {
        acc.push((key.clone(), value.clone()));
        acc
    })
    .unwrap();
    assert_eq!(
        visited,
        vec![
            (Value::Int(0), kw("a")),
            (Value::Int(1), kw("b")),
            (Value::Int(2), kw("c")),
        ]
    );
}

#[test]
fn test_reduce_kv_on_null() {
    let calls = reduce_kv(&Value::Null, 0, |acc, _, _| acc + 1).unwrap();
    assert_eq!(calls, 0);
}

#[test]
fn test_equal_duplicate_keys_reflexive() {
    let shadowed = alist![kw("a"), 1, kw("a"), 2].unwrap();
    assert!(equal(&shadowed, &shadowed));
    assert!(equal(&shadowed, &map![kw("a"), 1].unwrap()));
    assert!(!equal(&shadowed, &map![kw("a"), 2].unwrap()));
}

#[test]
fn test_equal_duplicate_keys_symmetric() {
    let repeated = alist![kw("a"), 1, kw("a"), 1].unwrap();
    let distinct = alist![kw("a"), 1, kw("b"), 2].unwrap();
    assert!(!equal(&repeated, &distinct));
    assert!(!equal(&distinct, &repeated));
}

#[test]
fn test_merge_ignores_shadowed_entries() {
    let shadowed = alist![kw("a"), 1, kw("a"), 2].unwrap();
    let merged = merge([&Value::Null, &alist![].unwrap(), &shadowed]).unwrap();
    assert_eq!(get(&merged, &kw("a")).unwrap(), get(&shadowed, &kw("a")).unwrap());
    assert_eq!(get(&merged, &kw("a")).unwrap(), Some(&Value::Int(1)));
}

#[test]
fn test_merge_with_combines_visible_value_once() {
    let shadowed = alist![kw("a"), 1, kw("a"), 2].unwrap();
    let merged = merge_with([&alist![kw("a"), 10].unwrap(), &shadowed], add).unwrap();
    assert_eq!(get(&merged, &kw("a")).unwrap(), Some(&Value::Int(11)));
}

#[test]
fn test_reduce_kv_visits_each_key_once() {
    let shadowed = alist![kw("a"), 1, kw("b"), 3, kw("a"), 2].unwrap();
    let visited = reduce_kv(&shadowed, Vec::new(), |mut acc, key, value| {
        acc.push((key.clone(), value.clone()));
        acc
    })
    .unwrap();
    assert_eq!(
        visited,
        vec![(kw("a"), Value::Int(1)), (kw("b"), Value::Int(3))]
    );
}
