//! Copy-on-write mutator tests
//!
//! assoc, assoc_one, dissoc and dissoc_all never touch their input and
//! always return the input's representation.

use assoc::{
    Value, Variant, alist, assoc, assoc_one, count, dissoc, dissoc_all, equal, get, has_key, keys,
    kw, map,
};

use super::helpers::*;

#[test]
fn test_assoc_overwrites_and_prepends() {
    let coll = foo_bar();
    let updated = assoc(&coll, [kw("foo"), 7.into(), kw("baz"), 20.into()]).unwrap();

    let expected = alist![kw("baz"), 20, kw("foo"), 7, kw("bar"), 6].unwrap();
    assert!(equal(&updated, &expected));
    assert_eq!(updated, expected);
    assert_eq!(keys(&updated).unwrap()[0], kw("baz"));
}

#[test]
fn test_assoc_leaves_input_untouched() {
    let coll = foo_bar();
    let before = coll.clone();

    let _ = assoc(&coll, [kw("foo"), 7.into(), kw("baz"), 20.into()]).unwrap();
    let _ = dissoc(&coll, &kw("foo")).unwrap();

    assert_eq!(coll, before);
    assert_eq!(get(&coll, &kw("foo")).unwrap(), Some(&Value::Int(5)));
}

#[test]
fn test_assoc_keeps_representation() {
    for coll in all_variants() {
        let updated = assoc_one(&coll, Value::Int(1), kw("x")).unwrap();
        assert_eq!(updated.variant(), coll.variant());
    }
}

#[test]
fn test_index_growth_pads_with_null() {
    let seq = index_seq(3);
    let grown = assoc_one(&seq, Value::Int(5), kw("x")).unwrap();

    assert_eq!(count(&grown).unwrap(), 6);
    assert_eq!(get(&grown, &Value::Int(3)).unwrap(), Some(&Value::Null));
    assert_eq!(get(&grown, &Value::Int(4)).unwrap(), Some(&Value::Null));
    assert_eq!(get(&grown, &Value::Int(5)).unwrap(), Some(&kw("x")));
    assert_eq!(count(&seq).unwrap(), 3);
}

#[test]
fn test_index_append_at_length() {
    let seq = index_seq(2);
    let grown = assoc_one(&seq, Value::Int(2), Value::Int(2)).unwrap();
    assert_eq!(grown, index_seq(3));
}

#[test]
fn test_index_overwrite_in_bounds() {
    let seq = index_seq(3);
    let updated = assoc_one(&seq, Value::Int(1), kw("one")).unwrap();
    assert_eq!(
        updated,
        Value::Vector(vec![Value::Int(0), kw("one"), Value::Int(2)])
    );
}

#[test]
fn test_index_rejects_bad_keys() {
    let seq = index_seq(3);
    for key in [Value::Int(-1), kw("a"), Value::from("1")] {
        let err = assoc_one(&seq, key.clone(), Value::Null).unwrap_err();
        assert!(err.is_invalid_key(), "key {key} should be rejected");
    }
}

#[test]
fn test_index_growth_too_large_is_rejected() {
    let seq = index_seq(3);
    let err = assoc_one(&seq, Value::Int(i64::MAX), kw("x")).unwrap_err();
    assert!(err.is_invalid_key());
    assert_eq!(count(&seq).unwrap(), 3);
}

#[test]
fn test_map_assoc_copies() {
    let keyed = foo_bar_map();
    let updated = assoc(&keyed, [kw("baz"), 20.into()]).unwrap();

    assert_eq!(updated.variant(), Some(Variant::KeyedMap));
    assert_eq!(count(&updated).unwrap(), 3);
    assert!(!has_key(&keyed, &kw("baz")).unwrap());
}

#[test]
fn test_assoc_odd_arguments() {
    let coll = foo_bar();
    let err = assoc(&coll, [kw("foo"), 7.into(), kw("baz")]).unwrap_err();
    assert!(err.is_arity_error());
    assert_eq!(err.as_assoc().and_then(|e| e.operation()), Some("assoc"));
}

#[test]
fn test_later_pairs_win_within_one_call() {
    let coll = foo_bar_map();
    let updated = assoc(&coll, [kw("foo"), 1.into(), kw("foo"), 2.into()]).unwrap();
    assert_eq!(get(&updated, &kw("foo")).unwrap(), Some(&Value::Int(2)));
}

#[test]
fn test_assoc_on_null_builds_alist() {
    let created = assoc(&Value::Null, [kw("a"), 1.into()]).unwrap();
    assert_eq!(created, alist![kw("a"), 1].unwrap());
}

#[test]
fn test_assoc_rewrites_every_duplicate() {
    let coll = alist![kw("a"), 1, kw("b"), 2, kw("a"), 3].unwrap();
    let updated = assoc_one(&coll, kw("a"), Value::Int(9)).unwrap();
    assert_eq!(
        updated,
        alist![kw("a"), 9, kw("b"), 2, kw("a"), 9].unwrap()
    );
}

#[test]
fn test_dissoc_drops_all_duplicates() {
    let coll = alist![kw("a"), 1, kw("b"), 2, kw("a"), 3].unwrap();
    let removed = dissoc(&coll, &kw("a")).unwrap();
    assert_eq!(removed, alist![kw("b"), 2].unwrap());
}

#[test]
fn test_dissoc_map() {
    let removed = dissoc(&foo_bar_map(), &kw("foo")).unwrap();
    assert_eq!(removed, map![kw("bar"), 6].unwrap());
}

#[test]
fn test_dissoc_absent_key_is_unchanged() {
    let coll = foo_bar();
    assert_eq!(dissoc(&coll, &kw("missing")).unwrap(), coll);
    assert_eq!(dissoc(&Value::Null, &kw("missing")).unwrap(), Value::Null);
}

#[test]
fn test_dissoc_index_sequence_unsupported() {
    let err = dissoc(&index_seq(3), &Value::Int(0)).unwrap_err();
    assert!(err.is_unsupported_variant());
    assert_eq!(err.to_string(), "dissoc is not supported for index-sequence");
}

#[test]
fn test_dissoc_all() {
    let coll = alist![kw("a"), 1, kw("b"), 2, kw("c"), 3].unwrap();
    let trimmed = dissoc_all(&coll, &[kw("a"), kw("c"), kw("missing")]).unwrap();
    assert_eq!(trimmed, alist![kw("b"), 2].unwrap());
}
