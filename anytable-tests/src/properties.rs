use crate::init_tracing;
use crate::shape::{arb_entries, build_table, naive_dump, Shape};
use anytable::{
    all, any, contains, deep_copy, dump, extend, filter, fold, is_empty, length, raw,
    shallow_copy, table, transform, Class, Error, Table, Value,
};
use proptest::prelude::*;

fn positive(v: &Value) -> bool {
    v.as_integer().is_some_and(|i| i > 0)
}

#[test]
fn empty_table_laws() {
    let empty = Table::new();
    assert!(all(&empty, |_, _| false));
    assert!(!any(&empty, |_, _| true));
    assert!(!contains(&empty, &Value::Nil));
    assert!(is_empty(&empty));
    assert!(!is_empty(&table! { "a" => 1 }));
}

#[test]
fn self_referential_deep_copy() {
    init_tracing();
    let m = Table::new();
    m.set("self", m.clone()).unwrap();
    m.set("n", 1).unwrap();

    let copy = deep_copy(&Value::from(&m));
    let copy = copy.as_table().unwrap();
    assert!(copy.raw_get("self").as_table().unwrap().ptr_eq(copy));
    assert!(!copy.ptr_eq(&m));
    assert_eq!(dump(&Value::from(copy), 3), dump(&Value::from(&m), 3));

    m.clear();
    copy.clear();
}

#[test]
fn extend_examples() {
    let target = table! { "a" => 1 };
    let out = extend(Some(&target), &[&table! { "b" => 2 }, &table! { "a" => 3 }]);
    assert!(out.ptr_eq(&target));
    assert_eq!(dump(&Value::from(out), 1), r#"{ ["a"] = 3, ["b"] = 2 }"#);

    let src = table! { "x" => 1 };
    let fresh = extend(None, &[&src]);
    assert!(!fresh.ptr_eq(&src));
    assert_eq!(dump(&Value::from(fresh), 1), r#"{ ["x"] = 1 }"#);
}

#[test]
fn raw_view_laws() {
    init_tracing();
    let base = table! { "inherited" => "yes" };
    let m = Table::with_class(Class::builder("Child").fallback_table(base).build());
    let view = raw(&m);

    assert_eq!(m.get("inherited").unwrap(), Value::from("yes"));
    assert!(view.get("inherited").is_nil());
    assert_eq!(view.set("x", 1), Err(Error::ReadOnly));

    m.set("late", 5).unwrap();
    assert_eq!(view.get("late"), Value::from(5));
}

#[test]
fn dump_depth_examples() {
    let m = Value::from(table! { "a" => table! { "b" => 1 } });
    assert_eq!(dump(&m, 1), r#"{ ["a"] = ... }"#);
    assert_eq!(dump(&m, 2), r#"{ ["a"] = { ["b"] = 1 } }"#);
}

// generate a bunch of nested tables and check the operations against each other
// and against the plain `Shape` model they were built from
proptest! {
    #[test]
    fn all_is_not_any_not(entries in arb_entries(), threshold in -50i64..50) {
        let m = build_table(&entries);
        let p = |v: &Value| v.as_integer().is_some_and(|i| i > threshold);
        prop_assert_eq!(all(&m, |_, v| p(v)), !any(&m, |_, v| !p(v)));
    }

    #[test]
    fn contains_matches_model(entries in arb_entries(), probe in -100i64..100) {
        let m = build_table(&entries);
        let expected = entries.iter().any(|(_, v)| v.as_int() == Some(probe));
        prop_assert_eq!(contains(&m, &Value::from(probe)), expected);
    }

    #[test]
    fn dump_matches_model(entries in arb_entries(), depth in 0usize..6) {
        let shape = Shape::Table(entries);
        prop_assert_eq!(dump(&shape.to_value(), depth), naive_dump(&shape, depth));
    }

    #[test]
    fn shallow_copy_shares_children(entries in arb_entries()) {
        let m = Value::from(build_table(&entries));
        let copy = shallow_copy(&m);
        let (m, copy) = (m.as_table().unwrap(), copy.as_table().unwrap());

        prop_assert!(!copy.ptr_eq(m));
        prop_assert_eq!(length(m), length(copy));
        for (k, v) in m.pairs() {
            // tables compare by identity, so this checks sharing at depth 1
            prop_assert_eq!(copy.raw_get(&k), v);
        }
    }

    #[test]
    fn deep_copy_is_equal_but_detached(entries in arb_entries(), depth in 0usize..6) {
        let m = Value::from(build_table(&entries));
        let before = dump(&m, 6);

        let copy = deep_copy(&m);
        prop_assert_eq!(dump(&copy, depth), dump(&m, depth));

        for (k, v) in copy.as_table().unwrap().pairs() {
            if let Value::Table(child) = v {
                prop_assert_ne!(&m.as_table().unwrap().raw_get(&k), &Value::from(&child));
                child.set("mutated", true).unwrap();
            }
        }
        prop_assert_eq!(dump(&m, 6), before);
    }

    #[test]
    fn fold_sums_regardless_of_order(entries in arb_entries()) {
        let m = build_table(&entries);
        let expected: i64 = entries.iter().filter_map(|(_, v)| v.as_int()).sum();
        let sum = fold(&m, 0i64, |acc, _, v| acc + v.as_integer().unwrap_or(0));
        prop_assert_eq!(sum, expected);
    }

    #[test]
    fn filter_keeps_exactly_matches(entries in arb_entries()) {
        let m = build_table(&entries);
        let out = filter(&m, |_, v| positive(v));
        prop_assert_eq!(length(&out), entries.iter().filter(|(_, v)| v.as_int().is_some_and(|i| i > 0)).count());
        prop_assert!(all(&out, |k, v| m.raw_get(k) == *v && positive(v)));
        prop_assert_eq!(length(&m), entries.len());
    }

    #[test]
    fn transform_keeps_keys(entries in arb_entries()) {
        let m = build_table(&entries);
        let out = transform(&m, |_, v| Value::from(v.as_integer().map_or(0, |i| i * 10)));
        prop_assert_eq!(length(&out), length(&m));
        for (k, v) in m.pairs() {
            prop_assert_eq!(out.raw_get(&k).as_integer(), Some(v.as_integer().map_or(0, |i| i * 10)));
        }
    }

    #[test]
    fn extend_later_sources_win(a in arb_entries(), b in arb_entries()) {
        let (ta, tb) = (build_table(&a), build_table(&b));
        let out = extend(None, &[&ta, &tb]);
        for (k, v) in ta.pairs() {
            if !tb.contains_key(&k) {
                prop_assert_eq!(out.raw_get(&k), v);
            }
        }
        for (k, v) in tb.pairs() {
            prop_assert_eq!(out.raw_get(&k), v);
        }
        prop_assert!(all(&out, |k, _| ta.contains_key(k) || tb.contains_key(k)));
    }
}
