//! Predicate tests, counting, filtering, folding, transforming and merging.
//!
//! Callbacks are not validated: whatever a predicate, transform or fold
//! function does (including panicking) propagates straight to the caller.
//! Traversal order is the mapping's natural order.

use crate::table::{Mapping, Table};
use crate::value::Value;

/// True iff every entry satisfies `predicate`. Stops at the first failure;
/// true for an empty mapping.
pub fn all<M: Mapping + ?Sized>(
    mapping: &M,
    mut predicate: impl FnMut(&Value, &Value) -> bool,
) -> bool {
    mapping.pairs().all(|(k, v)| predicate(&k, &v))
}

/// True iff at least one entry satisfies `predicate`. Stops at the first
/// success; false for an empty mapping.
pub fn any<M: Mapping + ?Sized>(
    mapping: &M,
    mut predicate: impl FnMut(&Value, &Value) -> bool,
) -> bool {
    mapping.pairs().any(|(k, v)| predicate(&k, &v))
}

/// True iff some entry's value equals `value`.
pub fn contains<M: Mapping + ?Sized>(mapping: &M, value: &Value) -> bool {
    any(mapping, |_, v| v == value)
}

/// Probes for a first entry; does not count.
pub fn is_empty<M: Mapping + ?Sized>(mapping: &M) -> bool {
    mapping.pairs().next().is_none()
}

/// Number of entries, by full traversal.
pub fn length<M: Mapping + ?Sized>(mapping: &M) -> usize {
    mapping.pairs().count()
}

/// New table holding exactly the entries for which `predicate` holds.
pub fn filter<M: Mapping + ?Sized>(
    mapping: &M,
    mut predicate: impl FnMut(&Value, &Value) -> bool,
) -> Table {
    let out = Table::new();
    for (k, v) in mapping.pairs() {
        if predicate(&k, &v) {
            out.insert(k, v);
        }
    }
    out
}

/// Threads `init` through `f(acc, key, value)` for every entry.
pub fn fold<M: Mapping + ?Sized, A>(
    mapping: &M,
    init: A,
    mut f: impl FnMut(A, &Value, &Value) -> A,
) -> A {
    fold_with(mapping, init, &(), |acc, k, v, _| f(acc, k, v))
}

/// [`fold`] with a read-only `extra` argument handed unchanged to every call.
/// Several accumulators belong bundled together in `A`, not in `extra`.
pub fn fold_with<M: Mapping + ?Sized, A, X: ?Sized>(
    mapping: &M,
    init: A,
    extra: &X,
    mut f: impl FnMut(A, &Value, &Value, &X) -> A,
) -> A {
    mapping
        .pairs()
        .fold(init, |acc, (k, v)| f(acc, &k, &v, extra))
}

/// New table with the same keys and each value replaced by `f(key, value)`.
///
/// A key whose new value is nil is left out, since a table cannot hold nil.
pub fn transform<M: Mapping + ?Sized>(
    mapping: &M,
    mut f: impl FnMut(&Value, &Value) -> Value,
) -> Table {
    let out = Table::new();
    for (k, v) in mapping.pairs() {
        let new_value = f(&k, &v);
        out.insert(k, new_value);
    }
    out
}

/// Copies every pair of every source into `target`, in argument order, so
/// later sources win on collision. Without a target a fresh table is created.
///
/// Returns the target handle; this is the only operation that mutates its
/// argument.
pub fn extend(target: Option<&Table>, sources: &[&dyn Mapping]) -> Table {
    let target = target.cloned().unwrap_or_default();
    for source in sources {
        for (k, v) in source.pairs() {
            target.insert(k, v);
        }
    }
    target
}
