use crate::copy::{self, SeenSet};
use crate::dump::{self, DEFAULT_DUMP_DEPTH};
use crate::ops;
use crate::raw::{self, RawView};
use crate::table::{Mapping, Table};
use crate::value::Value;

/// The library as a value: build one at startup and hand it by reference to
/// whatever needs the table utilities.
///
/// Every method forwards to the free function of the same name; the only
/// state is configuration such as the default [`TableLib::dump`] depth.
#[derive(Debug, Clone)]
pub struct TableLib {
    dump_depth: usize,
}

impl Default for TableLib {
    fn default() -> Self {
        Self {
            dump_depth: DEFAULT_DUMP_DEPTH,
        }
    }
}

impl TableLib {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TableLibBuilder {
        TableLibBuilder {
            lib: Self::default(),
        }
    }

    pub fn dump_depth(&self) -> usize {
        self.dump_depth
    }

    pub fn all<M: Mapping + ?Sized>(
        &self,
        mapping: &M,
        predicate: impl FnMut(&Value, &Value) -> bool,
    ) -> bool {
        ops::all(mapping, predicate)
    }

    pub fn any<M: Mapping + ?Sized>(
        &self,
        mapping: &M,
        predicate: impl FnMut(&Value, &Value) -> bool,
    ) -> bool {
        ops::any(mapping, predicate)
    }

    pub fn contains<M: Mapping + ?Sized>(&self, mapping: &M, value: &Value) -> bool {
        ops::contains(mapping, value)
    }

    pub fn deep_copy(&self, object: &Value) -> Value {
        copy::deep_copy(object)
    }

    pub fn deep_copy_with(&self, object: &Value, seen: &mut SeenSet) -> Value {
        copy::deep_copy_with(object, seen)
    }

    /// Dumps with the configured default depth.
    pub fn dump(&self, object: &Value) -> String {
        dump::dump(object, self.dump_depth)
    }

    pub fn dump_to_depth(&self, object: &Value, max_depth: usize) -> String {
        dump::dump(object, max_depth)
    }

    pub fn extend(&self, target: Option<&Table>, sources: &[&dyn Mapping]) -> Table {
        ops::extend(target, sources)
    }

    pub fn filter<M: Mapping + ?Sized>(
        &self,
        mapping: &M,
        predicate: impl FnMut(&Value, &Value) -> bool,
    ) -> Table {
        ops::filter(mapping, predicate)
    }

    pub fn fold<M: Mapping + ?Sized, A>(
        &self,
        mapping: &M,
        init: A,
        f: impl FnMut(A, &Value, &Value) -> A,
    ) -> A {
        ops::fold(mapping, init, f)
    }

    pub fn fold_with<M: Mapping + ?Sized, A, X: ?Sized>(
        &self,
        mapping: &M,
        init: A,
        extra: &X,
        f: impl FnMut(A, &Value, &Value, &X) -> A,
    ) -> A {
        ops::fold_with(mapping, init, extra, f)
    }

    pub fn is_empty<M: Mapping + ?Sized>(&self, mapping: &M) -> bool {
        ops::is_empty(mapping)
    }

    pub fn length<M: Mapping + ?Sized>(&self, mapping: &M) -> usize {
        ops::length(mapping)
    }

    pub fn shallow_copy(&self, object: &Value) -> Value {
        copy::shallow_copy(object)
    }

    pub fn raw<'a>(&self, table: &'a Table) -> RawView<'a> {
        raw::raw(table)
    }

    pub fn transform<M: Mapping + ?Sized>(
        &self,
        mapping: &M,
        f: impl FnMut(&Value, &Value) -> Value,
    ) -> Table {
        ops::transform(mapping, f)
    }
}

pub struct TableLibBuilder {
    lib: TableLib,
}

impl TableLibBuilder {
    /// Depth [`TableLib::dump`] expands tables to.
    pub fn dump_depth(mut self, depth: usize) -> Self {
        self.lib.dump_depth = depth;
        self
    }

    pub fn build(self) -> TableLib {
        self.lib
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    fn describe(lib: &TableLib, t: &Table) -> String {
        format!("{} entries: {}", lib.length(t), lib.dump(&Value::from(t)))
    }

    #[test]
    fn default_depth_is_one() {
        let lib = TableLib::new();
        assert_eq!(lib.dump_depth(), DEFAULT_DUMP_DEPTH);
        let t = table! { "a" => table! { "b" => 1 } };
        assert_eq!(describe(&lib, &t), "1 entries: { [\"a\"] = ... }");
    }

    #[test]
    fn configured_depth_is_used() {
        let lib = TableLib::builder().dump_depth(2).build();
        let t = table! { "a" => table! { "b" => 1 } };
        assert_eq!(describe(&lib, &t), "1 entries: { [\"a\"] = { [\"b\"] = 1 } }");
        assert_eq!(lib.dump_to_depth(&Value::from(&t), 0), "...");
    }

    #[test]
    fn methods_forward() {
        let lib = TableLib::new();
        let t = table! { "a" => 1, "b" => 2 };
        assert!(lib.all(&t, |_, v| v.as_integer().is_some()));
        assert!(lib.contains(&t, &Value::from(2)));
        assert_eq!(lib.fold(&t, 0, |acc, _, v| acc + v.as_integer().unwrap()), 3);
        assert_eq!(lib.length(&lib.filter(&t, |_, v| v == &Value::from(1))), 1);
        assert!(lib.raw(&t).set("c", 3).is_err());
        let merged = lib.extend(None, &[&t, &lib.transform(&t, |_, _| Value::from(0))]);
        assert_eq!(merged.raw_get("a"), Value::from(0));
    }
}
