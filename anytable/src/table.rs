use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::trace;

use crate::class::{Class, Fallback};
use crate::error::Error;
use crate::value::{float_to_int, Value};

/// Hops [`Table::get`] follows through class fallbacks before giving up.
pub const MAX_FALLBACK_HOPS: usize = 100;

/// A shared, mutable, any-keyed mapping.
///
/// `Table` is a handle: cloning it yields another reference to the same
/// container, and two handles are equal iff they point at the same container.
/// Entries iterate in insertion order. Cycles between tables are not
/// collected; [`Table::clear`] breaks them.
#[derive(Clone, Default)]
pub struct Table(Rc<RefCell<TableData>>);

#[derive(Default)]
struct TableData {
    entries: IndexMap<Value, Value>,
    class: Option<Class>,
}

/// Identity of a table, stable while the table is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(usize);

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(class: Class) -> Self {
        Self::from_class(Some(class))
    }

    pub(crate) fn from_class(class: Option<Class>) -> Self {
        Table(Rc::new(RefCell::new(TableData {
            entries: IndexMap::new(),
            class,
        })))
    }

    pub fn id(&self) -> TableId {
        TableId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn ptr_eq(&self, other: &Table) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn class(&self) -> Option<Class> {
        self.0.borrow().class.clone()
    }

    pub fn set_class(&self, class: Option<Class>) {
        self.0.borrow_mut().class = class;
    }

    /// Stores `value` under `key`; a nil value removes the entry.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) -> Result<(), Error> {
        let key = normalize_key(key.into())?;
        self.insert(key, value.into());
        Ok(())
    }

    /// Insert a key already known to be a valid index (taken from another table).
    pub(crate) fn insert(&self, key: Value, value: Value) {
        let mut data = self.0.borrow_mut();
        if value.is_nil() {
            data.entries.shift_remove(&key);
        } else {
            data.entries.insert(key, value);
        }
    }

    /// Looks `key` up among this table's own entries only.
    pub fn raw_get(&self, key: impl Into<Value>) -> Value {
        let key = key.into();
        self.0
            .borrow()
            .entries
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Looks `key` up among own entries, then through the class fallback chain.
    pub fn get(&self, key: impl Into<Value>) -> Result<Value, Error> {
        let key = key.into();
        let mut current = self.clone();
        for hop in 0..MAX_FALLBACK_HOPS {
            let found = current.raw_get(&key);
            if !found.is_nil() {
                return Ok(found);
            }
            let Some(class) = current.class() else {
                return Ok(Value::Nil);
            };
            match class.fallback() {
                None => return Ok(Value::Nil),
                Some(Fallback::Table(next)) => {
                    trace!(hop, class = class.name(), "following fallback table");
                    current = next.clone();
                }
                Some(Fallback::Function(f)) => {
                    trace!(hop, class = class.name(), "calling fallback function");
                    return Ok(f.call(&[Value::Table(current), key]));
                }
            }
        }
        Err(Error::FallbackLoop {
            hops: MAX_FALLBACK_HOPS,
        })
    }

    pub fn contains_key(&self, key: impl Into<Value>) -> bool {
        self.0.borrow().entries.contains_key(&key.into())
    }

    /// Live iterator over own entries. No borrow is held between steps, so the
    /// table may be read or written while iterating.
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs {
            table: self,
            pos: 0,
        }
    }

    /// Removes every entry, keeping the class.
    pub fn clear(&self) {
        self.0.borrow_mut().entries.clear();
    }

    fn entry_at(&self, pos: usize) -> Option<(Value, Value)> {
        self.0
            .borrow()
            .entries
            .get_index(pos)
            .map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Entries in display order: the class iteration hook if it has one,
    /// natural order otherwise.
    pub(crate) fn display_entries(&self) -> Vec<(Value, Value)> {
        match self.class().and_then(|c| c.iter_hook()) {
            Some(hook) => (*hook)(self),
            None => self.pairs().collect(),
        }
    }
}

fn normalize_key(key: Value) -> Result<Value, Error> {
    match key {
        Value::Nil => Err(Error::NilKey),
        Value::Float(f) if f.is_nan() => Err(Error::NanKey),
        Value::Float(f) => Ok(float_to_int(f).map_or(Value::Float(f), Value::Integer)),
        key => Ok(key),
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Table {}

impl Hash for Table {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state)
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table: {:#x}", self.id().0)
    }
}

/// See [`Table::pairs`].
pub struct Pairs<'a> {
    table: &'a Table,
    pos: usize,
}

impl Iterator for Pairs<'_> {
    type Item = (Value, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.table.entry_at(self.pos)?;
        self.pos += 1;
        Some(entry)
    }
}

/// Something whose own direct entries can be enumerated.
///
/// Fallback lookups never contribute entries.
pub trait Mapping {
    fn pairs(&self) -> Pairs<'_>;
}

impl Mapping for Table {
    fn pairs(&self) -> Pairs<'_> {
        Table::pairs(self)
    }
}

/// Builds a table from `key => value` pairs.
///
/// Panics if a key is nil or NaN.
#[macro_export]
macro_rules! table {
    () => { $crate::Table::new() };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let t = $crate::Table::new();
        $(
            t.set($k, $v).expect("table! keys must not be nil or NaN");
        )+
        t
    }};
}
