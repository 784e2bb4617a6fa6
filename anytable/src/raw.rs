use tracing::debug;

use crate::error::Error;
use crate::table::{Mapping, Pairs, Table};
use crate::value::Value;

/// Read-only view over a table's own entries.
///
/// Reads never consult the class fallback chain, and every write fails with
/// [`Error::ReadOnly`]. The view borrows the table rather than snapshotting
/// it, so entries added to the table later are visible through the view.
#[derive(Clone, Copy, Debug)]
pub struct RawView<'a> {
    table: &'a Table,
}

/// Wraps `table` in a [`RawView`].
pub fn raw(table: &Table) -> RawView<'_> {
    RawView { table }
}

impl<'a> RawView<'a> {
    pub fn get(&self, key: impl Into<Value>) -> Value {
        self.table.raw_get(key)
    }

    pub fn contains_key(&self, key: impl Into<Value>) -> bool {
        self.table.contains_key(key)
    }

    pub fn set(&self, key: impl Into<Value>, _value: impl Into<Value>) -> Result<(), Error> {
        let key: Value = key.into();
        debug!(table = ?self.table.id(), %key, "write through read-only view rejected");
        Err(Error::ReadOnly)
    }

    pub fn pairs(&self) -> Pairs<'a> {
        self.table.pairs()
    }

    /// Number of own entries.
    pub fn len(&self) -> usize {
        self.pairs().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}

impl Mapping for RawView<'_> {
    fn pairs(&self) -> Pairs<'_> {
        self.table.pairs()
    }
}
