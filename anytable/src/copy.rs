//! Shallow and deep copies of values.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::frame::{expand_and_collapse, MappableFrame, PartiallyApplied};
use crate::table::{Table, TableId};
use crate::value::Value;

/// Copies of tables already made during one deep copy, keyed by the identity
/// of the original. Reusing an entry is what keeps cycles finite and shared
/// sub-tables shared.
///
/// Each entry holds the original as well as its copy, so an original's
/// address cannot be handed to a new table while the set is alive.
#[derive(Debug, Default)]
pub struct SeenSet {
    copies: HashMap<TableId, (Table, Table)>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The copy made for `original`, if any.
    pub fn get(&self, original: &Table) -> Option<&Table> {
        self.copies.get(&original.id()).map(|(_, copy)| copy)
    }

    pub fn len(&self) -> usize {
        self.copies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }
}

/// Non-table values come back unchanged. A table comes back as a new table of
/// the same class holding the same top-level pairs; nested tables are shared.
pub fn shallow_copy(object: &Value) -> Value {
    match object {
        Value::Table(t) => {
            let copy = Table::from_class(t.class());
            for (k, v) in t.pairs() {
                copy.insert(k, v);
            }
            Value::Table(copy)
        }
        other => other.clone(),
    }
}

/// Recursively copies every table reachable from `object`, keys included.
///
/// Each copy keeps its original's class. Tables reached more than once
/// (including through a cycle) are copied once, so the copy has the same
/// shape of sharing as the original. Non-table values, functions and opaque
/// handles are not cloned.
pub fn deep_copy(object: &Value) -> Value {
    deep_copy_with(object, &mut SeenSet::new())
}

/// [`deep_copy`] with a caller-supplied [`SeenSet`]. Tables already present in
/// `seen` resolve to their recorded copy.
pub fn deep_copy_with(object: &Value, seen: &mut SeenSet) -> Value {
    let before = seen.len();
    let out = expand_and_collapse::<CopyFrame<PartiallyApplied>, Value, Value>(
        object.clone(),
        |seed| match seed {
            Value::Table(original) => {
                if let Some(copy) = seen.get(&original) {
                    trace!(table = ?original.id(), "table already copied, reusing");
                    return CopyFrame::Done(Value::Table(copy.clone()));
                }
                // registered before any child is expanded, so a child that
                // points back here resolves to this copy
                let copy = Table::from_class(original.class());
                seen.copies
                    .insert(original.id(), (original.clone(), copy.clone()));
                CopyFrame::Table {
                    copy,
                    entries: original.pairs().collect(),
                }
            }
            other => CopyFrame::Done(other),
        },
        |frame| match frame {
            CopyFrame::Done(value) => value,
            CopyFrame::Table { copy, entries } => {
                for (k, v) in entries {
                    copy.insert(k, v);
                }
                Value::Table(copy)
            }
        },
    );
    debug!(tables = seen.len() - before, "deep copy complete");
    out
}

enum CopyFrame<A> {
    Done(Value),
    Table { copy: Table, entries: Vec<(A, A)> },
}

impl MappableFrame for CopyFrame<PartiallyApplied> {
    type Frame<X> = CopyFrame<X>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            CopyFrame::Done(v) => CopyFrame::Done(v),
            CopyFrame::Table { copy, entries } => CopyFrame::Table {
                copy,
                entries: entries.into_iter().map(|(k, v)| (f(k), f(v))).collect(),
            },
        }
    }
}
