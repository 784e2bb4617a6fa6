use std::fmt;
use std::rc::Rc;

use crate::table::Table;
use crate::value::{Function, Value};

/// Custom iteration order for a class of tables, consulted by [`crate::dump`].
pub type IterHook = Rc<dyn Fn(&Table) -> Vec<(Value, Value)>>;

/// Where [`Table::get`] looks when a key is not among a table's own entries.
#[derive(Clone, Debug)]
pub enum Fallback {
    /// Continue the lookup in another table (and, in turn, its class).
    Table(Table),
    /// Call `f(table, key)` and use its result.
    Function(Function),
}

/// The behavioral "kind" of a table: a shared, identity-compared tag that
/// carries the capabilities tables of that kind dispatch through.
///
/// Copies made by [`crate::shallow_copy`] and [`crate::deep_copy`] carry the
/// very same `Class` as the original.
#[derive(Clone)]
pub struct Class(Rc<ClassData>);

struct ClassData {
    name: Rc<str>,
    fallback: Option<Fallback>,
    iterate: Option<IterHook>,
}

impl Class {
    pub fn builder(name: impl Into<Rc<str>>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            fallback: None,
            iterate: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        self.0.fallback.as_ref()
    }

    pub fn iter_hook(&self) -> Option<IterHook> {
        self.0.iterate.clone()
    }

    pub fn ptr_eq(&self, other: &Class) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.0.name)
            .field("fallback", &self.0.fallback)
            .field("custom_iteration", &self.0.iterate.is_some())
            .finish()
    }
}

pub struct ClassBuilder {
    name: Rc<str>,
    fallback: Option<Fallback>,
    iterate: Option<IterHook>,
}

impl ClassBuilder {
    pub fn fallback_table(mut self, table: Table) -> Self {
        self.fallback = Some(Fallback::Table(table));
        self
    }

    pub fn fallback_fn(mut self, f: impl Fn(&Table, &Value) -> Value + 'static) -> Self {
        let f = Function::new(move |args: &[Value]| match args {
            [Value::Table(t), key, ..] => f(t, key),
            _ => Value::Nil,
        });
        self.fallback = Some(Fallback::Function(f));
        self
    }

    /// Entries are displayed in the order `hook` returns them.
    pub fn iterate(mut self, hook: impl Fn(&Table) -> Vec<(Value, Value)> + 'static) -> Self {
        self.iterate = Some(Rc::new(hook));
        self
    }

    pub fn build(self) -> Class {
        Class(Rc::new(ClassData {
            name: self.name,
            fallback: self.fallback,
            iterate: self.iterate,
        }))
    }
}
