use anytable::{Table, Value};
use proptest::prelude::*;

/// Plain, owned description of a nested table, used to generate tables and
/// as a reference model for what operations over them should produce.
#[derive(Debug, Clone)]
pub enum Shape {
    Bool(bool),
    Int(i64),
    Str(String),
    Table(Vec<(ShapeKey, Shape)>),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKey {
    Int(i64),
    Str(String),
}

impl From<&ShapeKey> for Value {
    fn from(key: &ShapeKey) -> Self {
        match key {
            ShapeKey::Int(i) => Value::from(*i),
            ShapeKey::Str(s) => Value::from(s.as_str()),
        }
    }
}

impl Shape {
    pub fn to_value(&self) -> Value {
        match self {
            Shape::Bool(b) => Value::from(*b),
            Shape::Int(i) => Value::from(*i),
            Shape::Str(s) => Value::from(s.as_str()),
            Shape::Table(entries) => Value::from(build_table(entries)),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Shape::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// Builds a table; keys are assumed unique, as generated by [`arb_entries`].
pub fn build_table(entries: &[(ShapeKey, Shape)]) -> Table {
    let t = Table::new();
    for (k, v) in entries {
        t.set(k, v.to_value())
            .expect("generated keys are never nil or NaN");
    }
    t
}

/// Straightforward recursive rendering with the same format as `anytable::dump`.
pub fn naive_dump(shape: &Shape, depth: usize) -> String {
    match shape {
        Shape::Bool(b) => b.to_string(),
        Shape::Int(i) => i.to_string(),
        Shape::Str(s) => format!("\"{s}\""),
        Shape::Table(_) if depth == 0 => "...".to_string(),
        Shape::Table(entries) if entries.is_empty() => "{ }".to_string(),
        Shape::Table(entries) => {
            let body: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("[{}] = {}", naive_dump_key(k), naive_dump(v, depth - 1)))
                .collect();
            format!("{{ {} }}", body.join(", "))
        }
    }
}

fn naive_dump_key(key: &ShapeKey) -> String {
    match key {
        ShapeKey::Int(i) => i.to_string(),
        ShapeKey::Str(s) => format!("\"{s}\""),
    }
}

pub fn arb_key() -> impl Strategy<Value = ShapeKey> {
    prop_oneof![
        (-20i64..20).prop_map(ShapeKey::Int),
        "[a-e]{1,2}".prop_map(ShapeKey::Str),
    ]
}

pub fn arb_shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Shape::Bool),
        (-100i64..100).prop_map(Shape::Int),
        "[a-z ]{0,6}".prop_map(Shape::Str),
    ];
    leaf.prop_recursive(
        4,  // 4 levels deep
        64, // Shoot for maximum size of 64 nodes
        6,  // We put up to 6 items per table
        |inner| {
            prop::collection::btree_map(arb_key(), inner, 0..6)
                .prop_map(|m| Shape::Table(m.into_iter().collect()))
        },
    )
}

/// Entries of a top-level table, with unique keys.
pub fn arb_entries() -> impl Strategy<Value = Vec<(ShapeKey, Shape)>> {
    prop::collection::btree_map(arb_key(), arb_shape(), 0..8).prop_map(|m| m.into_iter().collect())
}
