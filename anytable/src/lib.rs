//! Higher-order utilities over dynamically typed, any-keyed tables.
//!
//! [`Value`] is the dynamic value type and [`Table`] the shared mapping it can
//! nest. On top of those the crate provides predicate tests ([`all`], [`any`],
//! [`contains`]), counting ([`is_empty`], [`length`]), [`filter`], [`fold`],
//! [`transform`], merging ([`extend`]), copies ([`shallow_copy`],
//! [`deep_copy`]), read-only views ([`raw`]) and structural dumps ([`dump`]).
//!
//! ```rust
//! use anytable::{dump, filter, table, Value};
//!
//! let t = table! { "a" => 1, "b" => 2, "c" => 3 };
//! let big = filter(&t, |_, v| v.as_integer() > Some(1));
//! assert_eq!(dump(&Value::from(big), 1), r#"{ ["b"] = 2, ["c"] = 3 }"#);
//! ```
mod class;
mod copy;
mod dump;
mod error;
pub mod frame;
mod namespace;
mod ops;
mod raw;
mod table;
mod value;

pub use class::{Class, ClassBuilder, Fallback, IterHook};
pub use copy::{deep_copy, deep_copy_with, shallow_copy, SeenSet};
pub use dump::{dump, DEFAULT_DUMP_DEPTH};
pub use error::Error;
pub use namespace::{TableLib, TableLibBuilder};
pub use ops::{all, any, contains, extend, filter, fold, fold_with, is_empty, length, transform};
pub use raw::{raw, RawView};
pub use table::{Mapping, Pairs, Table, TableId, MAX_FALLBACK_HOPS};
pub use value::{Function, Opaque, Value};
