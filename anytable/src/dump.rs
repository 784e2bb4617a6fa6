//! Human readable rendering of values.

use crate::frame::{expand_and_collapse, MappableFrame, PartiallyApplied};
use crate::value::Value;

/// Depth used when none is given.
pub const DEFAULT_DUMP_DEPTH: usize = 1;

/// Renders `object` as text, expanding tables up to `max_depth` levels.
///
/// Tables render as `{ [key] = value, ... }`, strings as quoted literals, and
/// everything else with its default string conversion. Values one level down
/// get `max_depth - 1`; a table reached at depth 0 renders as `...`. Keys are
/// always rendered at depth 0, so a table used as a key shows as `...`.
///
/// There is no cycle detection: a cyclic table repeats itself until the depth
/// runs out. Entries appear in the order given by the table's class iteration
/// hook, if it has one.
pub fn dump(object: &Value, max_depth: usize) -> String {
    expand_and_collapse::<DumpFrame<PartiallyApplied>, (Value, usize), String>(
        (object.clone(), max_depth),
        |(value, depth)| match value {
            Value::Table(_) if depth == 0 => DumpFrame::Leaf("...".to_string()),
            Value::Table(t) => DumpFrame::Table(
                t.display_entries()
                    .into_iter()
                    .map(|(k, v)| ((k, 0), (v, depth - 1)))
                    .collect(),
            ),
            Value::String(s) => DumpFrame::Leaf(quote(&s)),
            other => DumpFrame::Leaf(other.to_string()),
        },
        |frame| match frame {
            DumpFrame::Leaf(s) => s,
            DumpFrame::Table(entries) if entries.is_empty() => "{ }".to_string(),
            DumpFrame::Table(entries) => {
                let body: Vec<String> = entries
                    .into_iter()
                    .map(|(k, v)| format!("[{k}] = {v}"))
                    .collect();
                format!("{{ {} }}", body.join(", "))
            }
        },
    )
}

enum DumpFrame<A> {
    Leaf(String),
    Table(Vec<(A, A)>),
}

impl MappableFrame for DumpFrame<PartiallyApplied> {
    type Frame<X> = DumpFrame<X>;

    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        match input {
            DumpFrame::Leaf(s) => DumpFrame::Leaf(s),
            DumpFrame::Table(entries) => {
                DumpFrame::Table(entries.into_iter().map(|(k, v)| (f(k), f(v))).collect())
            }
        }
    }
}

/// Quoted, escaped string literal. A newline becomes the two characters `\n`,
/// never a line break.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push_str("\\0"),
            c if c.is_ascii_control() => {
                // zero-padded so a following digit is not read as part of the escape
                out.push_str(&format!("\\{:03}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Class;
    use crate::table;
    use crate::table::Table;

    #[test]
    fn scalars() {
        assert_eq!(dump(&Value::Nil, 1), "nil");
        assert_eq!(dump(&Value::from(false), 1), "false");
        assert_eq!(dump(&Value::from(12), 1), "12");
        assert_eq!(dump(&Value::from(2.5), 1), "2.5");
    }

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(dump(&Value::from("hi"), 1), "\"hi\"");
        assert_eq!(dump(&Value::from("a\"b\\c"), 1), "\"a\\\"b\\\\c\"");
        let multi = dump(&Value::from("line1\nline2"), 1);
        assert_eq!(multi, "\"line1\\nline2\"");
        assert!(!multi.contains('\n'));
        assert_eq!(dump(&Value::from("\u{1}7"), 1), "\"\\0017\"");
        assert_eq!(dump(&Value::from("\0x"), 1), "\"\\0x\"");
        assert_eq!(dump(&Value::from("\u{7}"), 1), "\"\\007\"");
        assert_eq!(dump(&Value::from("a\tb"), 1), "\"a\\009b\"");
    }

    #[test]
    fn tables_render_keys_and_values() {
        let t = table! { "a" => 1, 2 => "b" };
        assert_eq!(dump(&Value::from(t), 1), "{ [\"a\"] = 1, [2] = \"b\" }");
        assert_eq!(dump(&Value::from(Table::new()), 1), "{ }");
    }

    #[test]
    fn depth_limits_expansion() {
        let t = Value::from(table! { "a" => table! { "b" => 1 } });
        assert_eq!(dump(&t, 1), "{ [\"a\"] = ... }");
        assert_eq!(dump(&t, 2), "{ [\"a\"] = { [\"b\"] = 1 } }");
        assert_eq!(dump(&t, 0), "...");
    }

    #[test]
    fn table_keys_are_never_expanded() {
        let key = table! { "k" => 1 };
        let t = Value::from(table! { key => "v" });
        assert_eq!(dump(&t, 5), "{ [...] = \"v\" }");
    }

    #[test]
    fn cycles_are_bounded_by_depth() {
        let m = Table::new();
        m.set("self", m.clone()).unwrap();
        assert_eq!(
            dump(&Value::from(&m), 3),
            "{ [\"self\"] = { [\"self\"] = { [\"self\"] = ... } } }"
        );
        m.clear();
    }

    #[test]
    fn class_iteration_hook_controls_order() {
        let reversed = Class::builder("Reversed")
            .iterate(|t| {
                let mut entries: Vec<_> = t.pairs().collect();
                entries.reverse();
                entries
            })
            .build();
        let t = Table::with_class(reversed);
        t.set(1, "x").unwrap();
        t.set(2, "y").unwrap();
        assert_eq!(dump(&Value::from(t), 1), "{ [2] = \"y\", [1] = \"x\" }");
    }
}
