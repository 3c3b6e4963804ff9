//! Serializes a markup [`Value`] back to text.
//!
//! Leaf text is written as is; the dialect has no escapes, so strings holding
//! `<` or `>` and two adjacent leaves under one tag do not survive a re-parse.

use std::fmt::Write;

use super::value::{Tag, Value};

const INDENT: &str = "  ";

/// Writes `value` with no whitespace between tags.
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    write_compact(&mut out, value);
    out
}

/// Writes `value` with one child per line, indented by two spaces per level.
/// A tag whose only child is a leaf stays on one line.
pub fn to_string_pretty(value: &Value) -> String {
    let mut out = String::new();
    write_pretty(&mut out, value, 0);
    out
}

fn write_leaf(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Boolean(value) => out.push_str(if *value { "true" } else { "false" }),
        Value::Number(value) => {
            let _ = write!(out, "{}", value);
        }
        Value::String(value) => out.push_str(value),
        Value::Tagged(tag) => write_compact_tag(out, tag),
    }
}

fn write_compact(out: &mut String, value: &Value) {
    match value {
        Value::Tagged(tag) => write_compact_tag(out, tag),
        leaf => write_leaf(out, leaf),
    }
}

fn write_compact_tag(out: &mut String, tag: &Tag) {
    let _ = write!(out, "<{}>", tag.name);
    for child in &tag.children {
        write_compact(out, child);
    }
    let _ = write!(out, "</{}>", tag.name);
}

fn write_pretty(out: &mut String, value: &Value, depth: usize) {
    let Value::Tagged(tag) = value else {
        write_leaf(out, value);
        return;
    };

    match tag.children.as_slice() {
        [] => {
            let _ = write!(out, "<{}></{}>", tag.name, tag.name);
        }
        [only] if !matches!(only, Value::Tagged(_)) => {
            let _ = write!(out, "<{}>", tag.name);
            write_leaf(out, only);
            let _ = write!(out, "</{}>", tag.name);
        }
        children => {
            let _ = write!(out, "<{}>", tag.name);
            for child in children {
                out.push('\n');
                out.push_str(&INDENT.repeat(depth + 1));
                write_pretty(out, child, depth + 1);
            }
            out.push('\n');
            out.push_str(&INDENT.repeat(depth));
            let _ = write!(out, "</{}>", tag.name);
        }
    }
}
