#![allow(clippy::module_inception)]

//! Text-to-tree parsing front ends.
//!
//! Three independent parsers share one shape, a hand-written tokenizer feeding a
//! single-lookahead parser:
//!
//! - [`parse_json`] builds a [`json::value::Value`] from JSON-style text
//! - [`parse_markup`] builds a [`markup::value::Value`] from `<tag>...</tag>` text
//! - [`parse_expression`] evaluates an arithmetic expression with a Pratt parser

use std::fmt::{Display, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod json;
pub mod macros;
pub mod markup;
pub mod pratt;

extern crate regex;

pub use json::parser::parse_json;
pub use markup::parser::parse_markup;
pub use pratt::parser::parse_expression;

/// Deepest nesting of containers, tags or parenthesised groups a parser accepts.
pub const RECURSION_LIMIT: usize = 128;

/// Byte offset into the parsed source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line's text (including its newline, if
/// any) and the byte offset of `position` within that line. Offsets at or past
/// the end of the source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

/// Renders `error` as a caret diagnostic against the text it came from.
///
/// ```text
/// Error: ExpectedToken (Expected Colon, found `1`)
/// -> input.json
///   |
/// 1 | {"a" 1}
///   | -----^
/// ```
pub fn render_error(error: &Error, source: &str, source_name: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", source_name);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let column = line_text
        .get(..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
