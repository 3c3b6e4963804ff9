//! Serializes a [`Value`] back to JSON text.

use std::fmt::Write;

use super::value::Value;

const INDENT: &str = "  ";

/// Writes `value` with no insignificant whitespace.
pub fn to_string(value: &Value) -> String {
    let mut writer = Writer {
        out: String::new(),
        pretty: false,
        depth: 0,
    };
    writer.write_value(value);
    writer.out
}

/// Writes `value` with one member per line, indented by two spaces per level.
pub fn to_string_pretty(value: &Value) -> String {
    let mut writer = Writer {
        out: String::new(),
        pretty: true,
        depth: 0,
    };
    writer.write_value(value);
    writer.out
}

struct Writer {
    out: String,
    pretty: bool,
    depth: usize,
}

impl Writer {
    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Boolean(value) => self.out.push_str(if *value { "true" } else { "false" }),
            Value::Number(value) => self.write_number(*value),
            Value::String(value) => self.write_string(value),
            Value::Array(values) => {
                if values.is_empty() {
                    self.out.push_str("[]");
                    return;
                }

                self.out.push('[');
                self.depth += 1;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline();
                    self.write_value(value);
                }
                self.depth -= 1;
                self.newline();
                self.out.push(']');
            }
            Value::Object(members) => {
                if members.is_empty() {
                    self.out.push_str("{}");
                    return;
                }

                self.out.push('{');
                self.depth += 1;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline();
                    self.write_string(key);
                    self.out.push(':');
                    if self.pretty {
                        self.out.push(' ');
                    }
                    self.write_value(value);
                }
                self.depth -= 1;
                self.newline();
                self.out.push('}');
            }
        }
    }

    fn newline(&mut self) {
        if self.pretty {
            self.out.push('\n');
            self.out.push_str(&INDENT.repeat(self.depth));
        }
    }

    // NaN and the infinities have no JSON spelling.
    fn write_number(&mut self, value: f64) {
        if value.is_finite() {
            let _ = write!(self.out, "{}", value);
        } else {
            self.out.push_str("null");
        }
    }

    fn write_string(&mut self, value: &str) {
        self.out.push('"');
        for c in value.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{8}' => self.out.push_str("\\b"),
                '\u{c}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}
