use std::fmt::Display;

use indexmap::IndexMap;

use super::writer;

/// A parsed JSON value.
///
/// Objects keep their keys in first-insertion order; inserting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// literal `null`
    Null,

    /// literal `true` or `false`
    Boolean(bool),

    /// any number literal, decoded as a double
    Number(f64),

    /// a quoted string with its escapes resolved
    String(String),

    /// `[ ... ]`
    Array(Vec<Value>),

    /// `{ "key": value, ... }`
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|members| members.get(key))
    }

    /// Looks up element `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|values| values.get(index))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", writer::to_string(self))
    }
}
