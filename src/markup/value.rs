use std::fmt::Display;

use tracing::debug;

use super::writer;

/// A parsed markup value: a typed leaf or a tag with children.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(i64),
    String(String),
    Tagged(Tag),
}

/// `<name> children... </name>`
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub children: Vec<Value>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            children: vec![],
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Value>) -> Self {
        Tag {
            name: name.into(),
            children,
        }
    }

    /// Appends `value` to the children, merging same-named sibling tags.
    ///
    /// If `value` is a tag and a child tag with the same name already exists,
    /// the new tag's children are appended to that existing child instead of
    /// adding a second entry. Matching looks at the name only, never at the
    /// children. Leaves are always appended, duplicates included.
    pub fn add(&mut self, value: Value) {
        match value {
            Value::Tagged(tag) => {
                let existing = self
                    .children
                    .iter()
                    .position(|child| matches!(child, Value::Tagged(t) if t.name == tag.name));

                match existing {
                    Some(index) => {
                        debug!(parent = %self.name, name = %tag.name, "merging duplicate tag");
                        if let Value::Tagged(existing) = &mut self.children[index] {
                            existing.children.extend(tag.children);
                        }
                    }
                    None => self.children.push(Value::Tagged(tag)),
                }
            }
            leaf => self.children.push(leaf),
        }
    }

    /// The first child tag called `name`.
    pub fn child(&self, name: &str) -> Option<&Tag> {
        self.children.iter().find_map(|child| match child {
            Value::Tagged(tag) if tag.name == name => Some(tag),
            _ => None,
        })
    }

    /// The first number among the children.
    pub fn number(&self) -> Option<i64> {
        self.children.iter().find_map(Value::as_i64)
    }

    /// The first string among the children.
    pub fn string(&self) -> Option<&str> {
        self.children.iter().find_map(Value::as_str)
    }

    /// The first boolean among the children.
    pub fn boolean(&self) -> Option<bool> {
        self.children.iter().find_map(Value::as_bool)
    }
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

    pub fn as_i64(&self) -> Option<i64> {
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

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Value::Tagged(tag) => Some(tag),
            _ => None,
        }
    }
}

impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        Value::Tagged(tag)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", writer::to_string(self))
    }
}
