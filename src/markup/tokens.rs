use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref LITERAL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("NULL", TokenKind::Null);
        map
    };
    pub static ref INTEGER_PATTERN: Regex = Regex::new(r"^[-+]?[0-9]+$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    OpenTag,
    CloseTag,

    String,
    Number,
    Boolean,
    Null,

    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit of a markup document.
///
/// For tags `lexeme` is the trimmed tag name; for leaf text it is the trimmed
/// text itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::OpenTag => write!(f, "<{}>", self.lexeme),
            TokenKind::CloseTag => write!(f, "</{}>", self.lexeme),
            TokenKind::EOF => write!(f, "EOF"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}

/// Infers the kind of a run of leaf text.
///
/// The whole text must match: an optionally signed run of ASCII digits is a
/// number, exactly `true`/`false` a boolean, exactly `NULL` a null. Anything
/// else, `NULLable` or `12a` or a lone `-` included, is a string.
pub fn classify_text(text: &str) -> TokenKind {
    if INTEGER_PATTERN.is_match(text) {
        return TokenKind::Number;
    }

    LITERAL_LOOKUP
        .get(text)
        .copied()
        .unwrap_or(TokenKind::String)
}
