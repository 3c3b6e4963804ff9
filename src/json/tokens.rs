use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map
    };
    pub static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[-+]?[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?").unwrap();
    pub static ref WORD_PATTERN: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,

    String,
    Number,

    True,
    False,
    Null,

    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit of a JSON document.
///
/// For `String` tokens `lexeme` holds the decoded text (escapes resolved,
/// quotes removed); for everything else it is the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::String => write!(f, "{:?}", self.lexeme),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}
