use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order; every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]*)").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
    ];
}

/// Eager lexer for arithmetic expressions, driven by the [`PATTERNS`] table.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, position = token.position.0, "expression token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        lexer.advance_n(matched.end());
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        let lexeme = matched.as_str();

        lexer.push(MK_TOKEN!(TokenKind::Number, String::from(lexeme), Position(lexer.pos())));
        lexer.advance_n(lexeme.len());
    }
}

/// Splits `source` into tokens, ending with exactly one `EOF`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);

    while !lexer.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lexer.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lexer, &pattern.regex),
            None => {
                let character = lexer.at().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character },
                    Position(lexer.pos()),
                ));
            }
        }
    }

    let end = Position(lexer.pos());
    lexer.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), end));
    Ok(lexer.tokens)
}
