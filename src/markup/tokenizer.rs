use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{classify_text, Token, TokenKind};

/// Pull-based markup tokenizer.
///
/// `<name>` and `</name>` become tag tokens; any other run of text up to the
/// next `<` is a leaf, typed by [`classify_text`]. Once the input is exhausted
/// every further call returns `EOF`.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer { source, pos: 0 }
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.at() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();
        let start = self.pos;

        let token = match self.at() {
            None => return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), Position(start))),
            Some('<') => self.read_tag()?,
            Some('>') => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character: '>' },
                    Position(start),
                ))
            }
            Some(_) => self.read_text(),
        };

        trace!(kind = %token.kind, position = token.position.0, "markup token");
        Ok(token)
    }

    /// Reads up to the next `<` or `>` and returns the text trimmed.
    fn read_raw(&mut self) -> &'a str {
        let rest = self.remainder();
        let end = rest.find(|c: char| c == '<' || c == '>').unwrap_or(rest.len());
        self.pos += end;

        rest[..end].trim()
    }

    fn read_tag(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.pos += 1;

        let kind = if self.remainder().starts_with('/') {
            self.pos += 1;
            TokenKind::CloseTag
        } else {
            TokenKind::OpenTag
        };

        let name = self.read_raw();
        if !self.remainder().starts_with('>') {
            return Err(Error::new(
                ErrorImpl::UnterminatedTag {
                    name: String::from(name),
                },
                Position(start),
            ));
        }
        self.pos += 1;

        if name.is_empty() {
            return Err(Error::new(ErrorImpl::EmptyTagName, Position(start)));
        }

        Ok(MK_TOKEN!(kind, String::from(name), Position(start)))
    }

    fn read_text(&mut self) -> Token {
        let start = self.pos;
        let text = self.read_raw();

        MK_TOKEN!(classify_text(text), String::from(text), Position(start))
    }
}

/// Drains a tokenizer over `source`, returning every token up to and including `EOF`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = vec![];

    loop {
        let token = tokenizer.next_token()?;
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            return Ok(tokens);
        }
    }
}
