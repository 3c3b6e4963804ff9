use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP, NUMBER_PATTERN, WORD_PATTERN};

/// Pull-based JSON tokenizer.
///
/// Each call to [`Tokenizer::next_token`] skips whitespace and returns exactly
/// one token. Once the input is exhausted every further call returns `EOF`.
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

        let Some(c) = self.at() else {
            return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), Position(start)));
        };

        let token = match c {
            '{' => self.punctuation(TokenKind::LeftBrace, "{"),
            '}' => self.punctuation(TokenKind::RightBrace, "}"),
            '[' => self.punctuation(TokenKind::LeftBracket, "["),
            ']' => self.punctuation(TokenKind::RightBracket, "]"),
            ':' => self.punctuation(TokenKind::Colon, ":"),
            ',' => self.punctuation(TokenKind::Comma, ","),
            '"' => self.read_string()?,
            c if c.is_ascii_digit() || c == '-' || c == '+' => self.read_number()?,
            c if c.is_ascii_alphabetic() => self.read_keyword()?,
            c => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { character: c },
                    Position(start),
                ))
            }
        };

        trace!(kind = %token.kind, position = token.position.0, "json token");
        Ok(token)
    }

    fn punctuation(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let token = MK_TOKEN!(kind, String::from(lexeme), Position(self.pos));
        self.pos += lexeme.len();
        token
    }

    fn read_keyword(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let word = WORD_PATTERN
            .find(self.remainder())
            .map(|matched| matched.as_str())
            .unwrap_or_default();

        match KEYWORD_LOOKUP.get(word) {
            Some(kind) => {
                self.pos += word.len();
                Ok(MK_TOKEN!(*kind, String::from(word), Position(start)))
            }
            None => Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: self.at().unwrap_or_default(),
                },
                Position(start),
            )),
        }
    }

    fn read_number(&mut self) -> Result<Token, Error> {
        let start = self.pos;

        match NUMBER_PATTERN.find(self.remainder()) {
            Some(matched) => {
                self.pos += matched.end();
                Ok(MK_TOKEN!(
                    TokenKind::Number,
                    String::from(matched.as_str()),
                    Position(start)
                ))
            }
            None => {
                let token = self
                    .remainder()
                    .chars()
                    .take_while(|c| !c.is_whitespace() && !",:]}".contains(*c))
                    .collect();
                Err(Error::new(
                    ErrorImpl::NumberParseError { token },
                    Position(start),
                ))
            }
        }
    }

    fn read_string(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.pos += 1;

        let mut result = String::new();

        loop {
            let Some(c) = self.at() else {
                return Err(Error::new(ErrorImpl::UnterminatedString, Position(start)));
            };
            let escape_start = self.pos;
            self.pos += c.len_utf8();

            match c {
                '"' => return Ok(MK_TOKEN!(TokenKind::String, result, Position(start))),
                '\\' => result.push(self.read_escape(escape_start)?),
                _ => result.push(c),
            }
        }
    }

    fn read_escape(&mut self, escape_start: usize) -> Result<char, Error> {
        let Some(c) = self.at() else {
            return Err(Error::new(
                ErrorImpl::UnterminatedString,
                Position(escape_start),
            ));
        };
        self.pos += c.len_utf8();

        match c {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{8}'),
            'f' => Ok('\u{c}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.read_unicode_escape(escape_start),
            other => Err(Error::new(
                ErrorImpl::InvalidEscape {
                    sequence: format!("\\{}", other),
                },
                Position(escape_start),
            )),
        }
    }

    /// Decodes the `XXXX` of `\uXXXX`, joining a UTF-16 surrogate pair
    /// spelled as two consecutive escapes into one scalar value.
    fn read_unicode_escape(&mut self, escape_start: usize) -> Result<char, Error> {
        let high = self.read_hex4(escape_start)?;

        let code = if (0xD800..0xDC00).contains(&high) {
            if !self.remainder().starts_with("\\u") {
                return Err(self.invalid_unicode(escape_start));
            }
            self.pos += 2;

            let low = self.read_hex4(escape_start)?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(self.invalid_unicode(escape_start));
            }

            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else {
            high
        };

        char::from_u32(code).ok_or_else(|| self.invalid_unicode(escape_start))
    }

    fn read_hex4(&mut self, escape_start: usize) -> Result<u32, Error> {
        let digits = self
            .remainder()
            .get(..4)
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()));

        match digits.and_then(|digits| u32::from_str_radix(digits, 16).ok()) {
            Some(value) => {
                self.pos += 4;
                Ok(value)
            }
            None => Err(self.invalid_unicode(escape_start)),
        }
    }

    fn invalid_unicode(&self, escape_start: usize) -> Error {
        let end = self.pos.max(escape_start);
        let sequence = self.source[escape_start..end]
            .chars()
            .chain(self.source[end..].chars().take(4))
            .collect();

        Error::new(
            ErrorImpl::InvalidUnicodeEscape { sequence },
            Position(escape_start),
        )
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
