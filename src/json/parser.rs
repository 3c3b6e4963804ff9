//! LL(1) recursive-descent parser for JSON documents.
//!
//! Grammar, one function per production:
//!
//! ```text
//! value  := object | array | STRING | NUMBER | TRUE | FALSE | NULL
//! object := '{' ( STRING ':' value ( ',' STRING ':' value )* )? '}'
//! array  := '[' ( value ( ',' value )* )? ']'
//! ```
//!
//! Every branch is chosen from the kind of the current token alone.

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    RECURSION_LIMIT,
};

use super::{
    tokenizer::Tokenizer,
    tokens::{Token, TokenKind},
    value::Value,
};

/// Holds the tokenizer and the single lookahead token for one parse.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    /// Number of objects and arrays currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` and reads the first lookahead token.
    pub fn new(source: &'a str) -> Result<Self, Error> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;

        Ok(Parser {
            tokenizer,
            current,
            depth: 0,
        })
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Moves to the next token and returns the one just consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is `expected_kind`, fails otherwise.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.expected(expected_kind));
        }

        self.advance()
    }

    fn expected(&self, expected_kind: TokenKind) -> Error {
        let internal_error = if self.current.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEof
        } else {
            ErrorImpl::ExpectedToken {
                expected: expected_kind.to_string(),
                found: self.current.to_string(),
            }
        };

        Error::new(internal_error, self.current.position)
    }

    fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= RECURSION_LIMIT {
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded {
                    limit: RECURSION_LIMIT,
                },
                self.current.position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn unexpected(&self) -> Error {
        let internal_error = if self.current.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEof
        } else {
            ErrorImpl::UnexpectedToken {
                token: self.current.to_string(),
            }
        };

        Error::new(internal_error, self.current.position)
    }

    /// Parses exactly one root value followed by end of input.
    pub fn parse(mut self) -> Result<Value, Error> {
        let value = self.parse_value()?;

        if self.current.kind != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::TrailingToken {
                    token: self.current.to_string(),
                },
                self.current.position,
            ));
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        match self.current_token_kind() {
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::String => Ok(Value::String(self.advance()?.lexeme)),
            TokenKind::Number => {
                let token = self.advance()?;
                token.lexeme.parse().map(Value::Number).map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: token.lexeme.clone(),
                        },
                        token.position,
                    )
                })
            }
            TokenKind::True => {
                self.advance()?;
                Ok(Value::Boolean(true))
            }
            TokenKind::False => {
                self.advance()?;
                Ok(Value::Boolean(false))
            }
            TokenKind::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_object(&mut self) -> Result<Value, Error> {
        self.enter()?;
        self.expect(TokenKind::LeftBrace)?;
        let mut members = IndexMap::new();

        if self.current_token_kind() != TokenKind::RightBrace {
            loop {
                let key = self.expect(TokenKind::String)?.lexeme;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_value()?;
                members.insert(key, value);

                if self.current_token_kind() != TokenKind::Comma {
                    break;
                }
                self.advance()?;
            }
        }

        self.expect(TokenKind::RightBrace)?;
        self.leave();
        Ok(Value::Object(members))
    }

    fn parse_array(&mut self) -> Result<Value, Error> {
        self.enter()?;
        self.expect(TokenKind::LeftBracket)?;
        let mut values = vec![];

        if self.current_token_kind() != TokenKind::RightBracket {
            loop {
                values.push(self.parse_value()?);

                if self.current_token_kind() != TokenKind::Comma {
                    break;
                }
                self.advance()?;
            }
        }

        self.expect(TokenKind::RightBracket)?;
        self.leave();
        Ok(Value::Array(values))
    }
}

/// Parses a complete JSON document.
///
/// Fails with a lexical error when the text cannot be tokenized and with a
/// syntax error on any token the grammar does not allow at that point,
/// including anything after the root value.
pub fn parse_json(source: &str) -> Result<Value, Error> {
    debug!(bytes = source.len(), "parsing json document");

    let value = Parser::new(source)?.parse()?;

    debug!("parsed json document");
    Ok(value)
}
