//! LL(1) recursive-descent parser for markup documents.
//!
//! ```text
//! value := tag | STRING | NUMBER | BOOLEAN | NULL
//! tag   := OPEN_TAG(name) value* CLOSE_TAG(name)
//! ```
//!
//! Children of a tag are collected through [`Tag::add`], so repeated sibling
//! tags with one name collapse into a single entry.

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    RECURSION_LIMIT,
};

use super::{
    tokenizer::Tokenizer,
    tokens::{Token, TokenKind},
    value::{Tag, Value},
};

/// Holds the tokenizer and the single lookahead token for one parse.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    /// Number of tags currently open
    depth: usize,
}

impl<'a> Parser<'a> {
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

    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            let internal_error = if self.current.kind == TokenKind::EOF {
                ErrorImpl::UnexpectedEof
            } else {
                ErrorImpl::ExpectedToken {
                    expected: expected_kind.to_string(),
                    found: self.current.to_string(),
                }
            };
            return Err(Error::new(internal_error, self.current.position));
        }

        self.advance()
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
            TokenKind::OpenTag => self.parse_tag().map(Value::Tagged),
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
            TokenKind::Boolean => Ok(Value::Boolean(self.advance()?.lexeme == "true")),
            TokenKind::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            TokenKind::CloseTag => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current.to_string(),
                },
                self.current.position,
            )),
            TokenKind::EOF => Err(Error::new(ErrorImpl::UnexpectedEof, self.current.position)),
        }
    }

    fn parse_tag(&mut self) -> Result<Tag, Error> {
        if self.depth >= RECURSION_LIMIT {
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded {
                    limit: RECURSION_LIMIT,
                },
                self.current.position,
            ));
        }
        self.depth += 1;

        let open = self.expect(TokenKind::OpenTag)?;
        let mut tag = Tag::new(open.lexeme);

        loop {
            match self.current_token_kind() {
                TokenKind::CloseTag if self.current.lexeme == tag.name => break,
                TokenKind::CloseTag => {
                    return Err(Error::new(
                        ErrorImpl::MismatchedCloseTag {
                            expected: tag.name,
                            found: self.current.lexeme.clone(),
                        },
                        self.current.position,
                    ))
                }
                _ => {
                    let child = self.parse_value()?;
                    tag.add(child);
                }
            }
        }

        self.expect(TokenKind::CloseTag)?;
        self.depth -= 1;
        Ok(tag)
    }
}

/// Parses a markup document: a single root tag or a bare leaf.
pub fn parse_markup(source: &str) -> Result<Value, Error> {
    debug!(bytes = source.len(), "parsing markup document");

    let value = Parser::new(source)?.parse()?;

    debug!("parsed markup document");
    Ok(value)
}
