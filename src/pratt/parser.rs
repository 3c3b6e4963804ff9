//! Pratt parser for arithmetic expressions.
//!
//! Tokens are dispatched through lookup tables instead of grammar
//! productions:
//! - NUD (null denotation) handlers start an expression: literals, prefix
//!   operators, parenthesised groups
//! - LED (left denotation) handlers continue one from a left operand: infix
//!   operators
//! - binding powers and associativity decide whether an infix operator binds
//!   to the current left operand or ends the current sub-expression
//!
//! Expressions are evaluated while they are parsed, so the result is a plain
//! `f64` rather than a tree.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, RECURSION_LIMIT,
};

use super::{
    expr::parse_expr,
    lexer::tokenize,
    lookups::{
        create_token_lookups, Associativity, BPLookup, BindingPower, LEDHandler, LEDLookup,
        NUDHandler, NUDLookup,
    },
    tokens::{Token, TokenKind},
};

/// Parsing state: the token stream, the cursor and the handler tables.
pub struct Parser {
    /// Always ends with an `EOF` token
    tokens: Vec<Token>,
    pos: usize,
    /// Number of `parse_expr` calls currently active
    depth: usize,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser with empty lookup tables; see [`create_token_lookups`].
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| Position(token.position.0 + token.lexeme.len()))
                .unwrap_or_default();
            tokens.push(Token {
                kind: TokenKind::EOF,
                lexeme: String::from("EOF"),
                position: end,
            });
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one.
    /// The cursor never moves past the final `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();

        if token.kind == expected_kind {
            return Ok(self.advance());
        }

        let internal_error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEof
        } else {
            ErrorImpl::ExpectedToken {
                expected: expected_kind.to_string(),
                found: token.to_string(),
            }
        };
        Err(Error::new(internal_error, token.position))
    }

    /// The error for a current token that no handler accepts.
    pub fn unexpected(&self) -> Error {
        let token = self.current_token();

        let internal_error = match token.kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEof,
            _ => ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
        };
        Error::new(internal_error, token.position)
    }

    /// Opens one more level of nesting, failing past [`RECURSION_LIMIT`].
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= RECURSION_LIMIT {
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded {
                    limit: RECURSION_LIMIT,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers an infix handler with its binding power and associativity.
    pub fn led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        associativity: Associativity,
        led_fn: LEDHandler,
    ) {
        self.binding_power_lookup
            .insert(kind, (binding_power, associativity));
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a prefix handler.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_position(&self) -> Position {
        self.current_token().position
    }
}

/// Evaluates a token stream as a single expression.
///
/// Fails if the stream is empty, ends mid-expression, or has tokens left over
/// after one complete expression.
pub fn parse(tokens: Vec<Token>) -> Result<f64, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let value = parse_expr(&mut parser, BindingPower::DEFAULT)?;

    if parser.current_token_kind() != TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::TrailingToken {
                token: parser.current_token().to_string(),
            },
            parser.get_position(),
        ));
    }

    Ok(value)
}

/// Tokenizes and evaluates an arithmetic expression over `+ - * / ^`,
/// parentheses and decimal literals.
///
/// Division by zero follows IEEE 754 and yields an infinity or NaN.
pub fn parse_expression(source: &str) -> Result<f64, Error> {
    debug!(bytes = source.len(), "parsing expression");

    let tokens = tokenize(source)?;
    let value = parse(tokens)?;

    debug!(value, "evaluated expression");
    Ok(value)
}
