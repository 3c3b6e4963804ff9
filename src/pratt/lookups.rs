use std::collections::HashMap;

use crate::errors::errors::Error;

use super::{expr::*, parser::Parser, tokens::TokenKind};

/// Numeric precedence of an operator. Higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct BindingPower(pub u8);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const ADDITIVE: BindingPower = BindingPower(10);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(20);
    pub const EXPONENT: BindingPower = BindingPower(30);
    /// Prefix `+`/`-` operands; above every infix operator.
    pub const UNARY: BindingPower = BindingPower(100);

    pub fn next(self) -> BindingPower {
        BindingPower(self.0 + 1)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

pub type NUDHandler = fn(&mut Parser) -> Result<f64, Error>;
/// Receives the left operand and the minimum binding power for the right one.
pub type LEDHandler = fn(&mut Parser, f64, BindingPower) -> Result<f64, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::ADDITIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::ADDITIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::MULTIPLICATIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::MULTIPLICATIVE, Associativity::Left, parse_binary_expr);

    parser.led(TokenKind::Caret, BindingPower::EXPONENT, Associativity::Right, parse_binary_expr);

    // Literals, prefix operators and grouping
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, (BindingPower, Associativity)>;
