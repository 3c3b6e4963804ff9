use crate::errors::errors::{Error, ErrorImpl};

use super::{
    lookups::{Associativity, BindingPower},
    parser::Parser,
    tokens::TokenKind,
};

/// Parses one expression whose infix operators all bind at least as tightly
/// as `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<f64, Error> {
    parser.enter()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected());
    };

    let mut left = nud(parser)?;

    // Fold infix operators into `left` until one binds more loosely than `bp`
    loop {
        let token_kind = parser.current_token_kind();
        let Some((operator_bp, associativity)) =
            parser.get_bp_lookup().get(&token_kind).copied()
        else {
            break;
        };

        if operator_bp < bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected());
        };

        let right_bp = match associativity {
            Associativity::Left => operator_bp.next(),
            Associativity::Right => operator_bp,
        };

        left = led(parser, left, right_bp)?;
    }

    parser.leave();
    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<f64, Error> {
    let token = parser.advance();

    token.lexeme.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.lexeme.clone(),
            },
            token.position,
        )
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: f64, bp: BindingPower) -> Result<f64, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    match operator_token.kind {
        TokenKind::Plus => Ok(left + right),
        TokenKind::Dash => Ok(left - right),
        TokenKind::Star => Ok(left * right),
        TokenKind::Slash => Ok(left / right),
        TokenKind::Caret => Ok(left.powf(right)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.to_string(),
            },
            operator_token.position,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<f64, Error> {
    let operator_token = parser.advance();
    let operand = parse_expr(parser, BindingPower::UNARY)?;

    match operator_token.kind {
        TokenKind::Dash => Ok(-operand),
        _ => Ok(operand),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<f64, Error> {
    parser.advance();
    let value = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(value)
}
