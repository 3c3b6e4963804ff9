use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A failed parse: what went wrong and the byte offset it went wrong at.
///
/// Every parser in the crate is fail-fast, so an `Error` is always the first
/// problem found in the input and no partial value accompanies it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at position {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The two failure classes a parse can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tokenizer could not classify the input at this position.
    Lex,
    /// The parser got a token it cannot use in the current production.
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn is_lex_error(&self) -> bool {
        self.get_kind() == ErrorKind::Lex
    }

    pub fn is_syntax_error(&self) -> bool {
        self.get_kind() == ErrorKind::Syntax
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::InvalidUnicodeEscape { .. } => "InvalidUnicodeEscape",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedTag { .. } => "UnterminatedTag",
            ErrorImpl::EmptyTagName => "EmptyTagName",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::TrailingToken { .. } => "TrailingToken",
            ErrorImpl::MismatchedCloseTag { .. } => "MismatchedCloseTag",
            ErrorImpl::RecursionLimitExceeded { .. } => "RecursionLimitExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unrecognised character: `{}`", character))
            }
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add the closing `\"` to the string"))
            }
            ErrorImpl::InvalidEscape { sequence } => ErrorTip::Suggestion(format!(
                "`{}` is not an escape, use one of \\\" \\\\ \\/ \\b \\f \\n \\r \\t \\uXXXX",
                sequence
            )),
            ErrorImpl::InvalidUnicodeEscape { sequence } => ErrorTip::Suggestion(format!(
                "`{}` must be \\u followed by 4 hex digits naming a valid code point",
                sequence
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnterminatedTag { name } => {
                ErrorTip::Suggestion(format!("Tag `{}` is missing its closing `>`", name))
            }
            ErrorImpl::EmptyTagName => {
                ErrorTip::Suggestion(String::from("Tags need a name between `<` and `>`"))
            }
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::UnexpectedEof => {
                ErrorTip::Suggestion(String::from("Input ended early, is something left unclosed?"))
            }
            ErrorImpl::TrailingToken { token } => ErrorTip::Suggestion(format!(
                "Only one root value is allowed, remove `{}`",
                token
            )),
            ErrorImpl::MismatchedCloseTag { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `</{}>` but found `</{}>`",
                expected, found
            )),
            ErrorImpl::RecursionLimitExceeded { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape: {sequence:?}")]
    InvalidEscape { sequence: String },
    #[error("invalid unicode escape: {sequence:?}")]
    InvalidUnicodeEscape { sequence: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated tag: {name:?}")]
    UnterminatedTag { name: String },
    #[error("empty tag name")]
    EmptyTagName,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, got {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected token after root value: {token:?}")]
    TrailingToken { token: String },
    #[error("mismatched close tag: expected {expected:?}, got {found:?}")]
    MismatchedCloseTag { expected: String, found: String },
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: usize },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::InvalidEscape { .. }
            | ErrorImpl::InvalidUnicodeEscape { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnterminatedTag { .. }
            | ErrorImpl::EmptyTagName => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::UnexpectedEof
            | ErrorImpl::TrailingToken { .. }
            | ErrorImpl::MismatchedCloseTag { .. }
            | ErrorImpl::RecursionLimitExceeded { .. } => ErrorKind::Syntax,
        }
    }
}
