//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_lexical_errors_have_lex_kind() {
    let errors = vec![
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        ErrorImpl::UnterminatedString,
        ErrorImpl::InvalidEscape {
            sequence: "\\q".to_string(),
        },
        ErrorImpl::InvalidUnicodeEscape {
            sequence: "\\u12".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        ErrorImpl::UnterminatedTag {
            name: "root".to_string(),
        },
        ErrorImpl::EmptyTagName,
    ];

    for error in errors {
        let error = Error::new(error, Position(0));
        assert_eq!(error.get_kind(), ErrorKind::Lex);
        assert!(error.is_lex_error());
        assert!(!error.is_syntax_error());
    }
}

#[test]
fn test_syntax_errors_have_syntax_kind() {
    let errors = vec![
        ErrorImpl::UnexpectedToken {
            token: ":".to_string(),
        },
        ErrorImpl::ExpectedToken {
            expected: "Colon".to_string(),
            found: "1".to_string(),
        },
        ErrorImpl::UnexpectedEof,
        ErrorImpl::TrailingToken {
            token: "2".to_string(),
        },
        ErrorImpl::MismatchedCloseTag {
            expected: "a".to_string(),
            found: "b".to_string(),
        },
        ErrorImpl::RecursionLimitExceeded { limit: 128 },
    ];

    for error in errors {
        let error = Error::new(error, Position(0));
        assert_eq!(error.get_kind(), ErrorKind::Syntax);
        assert!(error.is_syntax_error());
    }
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "RightBrace".to_string(),
            found: "EOF".to_string(),
        },
        Position(7),
    );

    assert_eq!(
        error.to_string(),
        "expected RightBrace, got \"EOF\" at position 7"
    );
}

#[test]
fn test_error_tip_names_character() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unrecognised character: `@`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MismatchedCloseTag {
            expected: "a".to_string(),
            found: "b".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `</a>` but found `</b>`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_recursion_limit_error() {
    let error = Error::new(ErrorImpl::RecursionLimitExceeded { limit: 128 }, Position(3));

    assert_eq!(error.get_error_name(), "RecursionLimitExceeded");
    assert_eq!(error.to_string(), "recursion limit of 128 exceeded at position 3");
    assert_eq!(error.get_tip().to_string(), "Nesting is limited to 128 levels");
}
