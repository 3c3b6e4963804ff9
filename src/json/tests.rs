//! Unit tests for the JSON tokenizer, parser and writer.

use indexmap::IndexMap;
use pretty_assertions::assert_eq;

use crate::{
    errors::errors::{ErrorImpl, ErrorKind},
    RECURSION_LIMIT,
};

use super::{
    parser::parse_json,
    tokenizer::{tokenize, Tokenizer},
    tokens::TokenKind,
    value::Value,
    writer,
};

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("{ } [ ] : ,").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LeftBrace);
    assert_eq!(tokens[1].kind, TokenKind::RightBrace);
    assert_eq!(tokens[2].kind, TokenKind::LeftBracket);
    assert_eq!(tokens[3].kind, TokenKind::RightBracket);
    assert_eq!(tokens[4].kind, TokenKind::Colon);
    assert_eq!(tokens[5].kind, TokenKind::Comma);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("true false null").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[1].kind, TokenKind::False);
    assert_eq!(tokens[2].kind, TokenKind::Null);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 -3.14 +7 1e10 2.5E-3").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].lexeme, "-3.14");
    assert_eq!(tokens[2].lexeme, "+7");
    assert_eq!(tokens[3].lexeme, "1e10");
    assert_eq!(tokens[4].lexeme, "2.5E-3");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("  {\"a\": 1}").unwrap();

    assert_eq!(tokens[0].position.0, 2);
    assert_eq!(tokens[1].position.0, 3);
    assert_eq!(tokens[2].position.0, 6);
    assert_eq!(tokens[3].position.0, 8);
    assert_eq!(tokens[4].position.0, 9);
    assert_eq!(tokens[5].position.0, 10);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""a\"b" "\\ \/ \b \f \n \r \t" "\u0041\u00e9""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "a\"b");
    assert_eq!(tokens[1].lexeme, "\\ / \u{8} \u{c} \n \r \t");
    assert_eq!(tokens[2].lexeme, "Aé");
}

#[test]
fn test_tokenize_unicode_escape_is_case_insensitive() {
    let tokens = tokenize(r#""\u00E9\u00e9""#).unwrap();

    assert_eq!(tokens[0].lexeme, "éé");
}

#[test]
fn test_tokenize_surrogate_pair() {
    let tokens = tokenize(r#""\ud83d\ude00""#).unwrap();

    assert_eq!(tokens[0].lexeme, "😀");
}

#[test]
fn test_tokenize_lone_surrogate() {
    let error = tokenize(r#""\ud83d""#).unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::InvalidUnicodeEscape { .. }
    ));
}

#[test]
fn test_tokenize_short_unicode_escape() {
    let error = tokenize(r#""\u12""#).unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::InvalidUnicodeEscape { .. }
    ));
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_tokenize_invalid_escape() {
    let error = tokenize(r#""bad \q""#).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::InvalidEscape {
            sequence: "\\q".to_string()
        }
    );
    assert_eq!(error.get_position().0, 5);
    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("\"never closed").unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 0);

    let error = tokenize("\"trailing backslash\\").unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("[1, @]").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_unknown_word() {
    let error = tokenize("nul").unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_tokenize_bare_sign() {
    let error = tokenize("-x").unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::NumberParseError { .. }
    ));
}

#[test]
fn test_eof_is_repeated() {
    let mut tokenizer = Tokenizer::new(" 1 ");

    assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Number);
    for _ in 0..3 {
        let token = tokenizer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.position.0, 3);
    }
}

#[test]
fn test_parse_scalars() {
    assert_eq!(parse_json("null").unwrap(), Value::Null);
    assert_eq!(parse_json("true").unwrap(), Value::Boolean(true));
    assert_eq!(parse_json("false").unwrap(), Value::Boolean(false));
    assert_eq!(parse_json("1.00").unwrap(), Value::Number(1.0));
    assert_eq!(parse_json("-2.5e2").unwrap(), Value::Number(-250.0));
    assert_eq!(
        parse_json("\"world\"").unwrap(),
        Value::String("world".to_string())
    );
}

#[test]
fn test_parse_unicode_escape() {
    assert_eq!(
        parse_json(r#""\u0041""#).unwrap(),
        Value::String("A".to_string())
    );
}

#[test]
fn test_parse_nested_document() {
    let source = r#"
        {
            "hello" : "world",
            "f1" : null,
            "f2" : true,
            "f3" : 1.00,
            "a" : {
             "hoho" : "test",
             "d" : "2"
            },
            "list": [1, [2, 3], {}]
        }"#;

    let value = parse_json(source).unwrap();

    assert_eq!(value.get("hello").and_then(Value::as_str), Some("world"));
    assert!(value.get("f1").unwrap().is_null());
    assert_eq!(value.get("f2").and_then(Value::as_bool), Some(true));
    assert_eq!(value.get("f3").and_then(Value::as_f64), Some(1.0));
    assert_eq!(
        value.get("a").and_then(|a| a.get("d")).and_then(Value::as_str),
        Some("2")
    );

    let list = value.get("list").unwrap();
    assert_eq!(list.get_index(0), Some(&Value::Number(1.0)));
    assert_eq!(
        list.get_index(1).and_then(|inner| inner.get_index(1)),
        Some(&Value::Number(3.0))
    );
    assert_eq!(list.get_index(2), Some(&Value::Object(IndexMap::new())));

    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["hello", "f1", "f2", "f3", "a", "list"]);
}

#[test]
fn test_parse_duplicate_key_last_write_wins() {
    let value = parse_json(r#"{"k":1,"other":true,"k":2}"#).unwrap();
    let members = value.as_object().unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members.get("k"), Some(&Value::Number(2.0)));

    let keys: Vec<&str> = members.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["k", "other"]);
}

#[test]
fn test_parse_empty_containers() {
    assert_eq!(parse_json("{}").unwrap(), Value::Object(IndexMap::new()));
    assert_eq!(parse_json("[ ]").unwrap(), Value::Array(vec![]));
}

#[test]
fn test_parse_missing_closing_brace() {
    let error = parse_json(r#"{"a": 1"#).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEof);
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_parse_missing_colon() {
    let error = parse_json(r#"{"a" 1}"#).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedToken {
            expected: "Colon".to_string(),
            found: "1".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_parse_non_string_key() {
    let error = parse_json("{1: 2}").unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::ExpectedToken { expected, .. } if expected == "String"
    ));
}

#[test]
fn test_parse_trailing_comma() {
    assert!(parse_json("[1, 2,]").unwrap_err().is_syntax_error());
    assert!(parse_json(r#"{"a": 1,}"#).unwrap_err().is_syntax_error());
}

#[test]
fn test_parse_missing_comma() {
    let error = parse_json("[1 2]").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedToken {
            expected: "RightBracket".to_string(),
            found: "2".to_string(),
        }
    );
}

#[test]
fn test_parse_trailing_value() {
    let error = parse_json("{} []").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::TrailingToken {
            token: "[".to_string()
        }
    );
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_parse_empty_input() {
    let error = parse_json("   ").unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEof);
}

#[test]
fn test_parse_stray_close() {
    let error = parse_json("]").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "]".to_string()
        }
    );
}

#[test]
fn test_write_compact() {
    let value = parse_json(r#"{ "a" : [1, 2.5, true], "b": {"c": null}, "s": "x\"y" }"#).unwrap();

    assert_eq!(
        writer::to_string(&value),
        r#"{"a":[1,2.5,true],"b":{"c":null},"s":"x\"y"}"#
    );
    assert_eq!(value.to_string(), writer::to_string(&value));
}

#[test]
fn test_write_pretty() {
    let value = parse_json(r#"{"a":[1,2],"b":{},"c":[]}"#).unwrap();

    assert_eq!(
        writer::to_string_pretty(&value),
        "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {},\n  \"c\": []\n}"
    );
}

#[test]
fn test_write_escapes_control_characters() {
    let value = Value::String("tab\tbell\u{7}".to_string());

    assert_eq!(writer::to_string(&value), r#""tab\tbell\u0007""#);
}

#[test]
fn test_write_non_finite_number() {
    assert_eq!(writer::to_string(&Value::Number(f64::NAN)), "null");
    assert_eq!(writer::to_string(&Value::Number(f64::INFINITY)), "null");
}

fn nested_arrays(depth: usize) -> String {
    "[".repeat(depth) + &"]".repeat(depth)
}

#[test]
fn test_parse_nesting_up_to_limit() {
    let value = parse_json(&nested_arrays(RECURSION_LIMIT)).unwrap();

    let mut current = &value;
    let mut depth = 1;
    while let Some(inner) = current.get_index(0) {
        current = inner;
        depth += 1;
    }
    assert_eq!(depth, RECURSION_LIMIT);
}

#[test]
fn test_parse_nesting_past_limit() {
    let error = parse_json(&nested_arrays(RECURSION_LIMIT + 1)).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::RecursionLimitExceeded {
            limit: RECURSION_LIMIT
        }
    );
    assert_eq!(error.get_position().0, RECURSION_LIMIT);
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_parse_deep_nesting_does_not_overflow() {
    let error = parse_json(&nested_arrays(20_000)).unwrap_err();
    assert!(matches!(
        error.get_error(),
        ErrorImpl::RecursionLimitExceeded { .. }
    ));

    let source = r#"{"a":"#.repeat(20_000);
    let error = parse_json(&source).unwrap_err();
    assert!(matches!(
        error.get_error(),
        ErrorImpl::RecursionLimitExceeded { .. }
    ));
    assert_eq!(error.get_position().0, RECURSION_LIMIT * 5);
}
