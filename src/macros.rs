//! Utility macros for the tokenizers.
//!
//! - `MK_TOKEN!` - Creates a Token instance for whichever dialect's `Token` is in scope
//! - `MK_DEFAULT_HANDLER!` - Creates an expression lexer handler for fixed lexemes

/// Creates a Token instance.
///
/// Expands to a struct literal of the `Token` type in scope at the call site,
/// so each dialect's tokenizer gets its own token type.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text (or decoded text for strings)
/// * `$position` - Byte offset where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position(0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates a default expression lexer handler for a fixed lexeme.
///
/// Generates a handler that pushes a token with the given kind and advances
/// the lexer past the lexeme.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                $crate::Position(lexer.pos())
            ));
            lexer.advance_n($value.len());
        }
    };
}
