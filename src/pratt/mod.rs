//! Arithmetic expression front end built on Pratt (operator-precedence)
//! parsing.
//!
//! - `tokens` - token kinds
//! - `lexer` - regex-table driven lexer
//! - `lookups` - binding powers and the NUD/LED handler tables
//! - `parser` - parser state and `parse_expression`
//! - `expr` - the NUD/LED handlers that evaluate as they parse

pub mod expr;
pub mod lexer;
pub mod lookups;
pub mod parser;
pub mod tokens;
