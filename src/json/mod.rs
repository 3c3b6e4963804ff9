//! JSON-style front end.
//!
//! - `tokens` - token kinds and the keyword table
//! - `tokenizer` - pull-based tokenizer (`next_token`)
//! - `value` - the parsed value tree
//! - `parser` - LL(1) recursive-descent parser and `parse_json`
//! - `writer` - serialization back to text

pub mod parser;
pub mod tokenizer;
pub mod tokens;
pub mod value;
pub mod writer;

#[cfg(test)]
mod tests;
