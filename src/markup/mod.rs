//! Markup-style (`<tag>...</tag>`) front end.
//!
//! - `tokens` - token kinds and leaf type inference
//! - `tokenizer` - pull-based tokenizer (`next_token`)
//! - `value` - the parsed value tree and the duplicate-tag merge rule
//! - `parser` - LL(1) recursive-descent parser and `parse_markup`
//! - `writer` - serialization back to text

pub mod parser;
pub mod tokenizer;
pub mod tokens;
pub mod value;
pub mod writer;
