//! Error types shared by every parser in the crate.
//!
//! This module defines:
//!
//! - `Error`, a positioned failure returned by every `parse_*` entry point
//! - `ErrorImpl`, the specific lexical or syntactic problem
//! - `ErrorKind`, which of the two classes a failure belongs to
//! - `ErrorTip`, an optional human-facing suggestion for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
