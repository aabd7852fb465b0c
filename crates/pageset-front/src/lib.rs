//! Header block parsing for generated documents.
//!
//! A generated document starts with a `---` delimited block of `key: value`
//! lines. This crate reads that block back without interpreting anything
//! else in the document.

pub mod header;

pub use header::{extract_header, parse_header, Header};
