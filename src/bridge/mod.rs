//! CSV Bridge
//!
//! Bidirectional conversion between CSV text and the in-memory table:
//! - parse: CSV text → header-derived columns + type-inferred rows
//! - serialize: table → CSV text, quoting per RFC 4180
//!
//! The CSV grammar itself is delegated to the csv crate; this module owns
//! delimiter handling, column derivation, and type inference.

mod parser;
mod writer;

pub use parser::{derive_columns, detect_delimiter, parse_csv, Delimiter, ParseError, ParsedCsv};
pub use writer::{serialize, WriteError, DEFAULT_EXPORT_NAME};
