//! Tokenizer, parser, and value model for GCL.
//!
//! GCL is a small JSON-like configuration language: dicts with bare
//! identifier keys, arrays, escaped strings, signed integers in decimal,
//! binary, or hex, booleans, `null`, and `#` line comments.
//!
//! # Quick start
//!
//! ## Parse a document
//!
//! ```
//! use gcl::{parse, Value};
//!
//! let value = parse("{ name: \"demo\", ports: [80, 0x1BB] }").unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("demo"));
//! assert_eq!(value.get("ports").and_then(|p| p.at(1)), Some(&Value::Int(443)));
//! ```
//!
//! ## Walk a value with a visitor
//!
//! ```
//! use gcl::{parse, Dict, Value, Visitor};
//!
//! struct SumInts;
//!
//! impl Visitor for SumInts {
//!     type Output = i64;
//!
//!     fn visit_undefined(&mut self) -> i64 { 0 }
//!     fn visit_null(&mut self) -> i64 { 0 }
//!     fn visit_bool(&mut self, _: bool) -> i64 { 0 }
//!     fn visit_int(&mut self, value: i64) -> i64 { value }
//!     fn visit_float(&mut self, _: f64) -> i64 { 0 }
//!     fn visit_string(&mut self, _: &str) -> i64 { 0 }
//!     fn visit_array(&mut self, value: &[Value]) -> i64 {
//!         value.iter().map(|v| v.accept(self)).sum()
//!     }
//!     fn visit_dict(&mut self, value: &Dict) -> i64 {
//!         value.values().map(|v| v.accept(self)).sum()
//!     }
//! }
//!
//! let value = parse("{ a: 1, b: [2, 3], c: \"4\" }").unwrap();
//! assert_eq!(value.accept(&mut SumInts), 6);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod parser;
pub mod printer;
pub mod span;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use error::{Error, ErrorKind};
pub use parser::{MAX_DEPTH, parse, parse_into};
pub use printer::{Printer, pretty, pretty_with_indent};
pub use span::{Position, Span};
pub use token::{Punctuation, Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
pub use value::{Array, Dict, Value, ValueKind, Visitor};
