//! # tagcase-go
//!
//! Tree-sitter based Go front end for tagcase.
//!
//! Parses Go source with `tree-sitter-go` and exposes its struct types
//! through [`tagcase_core::ast::SyntaxTree`]:
//!
//! - [`GoParser`] turns source text into a [`GoSource`]
//! - [`GoSource`] converts `struct_type` nodes lazily, in pre-order

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod convert;
pub mod parser;

pub use parser::{GoParser, GoSource, ParseError};
