//! # tagcase-core
//!
//! Naming-convention checks for struct field tags.
//!
//! Given a syntax tree exposing struct types, the checker looks up the
//! configured keys in every field tag and verifies each value follows its
//! convention (camel, snake, goPascal, ...). The expected value comes from
//! the tag value itself or, with `use_field_name`, from the field name.
//!
//! - [`ast::SyntaxTree`] is the host-neutral view of a parsed source
//! - [`StructWalker`] and [`ConventionChecker`] run the checks
//! - [`Reporter`] receives [`Diagnostic`]s
//! - [`Config`] holds the rule set
//!
//! ## Example
//!
//! ```
//! use tagcase_core::ast::{Field, SourceFile, StructType, TypeExpr};
//! use tagcase_core::{run, Config, Diagnostic};
//!
//! let file = SourceFile::new(vec![StructType::new(vec![
//!     Field::named("UserID", TypeExpr::Ident("int".into())).with_tag(r#"`json:"userid"`"#),
//! ])]);
//! let config = Config::new().rule("json", "snake").use_field_name(true);
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! run(&file, &config, &mut diagnostics);
//! assert_eq!(diagnostics[0].message, "json(snake): got 'userid' want 'user_id'");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
pub mod case;
mod checker;
mod config;
pub mod field_name;
pub mod field_type;
mod report;
pub mod tag;
mod types;
mod walker;

pub use case::{CaseError, Convention, Converter};
pub use checker::ConventionChecker;
pub use config::{AnalyzerConfig, Config, ConfigError};
pub use field_name::{resolve_field_name, FieldError};
pub use field_type::{classify, BaseType, FieldType};
pub use report::{Diagnostic, DiagnosticKind, Reporter, ViolationCollector};
pub use tag::{lookup_tag_value, StructTag};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use walker::{run, StructWalker};
