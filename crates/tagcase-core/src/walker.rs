//! Struct discovery and per-field dispatch.

use tracing::debug;

use crate::ast::{Field, StructType, SyntaxTree};
use crate::checker::ConventionChecker;
use crate::config::Config;
use crate::field_name::{resolve_field_name, FieldError};
use crate::field_type::classify;
use crate::report::{Diagnostic, DiagnosticKind, Reporter};

/// Walks struct types of a syntax tree and checks their tagged fields.
#[derive(Debug, Clone)]
pub struct StructWalker {
    checker: ConventionChecker,
}

impl StructWalker {
    /// Creates a walker for `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            checker: ConventionChecker::new(config),
        }
    }

    /// Returns true when no rule is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checker.is_empty()
    }

    /// Checks every struct in `tree`.
    ///
    /// Does not touch the tree at all when no rule is active.
    pub fn walk(&self, tree: &dyn SyntaxTree, reporter: &mut dyn Reporter) {
        if self.is_empty() {
            debug!("no active rules, skipping traversal");
            return;
        }
        tree.for_each_struct(&mut |node| self.check_struct(node, reporter));
    }

    /// Checks the tagged fields of one struct.
    pub fn check_struct(&self, node: &StructType, reporter: &mut dyn Reporter) {
        if node.fields.is_empty() {
            return;
        }
        for field in &node.fields {
            self.check_field(node, field, reporter);
        }
    }

    fn check_field(&self, node: &StructType, field: &Field, reporter: &mut dyn Reporter) {
        let Some(tag) = &field.tag else {
            return;
        };

        let field_name = match resolve_field_name(field) {
            Ok(name) => name,
            Err(err) => {
                report_field_error(reporter, node, "unable to get field name", &err);
                return;
            }
        };

        if classify(&field.ty).is_empty() {
            let err = FieldError::UnsupportedType(field.ty.to_string());
            report_field_error(reporter, node, "unable to get field type", &err);
            return;
        }

        self.checker.check_field(node, tag, &field_name, reporter);
    }
}

fn report_field_error(
    reporter: &mut dyn Reporter,
    node: &StructType,
    context: &str,
    err: &FieldError,
) {
    reporter.report(Diagnostic {
        kind: DiagnosticKind::UnsupportedField,
        position: node.position,
        message: format!("{context}: {err}"),
    });
}

/// Checks `tree` against `config`, sending findings to `reporter`.
pub fn run(tree: &dyn SyntaxTree, config: &Config, reporter: &mut dyn Reporter) {
    StructWalker::new(config).walk(tree, reporter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Position, SourceFile, TypeExpr};
    use std::cell::Cell;

    struct CountingTree {
        visits: Cell<usize>,
        inner: SourceFile,
    }

    impl SyntaxTree for CountingTree {
        fn for_each_struct(&self, visit: &mut dyn FnMut(&StructType)) {
            self.visits.set(self.visits.get() + 1);
            self.inner.for_each_struct(visit);
        }
    }

    fn ident(name: &str) -> TypeExpr {
        TypeExpr::Ident(name.into())
    }

    fn positioned(fields: Vec<Field>) -> StructType {
        let mut node = StructType::new(fields);
        node.position = Position::new(2, 9);
        node
    }

    #[test]
    fn empty_rules_never_traverse() {
        let tree = CountingTree {
            visits: Cell::new(0),
            inner: SourceFile::new(vec![positioned(vec![
                Field::named("A", ident("int")).with_tag(r#"`json:"BAD"`"#)
            ])]),
        };
        let mut out = Vec::new();

        run(&tree, &Config::new(), &mut out);
        run(&tree, &Config::new().rule("json", ""), &mut out);

        assert_eq!(tree.visits.get(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn untagged_fields_and_empty_structs_are_skipped() {
        let file = SourceFile::new(vec![
            positioned(Vec::new()),
            positioned(vec![Field::named("user_name", ident("string"))]),
        ]);
        let mut out = Vec::new();
        run(&file, &Config::new().rule("json", "camel").use_field_name(true), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn unsupported_embedded_field_is_reported_once() {
        let file = SourceFile::new(vec![positioned(vec![
            Field::embedded(TypeExpr::Slice(Box::new(ident("int")))).with_tag(r#"`json:"x"`"#),
            Field::named("Name", ident("string")).with_tag(r#"`json:"name"`"#),
        ])]);
        let mut out = Vec::new();
        let config = Config::new().rule("json", "camel").rule("yaml", "snake");
        run(&file, &config, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, DiagnosticKind::UnsupportedField);
        assert_eq!(out[0].position, Position::new(2, 9));
        assert_eq!(
            out[0].message,
            "unable to get field name: unsupported type expression: []int"
        );
    }

    #[test]
    fn unclassifiable_named_field_is_reported() {
        let file = SourceFile::new(vec![positioned(vec![
            Field::named("Handler", TypeExpr::Func).with_tag(r#"`json:"handler"`"#)
        ])]);
        let mut out = Vec::new();
        run(&file, &Config::new().rule("json", "camel"), &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].message,
            "unable to get field type: unsupported type expression: func(...)"
        );
    }

    #[test]
    fn later_fields_still_checked_after_error() {
        let file = SourceFile::new(vec![positioned(vec![
            Field::named("Ch", TypeExpr::Chan(Box::new(ident("int")))).with_tag(r#"`json:"ch"`"#),
            Field::named("UserName", ident("string")).with_tag(r#"`json:"user_name"`"#),
        ])]);
        let mut out = Vec::new();
        run(&file, &Config::new().rule("json", "camel"), &mut out);

        let kinds: Vec<_> = out.iter().map(|d| d.kind.code()).collect();
        assert_eq!(kinds, vec!["TC003", "TC001"]);
    }
}
