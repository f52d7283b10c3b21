//! Diagnostics emitted by the checker and the sinks that collect them.

use std::path::PathBuf;

use crate::ast::Position;
use crate::types::{Location, Severity, Suggestion, Violation};

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A tag value does not follow its convention.
    Mismatch {
        /// The value that would satisfy the convention.
        expected: String,
    },
    /// A rule names a convention that does not exist.
    UnknownConvention,
    /// A field's name or type cannot be determined.
    UnsupportedField,
}

impl DiagnosticKind {
    /// Rule code used when the diagnostic becomes a [`Violation`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mismatch { .. } => "TC001",
            Self::UnknownConvention => "TC002",
            Self::UnsupportedField => "TC003",
        }
    }

    /// Rule name used when the diagnostic becomes a [`Violation`].
    #[must_use]
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Mismatch { .. } => "tag-case-mismatch",
            Self::UnknownConvention => "unknown-convention",
            Self::UnsupportedField => "unsupported-field",
        }
    }
}

/// A single finding: where and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Kind of finding.
    pub kind: DiagnosticKind,
    /// Source position the finding is attached to.
    pub position: Position,
    /// Human-readable message.
    pub message: String,
}

/// Sink receiving diagnostics as they are found.
pub trait Reporter {
    /// Records one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics of one file as [`Violation`]s.
#[derive(Debug)]
pub struct ViolationCollector {
    file: PathBuf,
    mismatch_severity: Severity,
    violations: Vec<Violation>,
}

impl ViolationCollector {
    /// Creates a collector for `file`.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, mismatch_severity: Severity) -> Self {
        Self {
            file: file.into(),
            mismatch_severity,
            violations: Vec::new(),
        }
    }

    /// Returns the collected violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl Reporter for ViolationCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        let severity = match diagnostic.kind {
            DiagnosticKind::Mismatch { .. } => self.mismatch_severity,
            DiagnosticKind::UnknownConvention | DiagnosticKind::UnsupportedField => {
                Severity::Error
            }
        };
        let location = Location::from_position(self.file.clone(), diagnostic.position);
        let mut violation = Violation::new(
            diagnostic.kind.code(),
            diagnostic.kind.rule(),
            severity,
            location,
            diagnostic.message,
        );
        if let DiagnosticKind::Mismatch { expected } = diagnostic.kind {
            violation = violation.with_suggestion(Suggestion::new(format!("use '{expected}'")));
        }
        self.violations.push(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_maps_mismatch() {
        let mut collector = ViolationCollector::new("api/user.go", Severity::Warning);
        collector.report(Diagnostic {
            kind: DiagnosticKind::Mismatch {
                expected: "userId".into(),
            },
            position: Position::new(5, 20),
            message: "json(camel): got 'user_id' want 'userId'".into(),
        });

        let violations = collector.into_violations();
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, "TC001");
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!(v.location.file, PathBuf::from("api/user.go"));
        assert_eq!(
            v.suggestion.as_ref().map(|s| s.message.as_str()),
            Some("use 'userId'")
        );
    }

    #[test]
    fn configuration_problems_are_errors() {
        let mut collector = ViolationCollector::new("a.go", Severity::Info);
        collector.report(Diagnostic {
            kind: DiagnosticKind::UnknownConvention,
            position: Position::new(1, 1),
            message: "xml(bogus): unsupported case: bogus".into(),
        });
        let violations = collector.into_violations();
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[0].rule, "unknown-convention");
        assert!(violations[0].suggestion.is_none());
    }
}
