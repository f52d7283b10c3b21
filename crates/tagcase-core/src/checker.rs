//! Per-field convention checks.

use tracing::debug;

use crate::ast::{StructType, TagLit};
use crate::case::{converter_for, CaseError, Converter};
use crate::config::Config;
use crate::report::{Diagnostic, DiagnosticKind, Reporter};
use crate::tag::StructTag;

/// Tag value marking a field as excluded from a key.
const SKIP_MARKER: &str = "-";

/// A configured rule with its convention resolved up front.
#[derive(Debug, Clone)]
struct ResolvedRule {
    key: String,
    name: String,
    converter: Result<Converter, CaseError>,
}

/// Checks tag values of single fields against the configured rules.
#[derive(Debug, Clone)]
pub struct ConventionChecker {
    rules: Vec<ResolvedRule>,
    use_field_name: bool,
}

impl ConventionChecker {
    /// Builds a checker from the active rules of `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let rules = config
            .active_rules()
            .map(|(key, name)| ResolvedRule {
                key: key.to_string(),
                name: name.to_string(),
                converter: converter_for(name),
            })
            .collect();
        Self {
            rules,
            use_field_name: config.use_field_name,
        }
    }

    /// Returns true when no rule is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule against one tagged field.
    ///
    /// Unknown conventions are reported at the struct's position, mismatches
    /// at the tag's position.
    pub fn check_field(
        &self,
        node: &StructType,
        tag: &TagLit,
        field_name: &str,
        reporter: &mut dyn Reporter,
    ) {
        let parsed = StructTag::from_literal(&tag.raw);

        for rule in &self.rules {
            let Some(value) = parsed.lookup(&rule.key) else {
                continue;
            };
            if value == SKIP_MARKER {
                debug!(field = field_name, key = %rule.key, "field excluded from key");
                continue;
            }
            if value.is_empty() {
                debug!(field = field_name, key = %rule.key, "empty tag value");
                continue;
            }

            let convert = match &rule.converter {
                Ok(convert) => *convert,
                Err(err) => {
                    reporter.report(Diagnostic {
                        kind: DiagnosticKind::UnknownConvention,
                        position: node.position,
                        message: format!("{}({}): {err}", rule.key, rule.name),
                    });
                    continue;
                }
            };

            let input = if self.use_field_name {
                field_name
            } else {
                value.as_str()
            };
            let expected = convert(input);

            if value != expected {
                reporter.report(Diagnostic {
                    message: format!(
                        "{}({}): got '{value}' want '{expected}'",
                        rule.key, rule.name
                    ),
                    kind: DiagnosticKind::Mismatch { expected },
                    position: tag.position,
                });
            }
        }
    }
}
