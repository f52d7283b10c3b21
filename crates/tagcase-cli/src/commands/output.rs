//! Output formatting for lint results.

use anyhow::Result;
use miette::NamedSource;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use tagcase_core::{LintResult, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `sources` is only consulted by [`OutputFormat::Pretty`].
pub fn print(
    result: &LintResult,
    format: OutputFormat,
    sources: &BTreeMap<PathBuf, String>,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Pretty => print_pretty(result, sources),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    print!("{}", render_text(result));

    let (errors, warnings, _) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!("{summary_color}{}\x1b[0m", summary(result));
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_pretty(result: &LintResult, sources: &BTreeMap<PathBuf, String>) {
    for violation in &result.violations {
        let diagnostic = ViolationDiagnostic::from(violation);
        let report = match sources.get(&violation.location.file) {
            Some(source) => miette::Report::new(diagnostic).with_source_code(NamedSource::new(
                violation.location.file.display().to_string(),
                source.clone(),
            )),
            None => miette::Report::new(diagnostic),
        };
        eprintln!("{report:?}");
    }
    println!("{}", summary(result));
}

/// Multi-line block per violation, each followed by a blank line.
fn render_text(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        out.push_str(&violation.format());
        out.push('\n');
    }
    out
}

/// One `file:line:col: severity [code] message` line per violation.
fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let _ = writeln!(out, "{violation}");
    }
    out
}

fn summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    format!(
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)",
        result.files_checked
    )
}
