//! Check command implementation.
//!
//! Discovers Go files, parses them with Tree-sitter and checks every
//! tagged struct field against the configured conventions.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tagcase_core::{Config, LintResult, StructWalker, ViolationCollector};
use tagcase_go::GoParser;

use crate::OutputFormat;

/// Lint result plus the sources needed to render snippets.
pub struct Analysis {
    /// Collected violations.
    pub result: LintResult,
    /// Source text per relative path, filled only for snippet output.
    pub sources: BTreeMap<PathBuf, String>,
}

/// Runs the check command with an already resolved configuration.
pub fn run(path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let keep_sources = matches!(format, OutputFormat::Pretty);
    let analysis = analyze(path, config, keep_sources)?;

    super::output::print(&analysis.result, format, &analysis.sources)?;

    if analysis.result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Checks every Go file under `path`.
pub fn analyze(path: &Path, config: &Config, keep_sources: bool) -> Result<Analysis> {
    let mut analysis = Analysis {
        result: LintResult::new(),
        sources: BTreeMap::new(),
    };

    let walker = StructWalker::new(config);
    if walker.is_empty() {
        tracing::info!("No tag rules configured, nothing to check");
        return Ok(analysis);
    }

    let (root, files) = if path.is_file() {
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        (root, vec![path.to_path_buf()])
    } else {
        let root = if config.analyzer.root.is_absolute() {
            config.analyzer.root.clone()
        } else {
            path.join(&config.analyzer.root)
        };
        let files = discover_files(&root, &config.analyzer.exclude, config.analyzer.respect_gitignore)?;
        (root, files)
    };

    tracing::info!("Analyzing {} files", files.len());

    let parser = GoParser::new();
    let severity = config.mismatch_severity();

    for file_path in &files {
        let source = match std::fs::read_to_string(file_path) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!("Skipping {}: {err}", file_path.display());
                continue;
            }
        };

        let rel = file_path
            .strip_prefix(&root)
            .unwrap_or(file_path)
            .to_path_buf();

        let parsed = parser
            .parse(source)
            .with_context(|| format!("Failed to parse {}", rel.display()))?;
        if parsed.has_errors() {
            tracing::warn!("{}: syntax errors, results may be incomplete", rel.display());
        }

        let mut collector = ViolationCollector::new(rel.clone(), severity);
        walker.walk(&parsed, &mut collector);
        analysis.result.violations.extend(collector.into_violations());
        analysis.result.files_checked += 1;

        if keep_sources {
            analysis.sources.insert(rel, parsed.source().to_string());
        }
    }

    analysis.result.sort();
    Ok(analysis)
}

fn discover_files(root: &Path, exclude: &[String], respect_gitignore: bool) -> Result<Vec<PathBuf>> {
    let patterns = exclude
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect::<Result<Vec<_>>>()?;

    let extensions = GoParser::new().extensions();

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        if !extensions.contains(&ext.as_str()) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if is_excluded(rel, &patterns) {
            tracing::debug!("Excluded {}", rel.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_excluded(rel: &Path, patterns: &[glob::Pattern]) -> bool {
    let rel = rel.to_string_lossy().replace('\\', "/");
    patterns.iter().any(|p| p.matches(&rel))
}
