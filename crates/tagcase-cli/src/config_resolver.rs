//! Builds the effective configuration of a check run.
//!
//! The first existing file wins: the `--config` path, `tagcase.toml` or
//! `.tagcase.toml` in the checked directory, then `config.toml` in the global
//! directory (`$TAGCASE_CONFIG_DIR`, else `~/.tagcase`). Without any file the
//! defaults apply. Command-line overrides are merged on top and the result is
//! validated before a single Go file is read.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tagcase_core::Config;

const PROJECT_FILES: &[&str] = &["tagcase.toml", ".tagcase.toml"];
const GLOBAL_FILE: &str = "config.toml";

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Default)]
pub struct Overrides {
    /// `key=convention` pairs; replace file rules with the same key.
    pub rules: Vec<String>,
    /// Forces `use_field_name` on.
    pub use_field_name: bool,
    /// Extra exclude patterns, appended to the file's.
    pub exclude: Vec<String>,
}

impl Overrides {
    fn apply(self, config: &mut Config) -> Result<()> {
        for flag in &self.rules {
            let (key, convention) = parse_rule(flag)?;
            config.rules.insert(key, convention);
        }
        if self.use_field_name {
            config.use_field_name = true;
        }
        config.analyzer.exclude.extend(self.exclude);
        Ok(())
    }
}

/// Parses a `key=convention` rule flag.
fn parse_rule(flag: &str) -> Result<(String, String)> {
    let Some((key, convention)) = flag.split_once('=') else {
        bail!("invalid rule '{flag}': expected KEY=CONVENTION");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("invalid rule '{flag}': empty tag key");
    }
    Ok((key.to_string(), convention.trim().to_string()))
}

/// Loads, merges and validates the configuration for checking `target`.
///
/// `target` may be a directory or a single Go file; project files are looked
/// up next to it.
pub fn load(target: &Path, explicit: Option<&Path>, overrides: Overrides) -> Result<Config> {
    load_with_global(target, explicit, global_dir().as_deref(), overrides)
}

fn load_with_global(
    target: &Path,
    explicit: Option<&Path>,
    global: Option<&Path>,
    overrides: Overrides,
) -> Result<Config> {
    let project_dir = if target.is_file() {
        target.parent().unwrap_or(Path::new("."))
    } else {
        target
    };

    let mut config = match find_file(project_dir, explicit, global) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::new()
        }
    };

    overrides.apply(&mut config)?;
    config.validate().context("Config validation failed")?;
    Ok(config)
}

fn find_file(project_dir: &Path, explicit: Option<&Path>, global: Option<&Path>) -> Option<PathBuf> {
    // an explicit path is used as given; a missing file surfaces as a load error
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = PROJECT_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|p| p.is_file())
    {
        tracing::debug!("Using project config: {}", path.display());
        return Some(path);
    }

    let path = global?.join(GLOBAL_FILE);
    if path.is_file() {
        tracing::info!("Using global config: {}", path.display());
        return Some(path);
    }
    None
}

fn global_dir() -> Option<PathBuf> {
    match std::env::var_os("TAGCASE_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".tagcase")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn load_in(project: &Path, explicit: Option<&Path>, global: Option<&Path>) -> Config {
        load_with_global(project, explicit, global, Overrides::default()).unwrap()
    }

    #[test]
    fn defaults_without_any_file() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let config = load_in(project.path(), None, Some(global.path()));
        assert!(config.rules.is_empty());
        assert!(!config.use_field_name);
    }

    #[test]
    fn explicit_file_beats_project_file() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "tagcase.toml", "[rules]\njson = \"snake\"\n");
        let custom = write(tmp.path(), "custom.toml", "[rules]\njson = \"kebab\"\n");

        let config = load_in(tmp.path(), Some(&custom), None);
        assert_eq!(config.rules["json"], "kebab");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = load_with_global(tmp.path(), Some(&missing), None, Overrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "tagcase.toml", "[rules]\njson = \"camel\"\n");
        write(tmp.path(), ".tagcase.toml", "[rules]\njson = \"snake\"\n");

        assert_eq!(load_in(tmp.path(), None, None).rules["json"], "camel");
    }

    #[test]
    fn global_file_used_when_project_has_none() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        write(global.path(), "config.toml", "use_field_name = true\n");

        assert!(load_in(project.path(), None, Some(global.path())).use_field_name);
    }

    #[test]
    fn project_file_found_next_to_single_go_file() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".tagcase.toml", "[rules]\ndb = \"snake\"\n");
        let go_file = write(tmp.path(), "user.go", "package m\n");

        assert_eq!(load_in(&go_file, None, None).rules["db"], "snake");
    }

    #[test]
    fn overrides_merge_over_file() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "tagcase.toml",
            "[rules]\njson = \"snake\"\nxml = \"camel\"\n",
        );
        let overrides = Overrides {
            rules: vec!["json=camel".into(), "yaml=kebab".into()],
            use_field_name: true,
            exclude: vec!["gen/**".into()],
        };

        let config = load_with_global(tmp.path(), None, None, overrides).unwrap();
        assert_eq!(config.rules["json"], "camel");
        assert_eq!(config.rules["yaml"], "kebab");
        assert_eq!(config.rules["xml"], "camel");
        assert!(config.use_field_name);
        assert!(config.analyzer.exclude.contains(&"gen/**".to_string()));
        assert!(config.analyzer.exclude.contains(&"**/vendor/**".to_string()));
    }

    #[test]
    fn unknown_convention_rejected_before_checking() {
        let tmp = TempDir::new().unwrap();
        let overrides = Overrides {
            rules: vec!["json=bogus".into()],
            ..Overrides::default()
        };
        let err = load_with_global(tmp.path(), None, None, overrides).unwrap_err();
        assert!(format!("{err:#}").contains("rules.json: unsupported case: bogus"));
    }

    #[test]
    fn parse_rule_splits_on_first_equals() {
        assert_eq!(
            parse_rule("json=camel").unwrap(),
            ("json".to_string(), "camel".to_string())
        );
        assert_eq!(
            parse_rule(" db = ").unwrap(),
            ("db".to_string(), String::new())
        );
        assert!(parse_rule("json").is_err());
        assert!(parse_rule("=camel").is_err());
    }
}
