//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# tagcase configuration

# Check tag values against the Go field name instead of against themselves.
use_field_name = false

# Severity of convention mismatches: "error", "warning" or "info".
# severity = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./internal"

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
    "**/testdata/**",
]

# Respect .gitignore files
respect_gitignore = true

# Tag key -> naming convention.
# Run `tagcase list-conventions` for the supported names.
# An empty convention disables the key.
[rules]
json = "camel"
# yaml = "camel"
# db = "snake"
# xml = "goCamel"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("tagcase.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created tagcase.toml");
    println!("\nNext steps:");
    println!("  1. Edit tagcase.toml to configure tag rules");
    println!("  2. Run: tagcase check");

    Ok(())
}
