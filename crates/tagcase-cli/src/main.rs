//! tagcase CLI tool.
//!
//! Usage:
//! ```bash
//! tagcase check [OPTIONS] [PATH]
//! tagcase list-conventions
//! tagcase init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Struct tag naming-convention linter for Go sources
#[derive(Parser)]
#[command(name = "tagcase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check struct tags
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Tag rule as key=convention, e.g. json=camel (can be specified multiple times)
        #[arg(short, long = "rule", value_name = "KEY=CONVENTION")]
        rules: Vec<String>,

        /// Derive expected tag values from field names
        #[arg(long)]
        use_field_name: bool,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List supported naming conventions
    ListConventions,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source snippets rendered with miette.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            use_field_name,
            exclude,
        } => {
            let overrides = config_resolver::Overrides {
                rules,
                use_field_name,
                exclude,
            };
            let config = config_resolver::load(&path, cli.config.as_deref(), overrides)?;
            commands::check::run(&path, format, &config)
        }
        Commands::ListConventions => {
            commands::list_conventions::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
