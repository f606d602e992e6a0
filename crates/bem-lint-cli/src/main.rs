//! bem-lint CLI tool.
//!
//! Usage:
//! ```bash
//! bem-lint check [OPTIONS] [PATTERNS]...
//! bem-lint list-rules
//! bem-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// BEM class-name linter for HTML documents
#[derive(Parser)]
#[command(name = "bem-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BEM_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check HTML documents
    Check {
        /// Glob patterns selecting documents (default: from config, `**/*.html`)
        patterns: Vec<String>,

        /// Directory patterns are resolved against and config is looked up in
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Print the class outline of documents without findings
        #[arg(long)]
        tree: bool,
    },

    /// List available rules
    ListRules,

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
    /// Grouped, human-readable lines per document.
    #[default]
    Text,
    /// One-line-per-finding compact format.
    Compact,
    /// JSON output.
    Json,
    /// Graphical reports with source snippets.
    Rich,
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
            patterns,
            root,
            format,
            rules,
            exclude,
            tree,
        } => {
            let project_dir = root.clone().unwrap_or_else(|| PathBuf::from("."));
            let source = config_resolver::resolve(&project_dir, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                root,
                patterns,
                format,
                rules,
                exclude,
                tree,
            };
            commands::check::run(options, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
