//! Check command implementation.

use anyhow::{Context, Result};
use bem_lint_core::{Analyzer, RuleBox};
use bem_lint_html::HtmlParser;
use bem_lint_rules::{all_rules, rules_by_name};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options for the check command.
pub struct CheckOptions {
    /// Root directory; the configured root when absent.
    pub root: Option<PathBuf>,
    /// Include patterns; the configured ones when empty.
    pub patterns: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule filter.
    pub rules: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Print outlines of clean documents.
    pub tree: bool,
}

/// Runs the check command.
pub fn run(options: CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    let mut builder = Analyzer::builder()
        .parser(HtmlParser::new())
        .config(config)
        .includes(options.patterns)
        .rules(select_rules(options.rules.as_deref()));

    if let Some(root) = options.root {
        builder = builder.root(root);
    }
    for pattern in options.exclude {
        builder = builder.exclude(pattern);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Checking {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, options.tree)?;

    if result.has_failures(analyzer.config().fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn select_rules(filter: Option<&str>) -> Vec<RuleBox> {
    match filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').collect();
            rules_by_name(&names)
        }
        None => all_rules(),
    }
}
