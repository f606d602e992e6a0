//! Output formatting for lint results.

use anyhow::Result;
use bem_lint_core::{
    document_messages, render, DocumentDiagnostic, DocumentOutcome, DocumentReport, LintResult,
    Severity, ViolationDiagnostic,
};
use miette::Diagnostic;
use std::io::IsTerminal;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, tree: bool) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text(result, tree)),
        OutputFormat::Compact => print!("{}", compact(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Rich => print!("{}", rich(result, std::io::stdout().is_terminal())),
    }
    Ok(())
}

fn text(result: &LintResult, tree: bool) -> String {
    let mut out = String::new();

    for doc in &result.documents {
        match (&doc.outcome, document_messages(&doc.outcome)) {
            (_, Some(lines)) => {
                out.push_str(&format!("--- {} ---\n", doc.path.display()));
                for line in lines {
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push('\n');
            }
            (DocumentOutcome::Clean { outline }, None) if tree => {
                out.push_str(&format!("--- {} ---\n{outline}\n", doc.path.display()));
            }
            _ => {}
        }
    }

    out.push_str(&summary(result));
    out.push('\n');
    out
}

fn summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let broken = result.failed_documents();

    let color = if errors > 0 || broken > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    format!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) and {broken} broken document(s) in {} file(s)\x1b[0m",
        result.files_checked()
    )
}

fn compact(result: &LintResult) -> String {
    let mut out = String::new();

    for doc in &result.documents {
        let path = doc.path.display();
        match &doc.outcome {
            DocumentOutcome::Clean { .. } => {}
            DocumentOutcome::Failed { error } => {
                let (line, col) = error
                    .location()
                    .map_or((1, 1), |span| (span.start_line, span.start_col));
                out.push_str(&format!(
                    "{path}:{line}:{col}: {} [structure] {error}\n",
                    Severity::Error
                ));
            }
            DocumentOutcome::Violations { violations } => {
                for v in violations {
                    let (line, col) = v
                        .location
                        .map_or((1, 1), |span| (span.start_line, span.start_col));
                    out.push_str(&format!(
                        "{path}:{line}:{col}: {} [{}] {}\n",
                        v.severity,
                        v.code,
                        bem_lint_core::violation_message(v)
                    ));
                }
            }
        }
    }

    out
}

fn rich(result: &LintResult, colored: bool) -> String {
    let mut out = String::new();

    for doc in &result.documents {
        for diagnostic in diagnostics(doc) {
            out.push_str(&render(diagnostic.as_ref(), colored));
            out.push('\n');
        }
    }

    out.push_str(&summary(result));
    out.push('\n');
    out
}

fn diagnostics(doc: &DocumentReport) -> Vec<Box<dyn Diagnostic>> {
    let name = doc.path.display().to_string();
    match &doc.outcome {
        DocumentOutcome::Clean { .. } => Vec::new(),
        DocumentOutcome::Failed { error } => {
            vec![Box::new(DocumentDiagnostic::new(error, &name, &doc.source))]
        }
        DocumentOutcome::Violations { violations } => violations
            .iter()
            .map(|v| {
                Box::new(ViolationDiagnostic::new(v, &name, &doc.source)) as Box<dyn Diagnostic>
            })
            .collect(),
    }
}
