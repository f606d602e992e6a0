//! Rich `miette` reports for violations and structural errors.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};

use crate::error::DocumentError;
use crate::format::violation_message;
use crate::types::{ElementSpan, Violation};

fn source_span(span: &ElementSpan) -> SourceSpan {
    SourceSpan::from((span.start_offset, span.len()))
}

/// A violation adapted to a miette diagnostic over the document source.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("[{code}] {message}")]
pub struct ViolationDiagnostic {
    code: &'static str,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label_message}")]
    span: Option<SourceSpan>,
    label_message: String,
    #[label("same name declared here")]
    ancestor: Option<SourceSpan>,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic for `violation` found in `source`.
    #[must_use]
    pub fn new(violation: &Violation, name: &str, source: &str) -> Self {
        Self {
            code: violation.code,
            message: violation_message(violation),
            src: NamedSource::new(name, source.to_string()),
            span: violation.location.as_ref().map(source_span),
            label_message: format!("{} on <{}>", violation.kind.name(), violation.tag_name),
            ancestor: violation.second_location().as_ref().map(source_span),
        }
    }
}

/// A structural error adapted to a miette diagnostic over the document source.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{error}")]
pub struct DocumentDiagnostic {
    error: DocumentError,
    #[help]
    help: Option<String>,
    #[source_code]
    src: NamedSource<String>,
    #[label("in this element")]
    span: Option<SourceSpan>,
}

impl DocumentDiagnostic {
    /// Builds a diagnostic for `error` raised on `source`.
    #[must_use]
    pub fn new(error: &DocumentError, name: &str, source: &str) -> Self {
        Self {
            error: error.clone(),
            help: error.help().map(|h| h.to_string()),
            src: NamedSource::new(name, source.to_string()),
            span: error.location().as_ref().map(source_span),
        }
    }
}

/// Renders any diagnostic with miette's graphical handler.
#[must_use]
pub fn render(diagnostic: &dyn Diagnostic, colored: bool) -> String {
    let theme = if colored {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut out = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .with_width(120)
        .render_report(&mut out, diagnostic)
        .is_err()
    {
        return diagnostic.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BemClass;
    use crate::types::{Severity, ViolationKind};

    const SOURCE: &str = "<div class=\"card\">\n  <div class=\"card\"></div>\n</div>\n";

    #[test]
    fn violation_report_mentions_rule_and_both_labels() {
        let outer = ElementSpan::at(1, 1).with_offsets(0, 51);
        let inner = ElementSpan::at(2, 3).with_offsets(21, 44);
        let violation = Violation::new(
            ViolationKind::RecursiveBlock {
                ancestor: Some(outer),
            },
            Severity::Error,
            BemClass::parse("card").unwrap(),
            "div",
            Some(inner),
        );

        let diag = ViolationDiagnostic::new(&violation, "index.html", SOURCE);
        assert_eq!(diag.labels().map(|labels| labels.count()), Some(2));

        let rendered = render(&diag, false);
        assert!(rendered.contains("BEM006"));
        assert!(rendered.contains("recursive-block on <div>"));
        assert!(rendered.contains("index.html"));
    }

    #[test]
    fn document_report_points_at_element() {
        let error = DocumentError::MalformedClass {
            class: "Card!Title".into(),
            tag_name: "div".into(),
            location: Some(ElementSpan::at(1, 1).with_offsets(0, 18)),
        };
        let diag = DocumentDiagnostic::new(&error, "index.html", SOURCE);
        let rendered = render(&diag, false);
        assert!(rendered.contains("Card!Title"));
        assert!(rendered.contains("in this element"));
    }
}
