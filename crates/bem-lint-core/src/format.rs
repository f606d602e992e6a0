//! Human-readable diagnostic lines.
//!
//! Every line starts with a positional marker (line right-aligned and
//! column left-aligned, three characters each), then `✖ error in tag
//! `<tag>`:` and a rule-specific message. Order is never changed here.

use crate::error::DocumentError;
use crate::types::{DocumentOutcome, ElementSpan, Violation, ViolationKind};

/// Positional marker for a span, e.g. `"  3:5  "`.
#[must_use]
pub fn marker(span: &ElementSpan) -> String {
    format!("{:>3}:{:<3}", span.start_line, span.start_col)
}

fn lead_in(location: Option<&ElementSpan>, tag_name: &str) -> String {
    match location {
        Some(span) => format!("{} ✖ error in tag `{tag_name}`: ", marker(span)),
        None => format!("✖ error in tag `{tag_name}`: "),
    }
}

fn see_also(ancestor: Option<&ElementSpan>) -> String {
    ancestor.map_or_else(String::new, |span| format!(" (see {})", marker(span).trim_end()))
}

/// Rule-specific message for a violation, without the location prefix.
#[must_use]
pub fn violation_message(violation: &Violation) -> String {
    let class = &violation.class;
    let base = class.modifier_base().unwrap_or_default();
    match &violation.kind {
        ViolationKind::NoParentBlock => format!(
            "element `{class}` is used outside of its block `{}`",
            class.block
        ),
        ViolationKind::RecursiveElement { ancestor } => format!(
            "element `{class}` is nested in an element with the same name{}",
            see_also(ancestor.as_ref())
        ),
        ViolationKind::MixinBeforeBlock => {
            format!("element `{class}` is listed before the block class of this tag")
        }
        ViolationKind::OnlyModifier => {
            format!("modifier `{class}` is used without `{base}`")
        }
        ViolationKind::ModifierBeforeParent => {
            format!("modifier `{class}` is listed before `{base}`")
        }
        ViolationKind::RecursiveBlock { ancestor } => format!(
            "block `{class}` is nested in a block with the same name{}",
            see_also(ancestor.as_ref())
        ),
    }
}

/// Formats one violation as a single display line.
#[must_use]
pub fn format_violation(violation: &Violation) -> String {
    let mut line = lead_in(violation.location.as_ref(), &violation.tag_name);
    line.push_str(&violation_message(violation));
    line
}

/// Formats violations in input order.
#[must_use]
pub fn format_violations(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(format_violation).collect()
}

/// Formats a structural document error as a single line.
#[must_use]
pub fn format_document_error(error: &DocumentError) -> String {
    match error {
        DocumentError::MalformedClass {
            tag_name, location, ..
        } => format!("{}{error}", lead_in(location.as_ref(), tag_name)),
        other => format!("✖ {other}"),
    }
}

/// Display lines for a document outcome.
///
/// Returns `None` for a clean document, one line for a structural error,
/// and one line per violation otherwise.
#[must_use]
pub fn document_messages(outcome: &DocumentOutcome) -> Option<Vec<String>> {
    match outcome {
        DocumentOutcome::Clean { .. } => None,
        DocumentOutcome::Failed { error } => Some(vec![format_document_error(error)]),
        DocumentOutcome::Violations { violations } => Some(format_violations(violations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BemClass;
    use crate::types::Severity;

    fn violation(kind: ViolationKind, class: &str) -> Violation {
        Violation::new(
            kind,
            Severity::Error,
            BemClass::parse(class).unwrap(),
            "div",
            Some(ElementSpan::at(12, 5)),
        )
    }

    #[test]
    fn marker_pads_line_and_column() {
        assert_eq!(marker(&ElementSpan::at(3, 5)), "  3:5  ");
        assert_eq!(marker(&ElementSpan::at(120, 14)), "120:14 ");
    }

    #[test]
    fn formats_every_rule() {
        let ancestor = Some(ElementSpan::at(4, 3));
        let violations = [
            violation(ViolationKind::NoParentBlock, "card__title"),
            violation(ViolationKind::RecursiveElement { ancestor }, "menu__item"),
            violation(ViolationKind::MixinBeforeBlock, "card__title"),
            violation(ViolationKind::OnlyModifier, "btn_disabled"),
            violation(ViolationKind::ModifierBeforeParent, "menu__item_active"),
            violation(ViolationKind::RecursiveBlock { ancestor }, "card"),
        ];
        let report = violations
            .iter()
            .zip(format_violations(&violations))
            .map(|(v, line)| format!("{}{line}", v.code))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(report, @r"
        BEM001 12:5   ✖ error in tag `div`: element `card__title` is used outside of its block `card`
        BEM002 12:5   ✖ error in tag `div`: element `menu__item` is nested in an element with the same name (see   4:3)
        BEM003 12:5   ✖ error in tag `div`: element `card__title` is listed before the block class of this tag
        BEM004 12:5   ✖ error in tag `div`: modifier `btn_disabled` is used without `btn`
        BEM005 12:5   ✖ error in tag `div`: modifier `menu__item_active` is listed before `menu__item`
        BEM006 12:5   ✖ error in tag `div`: block `card` is nested in a block with the same name (see   4:3)
        ");
    }

    #[test]
    fn missing_location_drops_marker() {
        let mut v = violation(ViolationKind::OnlyModifier, "btn_disabled");
        v.location = None;
        assert_eq!(
            format_violation(&v),
            "✖ error in tag `div`: modifier `btn_disabled` is used without `btn`"
        );
    }

    #[test]
    fn structural_errors_are_single_lines() {
        let malformed = DocumentError::MalformedClass {
            class: "Card!Title".into(),
            tag_name: "p".into(),
            location: Some(ElementSpan::at(9, 1)),
        };
        assert_eq!(
            format_document_error(&malformed),
            "  9:1   ✖ error in tag `p`: class 'Card!Title' does not follow BEM naming"
        );
        assert_eq!(
            format_document_error(&DocumentError::MissingHtml),
            "✖ no <html> element found"
        );
    }

    #[test]
    fn clean_outcome_has_no_messages() {
        let outcome = DocumentOutcome::Clean {
            outline: String::from("body\n"),
        };
        assert!(document_messages(&outcome).is_none());

        let failed = DocumentOutcome::Failed {
            error: DocumentError::MissingBody,
        };
        assert_eq!(document_messages(&failed).map(|m| m.len()), Some(1));
    }
}
