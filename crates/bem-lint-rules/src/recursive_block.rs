//! Rule to forbid a block nested inside a block of the same name.
//!
//! # Rationale
//!
//! Blocks are independent components. `card` directly or indirectly inside
//! another `card` makes every `card__*` element below ambiguous.
//!
//! # Detected Patterns
//!
//! - `<div class="card"><div class="card">`
//!
//! Block modifiers and mixins on the ancestor do not count; only a plain
//! `card` token does.

use bem_lint_core::{ClassContext, Rule, Severity, ViolationKind};

/// Rule code for recursive-block.
pub const CODE: &str = "BEM006";

/// Rule name for recursive-block.
pub const NAME: &str = "recursive-block";

/// Forbids a block nested in a block with the same name.
#[derive(Debug, Clone)]
pub struct RecursiveBlock {
    /// Severity level.
    pub severity: Severity,
}

impl Default for RecursiveBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursiveBlock {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for RecursiveBlock {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids blocks nested in a block with the same name"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
        let class = ctx.class();
        if !class.is_plain_block() {
            return None;
        }
        let ancestor = ctx.find_ancestor(|classes| {
            classes
                .iter()
                .any(|c| c.is_plain_block() && c.raw == class.raw)
        })?;
        Some(ViolationKind::RecursiveBlock {
            ancestor: ancestor.span(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bem_lint_core::{BemTree, Checker, ElementNode, ElementSpan, Violation};

    fn check(body: &ElementNode) -> Vec<Violation> {
        let tree = BemTree::build(body).unwrap();
        Checker::new(vec![Box::new(RecursiveBlock::new())]).check_tree(&tree)
    }

    #[test]
    fn test_detects_nested_block() {
        let outer = ElementSpan::at(1, 1);
        let inner = ElementSpan::at(2, 3);
        let body = ElementNode::element("body").with_child(
            ElementNode::element("div")
                .with_class("card")
                .with_span(outer)
                .with_child(ElementNode::element("div").with_class("card").with_span(inner)),
        );
        let violations = check(&body);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, Some(inner));
        assert_eq!(violations[0].second_location(), Some(outer));
    }

    #[test]
    fn test_modifier_ancestor_does_not_count() {
        let body = ElementNode::element("body").with_child(
            ElementNode::element("div")
                .with_class("card_big")
                .with_child(ElementNode::element("div").with_class("card")),
        );
        assert!(check(&body).is_empty());
    }

    #[test]
    fn test_body_counts_as_ancestor() {
        let body = ElementNode::element("body")
            .with_class("page")
            .with_child(ElementNode::element("main").with_class("page"));
        assert_eq!(check(&body).len(), 1);
    }

    #[test]
    fn test_severity_builder() {
        assert_eq!(RecursiveBlock::default().default_severity(), Severity::Error);

        let body = ElementNode::element("body").with_child(
            ElementNode::element("div")
                .with_class("card")
                .with_child(ElementNode::element("div").with_class("card")),
        );
        let tree = BemTree::build(&body).unwrap();
        let rule = RecursiveBlock::new().severity(Severity::Warning);
        let violations = Checker::new(vec![Box::new(rule)]).check_tree(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
    }
}
