//! Rule to forbid an element nested inside an element of the same name.
//!
//! # Rationale
//!
//! `menu__item` inside another `menu__item` makes the element structure
//! ambiguous. Nested parts usually deserve their own element name or their
//! own block.
//!
//! # Detected Patterns
//!
//! - `<li class="menu__item"><a class="menu__item">`
//! - an element modifier such as `menu__item_active` nested under `menu__item`

use bem_lint_core::{ClassContext, Rule, Severity, ViolationKind};

/// Rule code for recursive-element.
pub const CODE: &str = "BEM002";

/// Rule name for recursive-element.
pub const NAME: &str = "recursive-element";

/// Forbids an element nested in an element with the same name.
#[derive(Debug, Clone)]
pub struct RecursiveElement {
    /// Severity level.
    pub severity: Severity,
}

impl Default for RecursiveElement {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursiveElement {
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

impl Rule for RecursiveElement {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids elements nested in an element with the same name"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ClassContext<'_>) -> Option<ViolationKind> {
        let element = ctx.class().element_class()?;
        let ancestor = ctx.ancestor_with_class(&element)?;
        Some(ViolationKind::RecursiveElement {
            ancestor: ancestor.span(),
        })
    }
}
